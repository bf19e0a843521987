//! Leptos DragScroll Utilities
//!
//! Horizontal drag-to-scroll for carousel strips using mouse events.
//! Press, drag, release; the strip follows the pointer scaled by a
//! speed factor.

use leptos::html::Div;
use leptos::prelude::*;

/// Drag state signals for one scrollable strip
#[derive(Clone, Copy)]
pub struct DragScrollSignals {
    pub dragging_read: ReadSignal<bool>,
    pub dragging_write: WriteSignal<bool>,
    /// Pointer x at mousedown
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    /// Strip scrollLeft at mousedown
    pub start_scroll_read: ReadSignal<i32>,
    pub start_scroll_write: WriteSignal<i32>,
}

pub fn create_dragscroll_signals() -> DragScrollSignals {
    let (dragging_read, dragging_write) = signal(false);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_scroll_read, start_scroll_write) = signal(0i32);
    DragScrollSignals {
        dragging_read,
        dragging_write,
        start_x_read,
        start_x_write,
        start_scroll_read,
        start_scroll_write,
    }
}

/// New scrollLeft for the current pointer position.
pub fn scroll_position(start_scroll: i32, start_x: i32, x: i32, factor: f64) -> i32 {
    let walk = ((x - start_x) as f64 * factor) as i32;
    start_scroll - walk
}

/// Create mousedown handler: records pointer and scroll origin.
pub fn make_on_mousedown(
    ds: DragScrollSignals,
    strip: NodeRef<Div>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(el) = strip.get_untracked() {
            ds.dragging_write.set(true);
            ds.start_x_write.set(ev.client_x());
            ds.start_scroll_write.set(el.scroll_left());
        }
    }
}

/// Create mousemove handler: scrolls the strip while dragging.
pub fn make_on_mousemove(
    ds: DragScrollSignals,
    strip: NodeRef<Div>,
    factor: f64,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if !ds.dragging_read.get_untracked() {
            return;
        }
        ev.prevent_default();
        if let Some(el) = strip.get_untracked() {
            let next = scroll_position(
                ds.start_scroll_read.get_untracked(),
                ds.start_x_read.get_untracked(),
                ev.client_x(),
                factor,
            );
            el.set_scroll_left(next);
        }
    }
}

/// Create mouseup/mouseleave handler: ends the drag.
pub fn make_on_release(ds: DragScrollSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        ds.dragging_write.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_follows_pointer() {
        // Pointer moved 40px right, factor 2.0: strip scrolls 80px left
        assert_eq!(scroll_position(200, 100, 140, 2.0), 120);
        // Pointer moved left: strip scrolls right
        assert_eq!(scroll_position(200, 100, 60, 1.5), 260);
    }

    #[test]
    fn test_no_movement_no_scroll() {
        assert_eq!(scroll_position(150, 80, 80, 2.0), 150);
    }
}
