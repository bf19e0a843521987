//! Pagination Window
//!
//! Up to five consecutive page numbers centered on the current page,
//! clamped to `[1, total_pages]`.

/// Maximum page numbers shown at once.
pub const PAGE_WINDOW: u32 = 5;

/// Visible page numbers (1-based). Callers render nothing when
/// `total_pages <= 1`; the window itself is still well defined.
pub fn page_window(current: u32, total_pages: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }
    let start = current.saturating_sub(2).max(1);
    let end = (start + PAGE_WINDOW - 1).min(total_pages);
    // Re-clamp when the window runs short at the end
    let start = end.saturating_sub(PAGE_WINDOW - 1).max(1);
    (start..=end).collect()
}

pub fn is_first_page(current: u32) -> bool {
    current <= 1
}

pub fn is_last_page(current: u32, total_pages: u32) -> bool {
    current >= total_pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_centered_mid_range() {
        assert_eq!(page_window(6, 20), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_window_clamped_at_start() {
        assert_eq!(page_window(1, 20), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 20), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_reclamped_at_end() {
        assert_eq!(page_window(20, 20), vec![16, 17, 18, 19, 20]);
        assert_eq!(page_window(19, 20), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_window_shorter_than_five_pages() {
        assert_eq!(page_window(2, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(1, 0), Vec::<u32>::new());
    }

    #[test]
    fn test_boundary_predicates() {
        assert!(is_first_page(1));
        assert!(!is_first_page(2));
        assert!(is_last_page(20, 20));
        assert!(!is_last_page(19, 20));
    }
}
