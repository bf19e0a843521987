//! RealEstate Frontend Entry Point

mod agents;
mod api;
mod app;
mod components;
mod config;
mod models;
mod pages;
mod search;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
