//! Shelf Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod error;
mod loader;
mod models;
mod table;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
