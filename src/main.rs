//! Priority Todo Frontend Entry Point

mod app;
mod components;
mod context;
mod labels;
mod lifecycle;
mod listing;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[APP] Mounting".into());
    mount_to_body(App);
}
