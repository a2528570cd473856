#![allow(warnings)]
//! Todo Widget Frontend Entry Point

mod models;
mod ids;
mod error;
mod config;
mod storage;
mod task_list;
mod store;
mod dispatch;
mod theme;
mod context;
mod components;
mod app;

use app::App;
use config::WidgetConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = WidgetConfig::default();
    if let Err(e) = rolling_logger::init(rolling_logger::default_level(), config.log_capacity) {
        web_sys::console::error_1(&e.into());
    }
    rolling_logger::install_panic_hook();
    log::info!("[APP] starting todo widget v{}", env!("CARGO_PKG_VERSION"));

    mount_to_body(App);
}
