//! Inventory Frontend Entry Point

mod models;
mod error;
mod config;
mod commands;
mod table;
mod view_model;
mod csv_codec;
mod import;
mod export;
mod form;
mod session;
mod store;
mod actions;
mod browser;
mod context;
mod components;
mod app;

#[cfg(test)]
mod test_support;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_logger::init(log::Level::Info);
    mount_to_body(App);
}
