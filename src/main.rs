#![allow(warnings)]
//! Wishnest Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod pages;
mod route;
mod session;
mod sso;
mod store;
mod token_store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
