//! Puppy Roster Frontend Entry Point

mod app;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if roster_logger::init(log::LevelFilter::Info).is_err() {
        leptos::logging::warn!("logger already installed");
    }
    mount_to_body(App);
}
