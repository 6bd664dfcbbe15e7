//! Job-application dashboard - Yew WASM frontend.
//!
//! This crate provides the web UI for the automated job-search product:
//! a navigation shell with search controls and a connectivity indicator,
//! plus a landing dashboard summarizing jobs found, applications sent,
//! and recent activity fetched from the backend REST API.

pub mod api;
mod app;
mod components;
mod config;
mod feed;
mod pages;
mod state;

pub use app::App;
pub use config::AppConfig;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
