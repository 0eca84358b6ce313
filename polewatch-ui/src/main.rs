//! Polewatch Dashboard
//!
//! Pole fleet monitoring dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Live KPI tiles refreshed every 15 seconds
//! - Operator sign-in with token/role kept in local storage
//! - CSV export of telemetry, alerts, poles and the health report
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! It talks to the pole backend over HTTP only.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
