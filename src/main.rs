//! Survey Board
//!
//! Pet clinic survey client built with Leptos (WASM).
//!
//! # Features
//!
//! - Survey response form with a conditional free-text region field
//! - Submissions board: de-duplicated list plus two aggregate bar charts
//! - Optimistic submit against an opaque (no-cors) endpoint, reconciled by
//!   refetching the authoritative record set
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to a spreadsheet-backed HTTP endpoint: GET returns
//! the full record set as a JSON array, POST appends one record.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod survey;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
