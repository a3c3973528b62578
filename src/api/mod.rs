//! Remote Endpoint Client
//!
//! HTTP access to the spreadsheet-backed survey endpoint.

pub mod client;

pub use client::{fetch_submissions, get_api_url, submit_submission};
