//! HTTP API Client
//!
//! Functions for talking to the spreadsheet-backed survey endpoint.

use gloo_net::http::Request;

use crate::survey::record::SubmissionRecord;

/// Default survey endpoint (Apps Script web app deployment).
pub const DEFAULT_API_URL: &str =
    "https://script.google.com/macros/s/AKfycbxSurveyBoardDeployment/exec";

/// Get the endpoint URL from local storage or use the default
pub fn get_api_url() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("survey_api_url") {
                url
            } else {
                DEFAULT_API_URL.to_string()
            }
        } else {
            DEFAULT_API_URL.to_string()
        }
    } else {
        DEFAULT_API_URL.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Fetch the full remote record set.
///
/// The endpoint replies with a JSON array of record objects. Anything else
/// (non-array payload, unparsable body, transport failure) is an error; the
/// caller leaves its store untouched in that case.
pub async fn fetch_submissions() -> Result<Vec<SubmissionRecord>, String> {
    let response = Request::get(&get_api_url())
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Endpoint returned status {}", response.status()));
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if !body.is_array() {
        return Err("Endpoint returned a non-array payload".to_string());
    }

    serde_json::from_value(body).map_err(|e| format!("Parse error: {}", e))
}

/// Push one record to the endpoint.
///
/// The endpoint only accepts opaque (no-cors) writes, so the response carries
/// no readable status or body: an `Ok` here means "the request completed",
/// not "the write succeeded", and even a transport error does not rule out
/// acceptance. Callers append optimistically either way and confirm with a
/// follow-up [`fetch_submissions`]. A transport with a readable response
/// would let real write failures be propagated distinctly; this one does not.
pub async fn submit_submission(record: &SubmissionRecord) -> Result<(), String> {
    Request::post(&get_api_url())
        .mode(web_sys::RequestMode::NoCors)
        .json(record)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    Ok(())
}
