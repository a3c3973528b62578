//! Sync Actions
//!
//! The only code that mutates the record store: wholesale replacement after
//! a successful fetch, optimistic append after a submit. Tab handlers and the
//! form trigger these instead of mutating state at scattered call sites, so
//! every view derives from the same reconciliation path.

use leptos::{SignalSet, SignalUpdate};

use crate::api;
use crate::state::global::{ActiveTab, GlobalState};
use crate::survey::record::SubmissionRecord;

/// Fetch the full remote record set and replace the store with it.
///
/// This is the reconciliation point: on success the store becomes exactly
/// the remote set. On any failure (transport or malformed payload) the store
/// is left untouched and the diagnostic is surfaced in the list region.
pub async fn refresh_submissions(state: GlobalState) {
    state.loading.set(true);

    match api::fetch_submissions().await {
        Ok(records) => {
            state.store.update(|store| store.replace_all(records));
            state.fetch_error.set(None);
            state.last_sync.set(Some(chrono::Utc::now().timestamp_millis()));
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to fetch submissions: {}", e).into());
            state.fetch_error.set(Some(e));
        }
    }

    state.loading.set(false);
}

/// Submit one record, then converge with the remote store.
///
/// The write transport is opaque: neither completion nor a transport error
/// tells us whether the row landed. So the record is appended locally either
/// way (a refetch-only design would leave a visible gap until the endpoint
/// reflects it), the Submissions tab is force-activated, and a reconciling
/// fetch runs. If that fetch fails, the optimistic append is the only local
/// trace of the submission until the next refresh.
pub async fn submit_and_reconcile(state: GlobalState, record: SubmissionRecord) {
    match api::submit_submission(&record).await {
        Ok(()) => {
            state.show_success("Submitted! Refreshing the board.");
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("Opaque write reported an error: {}", e).into());
            state.show_error("The endpoint gave no readable reply; reloading to confirm.");
        }
    }

    state.store.update(|store| store.append(record));
    state.active_tab.set(ActiveTab::Submissions);

    refresh_submissions(state).await;
}

/// Switch tabs. Activating Submissions also refreshes from the endpoint so
/// the board never shows stale data on view; the cost is that two in-flight
/// fetches can complete out of order, and the later completion wins.
pub async fn activate_tab(state: GlobalState, tab: ActiveTab) {
    state.active_tab.set(tab);

    if tab == ActiveTab::Submissions {
        refresh_submissions(state).await;
    }
}
