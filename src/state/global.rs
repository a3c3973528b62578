//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::survey::store::RecordStore;

/// The tab panel currently shown. The whole page is a state machine over
/// this one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveTab {
    Survey,
    Submissions,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// The record store: single source of truth for the list and both charts
    pub store: RwSignal<RecordStore>,
    /// Which tab panel is active
    pub active_tab: RwSignal<ActiveTab>,
    /// A fetch is in flight
    pub loading: RwSignal<bool>,
    /// Diagnostic from the last failed fetch, shown in the list region
    pub fetch_error: RwSignal<Option<String>>,
    /// Last successful reconciliation timestamp (ms since epoch)
    pub last_sync: RwSignal<Option<i64>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        store: create_rw_signal(RecordStore::new()),
        active_tab: create_rw_signal(ActiveTab::Survey),
        loading: create_rw_signal(false),
        fetch_error: create_rw_signal(None),
        last_sync: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
