//! Toast Component
//!
//! Transient status messages for submit and sync outcomes. The success and
//! error signals auto-clear a few seconds after being set (see
//! `state/global.rs`), so a toast never needs a dismiss button.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast area, pinned top-center above the active panel
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let success = state.success;
    let error = state.error;

    view! {
        <div class="fixed top-4 inset-x-0 z-50 flex flex-col items-center space-y-2 pointer-events-none">
            {move || success.get().map(|msg| toast_bubble("💌", "bg-emerald-600", msg))}
            {move || error.get().map(|msg| toast_bubble("⚠", "bg-rose-600", msg))}
        </div>
    }
}

fn toast_bubble(icon: &'static str, bg: &'static str, message: String) -> impl IntoView {
    view! {
        <div class=format!(
            "flex items-center space-x-2 {} text-white px-4 py-2 rounded-full shadow-lg text-sm font-medium",
            bg
        )>
            <span>{icon}</span>
            <span>{message}</span>
        </div>
    }
}
