//! Loading Component

use leptos::*;

/// Centered spinner shown in a chart panel while a sync is in flight
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-10" aria-busy="true">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}
