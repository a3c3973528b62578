//! App Root Component
//!
//! Main application component: the tab state machine and global providers.

use leptos::*;

use crate::components::Toast;
use crate::pages::{Submissions, Survey};
use crate::state::global::{provide_global_state, ActiveTab, GlobalState};
use crate::state::sync::{activate_tab, refresh_submissions};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Warm the store once on load, even though the Survey tab shows first
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            refresh_submissions(state).await;
        });
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Header />

            // Active tab panel
            <main class="flex-1 container mx-auto px-4 py-8 pb-24 max-w-3xl">
                {move || match state.active_tab.get() {
                    ActiveTab::Survey => view! { <Survey /> }.into_view(),
                    ActiveTab::Submissions => view! { <Submissions /> }.into_view(),
                }}
            </main>

            // Footer with sync status
            <Footer />

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Header with brand and tab buttons
#[component]
fn Header() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4 max-w-3xl">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🐾"</span>
                        <span class="text-xl font-bold text-white">"Survey Board"</span>
                    </div>

                    <div class="flex items-center space-x-1">
                        <TabButton label="Survey" tab=ActiveTab::Survey />
                        <TabButton label="Submissions" tab=ActiveTab::Submissions />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// One tab button. Activating Submissions also triggers a refresh so the
/// board is never stale on view.
#[component]
fn TabButton(
    label: &'static str,
    tab: ActiveTab,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let active_tab = state.active_tab;
    let on_click = move |_| {
        let state = state.clone();
        spawn_local(async move {
            activate_tab(state, tab).await;
        });
    };

    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if active_tab.get() == tab {
                    format!("{} bg-gray-700 text-white", base)
                } else {
                    format!("{} text-gray-300 hover:text-white hover:bg-gray-700", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// Footer component showing sync status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto max-w-3xl flex items-center justify-between text-sm">
                // Last reconciliation time
                <div class="text-gray-400">
                    {move || {
                        state.last_sync.get()
                            .and_then(|ts| chrono::DateTime::from_timestamp_millis(ts))
                            .map(|dt| {
                                // Respondent's wall clock, not UTC
                                let local = dt.with_timezone(&chrono::Local);
                                format!("Last sync: {}", local.format("%H:%M:%S"))
                            })
                            .unwrap_or_else(|| "Not synced".to_string())
                    }}
                </div>

                // Loading indicator
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Syncing..."</span>
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
