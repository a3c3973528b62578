//! Submissions Page
//!
//! The board panel: the submissions list plus the two aggregate charts.
//! Both derive from the record store on every change; neither keeps state
//! of its own between renders.

use leptos::*;

use crate::components::{BarChart, Loading, SubmissionList};
use crate::state::global::GlobalState;
use crate::survey::aggregate;

const REGION_CHART_COLOR: &str = "#ff4d4f";
const PRICE_CHART_COLOR: &str = "#ff9f43";

/// Submissions tab panel
#[component]
pub fn Submissions() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let store = state.store;
    let loading = state.loading;
    let region_data = Signal::derive(move || aggregate(&store.get()).regions);
    let price_data = Signal::derive(move || {
        aggregate(&store.get())
            .price_bands_ordered()
            .into_iter()
            .map(|(label, count)| (label.to_string(), count))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"What others said"</h1>
                <p class="text-gray-400 mt-1">
                    {move || format!("{} responses so far", store.get().len())}
                </p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Responses by region"</h2>
                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! { <BarChart color=REGION_CHART_COLOR data=region_data /> }
                            .into_view()
                    }
                }}
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Willingness to pay"</h2>
                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! { <BarChart color=PRICE_CHART_COLOR data=price_data /> }
                            .into_view()
                    }
                }}
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Submitted records"</h2>
                <SubmissionList />
            </section>
        </div>
    }
}
