//! Survey Page
//!
//! The response form panel.

use leptos::*;

use crate::components::SurveyForm;

/// Survey tab panel
#[component]
pub fn Survey() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Pet Clinic Survey"</h1>
                <p class="text-gray-400 mt-1">
                    "Tell us how you choose a clinic for your pet"
                </p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <SurveyForm />
            </section>
        </div>
    }
}
