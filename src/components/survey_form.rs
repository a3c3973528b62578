//! Survey Form Component
//!
//! The response form. Submission hands the record to the sync layer, which
//! appends it optimistically and reconciles with the endpoint.

use leptos::*;

use crate::state::global::GlobalState;
use crate::state::sync::submit_and_reconcile;
use crate::survey::record::SubmissionRecord;
use crate::survey::PRICE_BANDS;

const REGIONS: [&str; 8] = [
    "Seoul",
    "Gyeonggi/Incheon",
    "Chungcheong",
    "Jeolla",
    "Gyeongsang",
    "Gangwon",
    "Jeju",
    "Other",
];

const PRIORITY_CRITERIA: [&str; 5] = [
    "Distance",
    "Price",
    "Medical expertise",
    "Reviews",
    "Facilities",
];

const PRIORITY_INFO: [&str; 5] = [
    "Price transparency",
    "Doctor background",
    "Real user reviews",
    "Night/emergency availability",
    "Wait times",
];

/// Survey response form
#[component]
pub fn SurveyForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (has_pet, set_has_pet) = create_signal("Yes".to_string());
    let (region, set_region) = create_signal("Seoul".to_string());
    let (region_other, set_region_other) = create_signal(String::new());
    let (priority_criteria, set_priority_criteria) = create_signal(String::new());
    let (concern, set_concern) = create_signal(String::new());
    let (priority1, set_priority1) = create_signal(String::new());
    let (priority2, set_priority2) = create_signal(String::new());
    let (price_range, set_price_range) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let is_other_region = move || region.get() == "Other";

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if submitting.get() {
            return;
        }

        // The one conditionally required field
        if is_other_region() && region_other.get().trim().is_empty() {
            state.show_error("Please type your region.");
            return;
        }

        let record = SubmissionRecord {
            has_pet: opt(has_pet.get()),
            region: opt(region.get()),
            region_other: is_other_region()
                .then(|| opt(region_other.get().trim().to_string()))
                .flatten(),
            priority_criteria: opt(priority_criteria.get()),
            concern_and_feature: opt(concern.get().trim().to_string()),
            priority1: opt(priority1.get()),
            priority2: opt(priority2.get()),
            price_range: opt(price_range.get()),
            timestamp: None, // stamped server-side
        };

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            submit_and_reconcile(state_clone, record).await;
            set_submitting.set(false);

            // Reset the form for the next respondent
            set_has_pet.set("Yes".to_string());
            set_region.set("Seoul".to_string());
            set_region_other.set(String::new());
            set_priority_criteria.set(String::new());
            set_concern.set(String::new());
            set_priority1.set(String::new());
            set_priority2.set(String::new());
            set_price_range.set(String::new());
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <SelectField
                label="Do you have a pet?"
                options=&["Yes", "No"]
                value=has_pet
                set_value=set_has_pet
                allow_empty=false
            />

            <SelectField
                label="Region"
                options=&REGIONS
                value=region
                set_value=set_region
                allow_empty=false
            />

            // Shown only while "Other" is selected
            {move || {
                if is_other_region() {
                    view! {
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Your region"</label>
                            <input
                                type="text"
                                placeholder="Type your region"
                                prop:value=move || region_other.get()
                                on:input=move |ev| set_region_other.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                    }
                    .into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <SelectField
                label="What matters most when picking a clinic?"
                options=&PRIORITY_CRITERIA
                value=priority_criteria
                set_value=set_priority_criteria
                allow_empty=true
            />

            <div>
                <label class="block text-sm text-gray-400 mb-2">
                    "Complaints about clinics / features you want"
                </label>
                <textarea
                    rows="3"
                    prop:value=move || concern.get()
                    on:input=move |ev| set_concern.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <SelectField
                label="Most important information"
                options=&PRIORITY_INFO
                value=priority1
                set_value=set_priority1
                allow_empty=true
            />

            <SelectField
                label="Second most important information"
                options=&PRIORITY_INFO
                value=priority2
                set_value=set_priority2
                allow_empty=true
            />

            <SelectField
                label="How much would you pay at most?"
                options=&PRICE_BANDS
                value=price_range
                set_value=set_price_range
                allow_empty=true
            />

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                {move || if submitting.get() {
                    view! {
                        <div class="loading-spinner w-5 h-5" />
                        <span>"Submitting..."</span>
                    }
                    .into_view()
                } else {
                    view! {
                        <span>"Submit response"</span>
                    }
                    .into_view()
                }}
            </button>
        </form>
    }
}

#[component]
fn SelectField(
    label: &'static str,
    options: &'static [&'static str],
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    allow_empty: bool,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <select
                on:change=move |ev| set_value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                {allow_empty.then(|| view! { <option value="">"—"</option> })}
                {options
                    .iter()
                    .map(|o| view! { <option value=*o>{*o}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

fn opt(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
