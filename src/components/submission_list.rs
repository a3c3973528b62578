//! Submission List Component
//!
//! Full-replacement projection of the record store, most recent first.
//! The whole list region is rebuilt from the store on every change; nothing
//! is prepended or patched in place, so a record can never show up twice.
//!
//! A failed fetch is reported in a banner above the list, never in place of
//! it: the store keeps its prior contents on failure (including any record
//! appended optimistically after a submit) and those stay visible.

use leptos::*;

use crate::state::global::GlobalState;
use crate::survey::record::SubmissionRecord;

/// What the list body shows. Derived only from the in-flight flag and the
/// store size; a fetch error contributes a banner, not a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListBody {
    Loading,
    NoRecords,
    Records,
}

/// Decide the banner and body for the list region. The banner is suppressed
/// while a fresh fetch is in flight.
fn render_plan(
    loading: bool,
    fetch_error: Option<&str>,
    record_count: usize,
) -> (Option<&str>, ListBody) {
    let body = if loading {
        ListBody::Loading
    } else if record_count == 0 {
        ListBody::NoRecords
    } else {
        ListBody::Records
    };

    (fetch_error.filter(|_| !loading), body)
}

/// Submissions list
#[component]
pub fn SubmissionList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="space-y-3">
            {move || {
                let store = state.store.get();
                let error = state.fetch_error.get();
                let (banner, body) =
                    render_plan(state.loading.get(), error.as_deref(), store.len());

                let banner = banner.map(|err| view! {
                    <p class="text-red-400 text-sm py-2 text-center">
                        "Could not refresh submissions: " {err.to_string()}
                    </p>
                });

                let body = match body {
                    ListBody::Loading => view! {
                        <p class="text-gray-400 text-sm py-6 text-center">
                            "Loading submissions..."
                        </p>
                    }
                    .into_view(),
                    ListBody::NoRecords => view! {
                        <p class="text-gray-400 text-sm py-6 text-center">
                            "No submissions yet"
                        </p>
                    }
                    .into_view(),
                    ListBody::Records => store
                        .newest_first()
                        .cloned()
                        .map(|record| view! { <SubmissionCard record=record /> })
                        .collect_view(),
                };

                (banner, body)
            }}
        </div>
    }
}

/// One submission, rendered as a card of label/value rows
#[component]
fn SubmissionCard(record: SubmissionRecord) -> impl IntoView {
    let fields: Vec<(&'static str, String)> = record
        .display_fields()
        .into_iter()
        .map(|(label, value)| (label, value.to_string()))
        .collect();

    view! {
        <div class="bg-gray-800 rounded-lg p-4 space-y-1">
            {if fields.is_empty() {
                view! {
                    <p class="text-gray-400 text-sm">"No information submitted"</p>
                }
                .into_view()
            } else {
                fields
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="text-sm">
                            <span class="font-semibold text-gray-300">{label}": "</span>
                            <span class="text-gray-100">{value}</span>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_does_not_hide_records() {
        // An optimistic append followed by a failed reconciling fetch: the
        // store still holds the record, and the list must keep showing it
        // alongside the error banner.
        let (banner, body) = render_plan(false, Some("Network error"), 3);
        assert_eq!(banner, Some("Network error"));
        assert_eq!(body, ListBody::Records);
    }

    #[test]
    fn test_fetch_error_over_empty_store() {
        let (banner, body) = render_plan(false, Some("Network error"), 0);
        assert_eq!(banner, Some("Network error"));
        assert_eq!(body, ListBody::NoRecords);
    }

    #[test]
    fn test_banner_suppressed_while_fetch_in_flight() {
        let (banner, body) = render_plan(true, Some("Network error"), 3);
        assert_eq!(banner, None);
        assert_eq!(body, ListBody::Loading);
    }

    #[test]
    fn test_plain_states() {
        assert_eq!(render_plan(false, None, 0), (None, ListBody::NoRecords));
        assert_eq!(render_plan(false, None, 2), (None, ListBody::Records));
        assert_eq!(render_plan(true, None, 2), (None, ListBody::Loading));
    }
}
