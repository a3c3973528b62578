//! Submission Record
//!
//! One respondent's survey answers as they travel over the wire, plus the
//! rules for which fields the submissions list actually shows.

use serde::{Deserialize, Serialize};

/// Region values meaning "other, typed by hand". Early responses carry the
/// Korean literal, current ones the English literal.
const REGION_OTHER_SENTINELS: [&str; 2] = ["Other", "기타"];

/// Affirmative answers to "do you have a pet". Suppressed in the list view:
/// every respondent reaching this survey has one, so showing it is noise.
const HAS_PET_AFFIRMATIVE: [&str; 2] = ["Yes", "예"];

/// A single survey submission.
///
/// The remote endpoint stores rows as flat JSON objects of string values.
/// No field is guaranteed to be present; `timestamp` is stamped server-side
/// and is metadata, never survey content.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(default, rename = "hasPet", skip_serializing_if = "Option::is_none")]
    pub has_pet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, rename = "regionOther", skip_serializing_if = "Option::is_none")]
    pub region_other: Option<String>,
    #[serde(default, rename = "priorityCriteria", skip_serializing_if = "Option::is_none")]
    pub priority_criteria: Option<String>,
    #[serde(default, rename = "concernAndFeature", skip_serializing_if = "Option::is_none")]
    pub concern_and_feature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority2: Option<String>,
    #[serde(default, rename = "priceRange", skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(default, rename = "Timestamp", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl SubmissionRecord {
    /// True when the respondent picked the "other" region option and the
    /// hand-typed `region_other` value is the one that counts.
    pub fn is_other_region(&self) -> bool {
        self.region
            .as_deref()
            .map(|r| REGION_OTHER_SENTINELS.contains(&r))
            .unwrap_or(false)
    }

    /// The region label this record contributes to aggregation:
    /// `region_other` when the region is the "other" sentinel, else `region`.
    /// `None` when neither carries a non-empty value.
    pub fn effective_region(&self) -> Option<&str> {
        let value = if self.is_other_region() {
            self.region_other.as_deref()
        } else {
            self.region.as_deref()
        };
        value.filter(|v| !v.is_empty())
    }

    /// The (label, value) pairs the submissions list shows for this record,
    /// in fixed field order. Applies the display rules:
    ///
    /// - `region_other` appears only when the region is the "other" sentinel
    /// - an affirmative `has_pet` is suppressed entirely
    /// - the server `timestamp` is never shown
    /// - absent and empty values are skipped
    ///
    /// An empty result means the caller should render the
    /// "no information submitted" placeholder instead of an empty card.
    pub fn display_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = Vec::new();

        if let Some(v) = non_empty(&self.has_pet) {
            if !HAS_PET_AFFIRMATIVE.contains(&v) {
                fields.push(("Has pet", v));
            }
        }
        if let Some(v) = non_empty(&self.region) {
            fields.push(("Region", v));
        }
        if self.is_other_region() {
            if let Some(v) = non_empty(&self.region_other) {
                fields.push(("Region (typed)", v));
            }
        }
        if let Some(v) = non_empty(&self.priority_criteria) {
            fields.push(("Clinic choice criteria", v));
        }
        if let Some(v) = non_empty(&self.concern_and_feature) {
            fields.push(("Concerns / wanted features", v));
        }
        if let Some(v) = non_empty(&self.priority1) {
            fields.push(("Top priority info", v));
        }
        if let Some(v) = non_empty(&self.priority2) {
            fields.push(("Second priority info", v));
        }
        if let Some(v) = non_empty(&self.price_range) {
            fields.push(("Willing to pay", v));
        }

        fields
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(region: &str, region_other: &str) -> SubmissionRecord {
        SubmissionRecord {
            region: Some(region.to_string()),
            region_other: Some(region_other.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_effective_region_plain() {
        let r = record("Seoul", "");
        assert_eq!(r.effective_region(), Some("Seoul"));
    }

    #[test]
    fn test_effective_region_other_sentinel() {
        assert_eq!(record("Other", "Jeju").effective_region(), Some("Jeju"));
        assert_eq!(record("기타", "Jeju").effective_region(), Some("Jeju"));
    }

    #[test]
    fn test_effective_region_other_without_value() {
        assert_eq!(record("Other", "").effective_region(), None);
        assert_eq!(SubmissionRecord::default().effective_region(), None);
    }

    #[test]
    fn test_display_hides_region_other_unless_sentinel() {
        let shown = record("Other", "Jeju");
        assert!(shown
            .display_fields()
            .iter()
            .any(|(label, v)| *label == "Region (typed)" && *v == "Jeju"));

        // A stray regionOther value on a non-"other" record stays hidden.
        let hidden = record("Seoul", "Jeju");
        assert!(!hidden
            .display_fields()
            .iter()
            .any(|(label, _)| *label == "Region (typed)"));
    }

    #[test]
    fn test_display_suppresses_affirmative_has_pet() {
        for yes in ["Yes", "예"] {
            let r = SubmissionRecord {
                has_pet: Some(yes.to_string()),
                ..Default::default()
            };
            assert!(r.display_fields().is_empty());
        }

        let no = SubmissionRecord {
            has_pet: Some("No".to_string()),
            ..Default::default()
        };
        assert_eq!(no.display_fields(), vec![("Has pet", "No")]);
    }

    #[test]
    fn test_display_excludes_timestamp_and_empties() {
        let r = SubmissionRecord {
            region: Some("Seoul".to_string()),
            priority1: Some(String::new()),
            timestamp: Some("2026-08-01T09:30:00Z".to_string()),
            ..Default::default()
        };
        assert_eq!(r.display_fields(), vec![("Region", "Seoul")]);
    }

    #[test]
    fn test_display_empty_record_yields_no_fields() {
        assert!(SubmissionRecord::default().display_fields().is_empty());
    }

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"[
            {"hasPet": "Yes", "region": "Seoul", "priceRange": "500k-1M",
             "Timestamp": "2026-08-01T09:30:00Z", "futureField": "ignored"},
            {}
        ]"#;
        let records: Vec<SubmissionRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].region.as_deref(), Some("Seoul"));
        assert_eq!(records[0].timestamp.as_deref(), Some("2026-08-01T09:30:00Z"));
        assert_eq!(records[1], SubmissionRecord::default());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let r = SubmissionRecord {
            region: Some("Seoul".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json, serde_json::json!({"region": "Seoul"}));
    }
}
