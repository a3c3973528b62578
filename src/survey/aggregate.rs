//! Aggregation Pass
//!
//! One-pass reduction of the record store into the categorical counts the
//! bar charts consume. Counts are rebuilt from scratch on every call rather
//! than incrementally updated, so they can never drift from the store.

use crate::survey::store::RecordStore;

/// Canonical price-band order for the price chart axis. The chart always
/// shows exactly these four bands, zero-filled, regardless of what the data
/// happens to contain or in which order it was encountered.
pub const PRICE_BANDS: [&str; 4] = ["under-500k", "500k-1M", "1M-2M", "2M-or-more"];

/// Categorical counts derived from one pass over the store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurveyCounts {
    /// Region label -> occurrences, in label-encounter order. The effective
    /// label is `region_other` when the region is the "other" sentinel.
    pub regions: Vec<(String, u32)>,
    /// Verbatim `price_range` value -> occurrences, in encounter order.
    pub prices: Vec<(String, u32)>,
}

impl SurveyCounts {
    /// Price counts projected onto the canonical four-band axis, zero-filled.
    /// Off-band values (there should be none, but the wire format does not
    /// enforce it) are simply not charted.
    pub fn price_bands_ordered(&self) -> [(&'static str, u32); 4] {
        PRICE_BANDS.map(|band| {
            let count = self
                .prices
                .iter()
                .find(|(label, _)| label == band)
                .map(|(_, n)| *n)
                .unwrap_or(0);
            (band, count)
        })
    }
}

/// Reduce the store into region and price counts.
///
/// Records without an effective region contribute nothing to the region
/// counts; records without a price contribute nothing to the price counts.
pub fn aggregate(store: &RecordStore) -> SurveyCounts {
    let mut counts = SurveyCounts::default();

    for record in store.all() {
        if let Some(region) = record.effective_region() {
            bump(&mut counts.regions, region);
        }
        if let Some(price) = record.price_range.as_deref().filter(|p| !p.is_empty()) {
            bump(&mut counts.prices, price);
        }
    }

    counts
}

// A Vec keeps first-encounter order; the handful of categories involved
// makes a linear scan cheaper than a map anyway.
fn bump(counts: &mut Vec<(String, u32)>, label: &str) {
    match counts.iter_mut().find(|(l, _)| l == label) {
        Some((_, n)) => *n += 1,
        None => counts.push((label.to_string(), 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::record::SubmissionRecord;

    fn record(region: &str, region_other: &str, price: &str) -> SubmissionRecord {
        let some = |s: &str| (!s.is_empty()).then(|| s.to_string());
        SubmissionRecord {
            region: some(region),
            region_other: some(region_other),
            price_range: some(price),
            ..Default::default()
        }
    }

    fn store_of(records: Vec<SubmissionRecord>) -> RecordStore {
        let mut store = RecordStore::new();
        store.replace_all(records);
        store
    }

    #[test]
    fn test_region_and_price_scenario() {
        let store = store_of(vec![
            record("Seoul", "", "500k-1M"),
            record("기타", "Jeju", "500k-1M"),
        ]);

        let counts = aggregate(&store);
        assert_eq!(
            counts.regions,
            vec![("Seoul".to_string(), 1), ("Jeju".to_string(), 1)]
        );

        let bands: Vec<u32> = counts.price_bands_ordered().iter().map(|(_, n)| *n).collect();
        assert_eq!(bands, [0, 2, 0, 0]);
    }

    #[test]
    fn test_empty_store_zero_fills_price_axis() {
        let counts = aggregate(&RecordStore::new());
        assert!(counts.regions.is_empty());
        assert_eq!(
            counts.price_bands_ordered(),
            [
                ("under-500k", 0),
                ("500k-1M", 0),
                ("1M-2M", 0),
                ("2M-or-more", 0),
            ]
        );
    }

    #[test]
    fn test_price_axis_order_is_fixed_regardless_of_encounter_order() {
        let store = store_of(vec![
            record("Seoul", "", "2M-or-more"),
            record("Seoul", "", "under-500k"),
            record("Seoul", "", "2M-or-more"),
        ]);

        let ordered = aggregate(&store).price_bands_ordered();
        let labels: Vec<&str> = ordered.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, PRICE_BANDS);
        assert_eq!(ordered[0].1, 1);
        assert_eq!(ordered[3].1, 2);
    }

    #[test]
    fn test_records_without_values_contribute_nothing() {
        let store = store_of(vec![
            record("", "", ""),
            record("Other", "", "500k-1M"), // "other" region with nothing typed
            record("Seoul", "", ""),
        ]);

        let counts = aggregate(&store);
        let region_total: u32 = counts.regions.iter().map(|(_, n)| n).sum();
        let price_total: u32 = counts.prices.iter().map(|(_, n)| n).sum();
        assert_eq!(region_total, 1);
        assert_eq!(price_total, 1);
        assert!(region_total as usize <= store.len());
        assert!(price_total as usize <= store.len());
    }

    #[test]
    fn test_off_band_price_counted_verbatim_but_not_charted() {
        let store = store_of(vec![record("Seoul", "", "negotiable")]);
        let counts = aggregate(&store);

        assert_eq!(counts.prices, vec![("negotiable".to_string(), 1)]);
        assert!(counts.price_bands_ordered().iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn test_region_counts_use_encounter_order() {
        let store = store_of(vec![
            record("Busan", "", ""),
            record("Seoul", "", ""),
            record("Busan", "", ""),
        ]);

        assert_eq!(
            aggregate(&store).regions,
            vec![("Busan".to_string(), 2), ("Seoul".to_string(), 1)]
        );
    }
}
