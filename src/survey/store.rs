//! Record Store
//!
//! The in-memory sequence of submissions, oldest first. Every view (list,
//! charts) derives from this one store; nothing else caches records.

use crate::survey::record::SubmissionRecord;

/// Ordered collection of submission records for the current page session.
///
/// The store is replaced wholesale on every successful fetch (the
/// reconciliation point) and appended to on local submission. The remote
/// format has no identity key, so duplicate-freedom rests on that discipline:
/// a fetch never merges, and a submit appends exactly once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<SubmissionRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap the entire backing sequence for the authoritative remote set.
    /// Records appended since the last fetch that the remote set does not yet
    /// contain are dropped here; they reappear once the endpoint reflects them.
    pub fn replace_all(&mut self, records: Vec<SubmissionRecord>) {
        self.records = records;
    }

    /// Add one record at the most-recent end.
    pub fn append(&mut self, record: SubmissionRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn all(&self) -> &[SubmissionRecord] {
        &self.records
    }

    /// Records in list-display order, most recent first.
    pub fn newest_first(&self) -> impl Iterator<Item = &SubmissionRecord> {
        self.records.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(name: &str) -> SubmissionRecord {
        SubmissionRecord {
            region: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut store = RecordStore::new();
        store.append(region("a"));
        store.append(region("b"));
        store.append(region("c"));

        let regions: Vec<_> = store.all().iter().map(|r| r.region.clone().unwrap()).collect();
        assert_eq!(regions, ["a", "b", "c"]);
    }

    #[test]
    fn test_newest_first_is_exact_reverse_of_append_order() {
        let mut store = RecordStore::new();
        for name in ["a", "b", "c", "d"] {
            store.append(region(name));
        }

        let listed: Vec<_> = store
            .newest_first()
            .map(|r| r.region.clone().unwrap())
            .collect();
        assert_eq!(listed, ["d", "c", "b", "a"]);
    }

    #[test]
    fn test_replace_all_drops_prior_contents() {
        let mut store = RecordStore::new();
        store.append(region("stale"));
        store.replace_all(vec![region("fresh-1"), region("fresh-2")]);

        assert_eq!(store.len(), 2);
        assert!(store
            .all()
            .iter()
            .all(|r| r.region.as_deref() != Some("stale")));
    }

    #[test]
    fn test_replace_all_drops_unreflected_optimistic_append() {
        // A submit whose follow-up fetch does not yet include it: the local
        // append survives a failed fetch (the store is untouched) but a later
        // successful fetch without it makes it disappear until the endpoint
        // catches up. That window is accepted behavior.
        let mut store = RecordStore::new();
        store.replace_all(vec![region("remote-1")]);
        store.append(region("mine"));
        assert_eq!(store.len(), 2);

        store.replace_all(vec![region("remote-1")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].region.as_deref(), Some("remote-1"));
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.newest_first().count(), 0);
    }
}
