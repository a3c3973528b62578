//! Survey Engine
//!
//! The pure core of the app: the submission record type with its display
//! rules, the record store, and the aggregation pass that feeds the charts.
//! Nothing in here touches the DOM, the network, or Leptos signals, so the
//! whole module is unit-testable on its own.

pub mod aggregate;
pub mod record;
pub mod store;

pub use aggregate::{aggregate, SurveyCounts, PRICE_BANDS};
pub use record::SubmissionRecord;
pub use store::RecordStore;
