//! State Management
//!
//! Global application state and the sync actions that mutate it.

pub mod global;
pub mod sync;

pub use global::{provide_global_state, ActiveTab, GlobalState};
pub use sync::{activate_tab, refresh_submissions, submit_and_reconcile};
