//! Pages
//!
//! Top-level panel components, one per tab.

pub mod submissions;
pub mod survey;

pub use submissions::Submissions;
pub use survey::Survey;
