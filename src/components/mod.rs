//! UI Components
//!
//! Reusable Leptos components for the survey board.

pub mod bar_chart;
pub mod loading;
pub mod submission_list;
pub mod survey_form;
pub mod toast;

pub use bar_chart::BarChart;
pub use loading::Loading;
pub use submission_list::SubmissionList;
pub use survey_form::SurveyForm;
pub use toast::Toast;
