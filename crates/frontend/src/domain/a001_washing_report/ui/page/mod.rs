//! Washing report page
//!
//! MVVM split:
//! - model.rs: backend calls (submit, recent reports)
//! - view_model.rs: form state, report type switching, submit command
//! - view.rs: Leptos components

mod model;
mod view;
mod view_model;

pub use view::WashingReportPage;
pub use view_model::WashingReportViewModel;
