pub mod a001_washing_report;
pub mod report_types;
