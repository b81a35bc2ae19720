pub mod a001_washing_report;
