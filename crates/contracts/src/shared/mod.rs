pub mod form_schema;
pub mod report_types;
