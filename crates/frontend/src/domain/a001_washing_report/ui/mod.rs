pub mod dynamic_form;
pub mod field_input;
pub mod forms;
pub mod image_field;
pub mod page;
pub mod row_tables;
