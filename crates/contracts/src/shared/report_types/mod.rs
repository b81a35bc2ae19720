mod config;
mod dto;
pub mod fields;
mod initial_state;
mod registry;
mod resolver;

pub use config::{standard_configs, FormComponent, ReportTypeConfig};
pub use dto::{FieldDefinitionDto, ReportTypeConfigDto, ReportTypeOption};
pub use initial_state::{initial_form_data, initial_form_data_for_today, initial_value, DATE_FORMAT};
pub use registry::{ConfigLookup, RegistryError, ReportTypeRegistry, UnknownReportTypePolicy};
pub use resolver::{
    resolve_for_report_type, resolve_form, resolve_form_by_name, FormFallback, FormRenderer,
    FormResolution,
};
