use serde::{Deserialize, Serialize};

use crate::enums::report_type::ReportType;
use crate::shared::form_schema::{FieldDefinition, FieldType, TableKind};

use super::config::ReportTypeConfig;

/// Entry of the report-type selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTypeOption {
    pub value: ReportType,
    pub label: String,
}

/// Field definition as sent over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinitionDto {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<String>,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default)]
    pub autocomplete: bool,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub defaults_to_today: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableKind>,
}

impl From<&FieldDefinition> for FieldDefinitionDto {
    fn from(def: &FieldDefinition) -> Self {
        Self {
            name: def.name.to_string(),
            field_type: def.field_type,
            label: def.label.to_string(),
            required: def.required,
            depends_on: def.depends_on.map(str::to_string),
            readonly: def.readonly,
            placeholder: def.placeholder.map(str::to_string),
            rows: def.rows,
            max_count: def.max_count,
            options: def
                .options
                .unwrap_or(&[])
                .iter()
                .map(|o| o.to_string())
                .collect(),
            autocomplete: def.autocomplete,
            searchable: def.searchable,
            defaults_to_today: def.defaults_to_today,
            default_value: def.default_value.map(str::to_string),
            table: def.table,
        }
    }
}

/// Report type configuration as sent over the wire.
///
/// Component names travel as plain strings; a client resolves them with
/// `resolve_form_by_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTypeConfigDto {
    pub report_type: ReportType,
    pub id: String,
    pub label: String,
    pub description: String,
    pub fields: Vec<FieldDefinitionDto>,
    pub use_default_form: bool,
    #[serde(default)]
    pub form_component: Option<String>,
    pub use_default_pdf: bool,
    #[serde(default)]
    pub pdf_component: Option<String>,
    pub use_default_excel: bool,
    #[serde(default)]
    pub excel_generator: Option<String>,
}

impl From<&ReportTypeConfig> for ReportTypeConfigDto {
    fn from(config: &ReportTypeConfig) -> Self {
        Self {
            report_type: config.report_type,
            id: config.id.to_string(),
            label: config.label.to_string(),
            description: config.description.to_string(),
            fields: config.ordered_fields().map(FieldDefinitionDto::from).collect(),
            use_default_form: config.use_default_form,
            form_component: config.form_component.map(|c| c.name().to_string()),
            use_default_pdf: config.use_default_pdf,
            pdf_component: config.pdf_component.map(str::to_string),
            use_default_excel: config.use_default_excel,
            excel_generator: config.excel_generator.map(str::to_string),
        }
    }
}
