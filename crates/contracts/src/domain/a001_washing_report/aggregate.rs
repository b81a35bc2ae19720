use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::enums::report_type::ReportType;
use crate::shared::form_schema::{FieldDefinition, FieldType};
use crate::shared::report_types::{initial_form_data, RegistryError, ReportTypeRegistry};

use super::rows::TableRows;

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of a submitted washing report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WashingReportId(pub Uuid);

impl WashingReportId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(WashingReportId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Form state
// ============================================================================

#[derive(Debug, Error, PartialEq)]
pub enum FormStateError {
    #[error("Form data must be a JSON object")]
    NotAnObject,

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: String, reason: String },
}

/// Value held by one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Table(TableRows),
}

impl FieldValue {
    pub fn empty_text() -> Self {
        FieldValue::Text(String::new())
    }

    /// Blank text or an empty list. Tables are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(value) => value.trim().is_empty(),
            FieldValue::List(values) => values.is_empty(),
            FieldValue::Table(_) => false,
        }
    }
}

/// Live record of one report being filled in.
///
/// Serializes to a flat object: `{"reportType": "...", "<field>": <value>, ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    #[serde(rename = "reportType")]
    report_type: ReportType,
    #[serde(flatten)]
    values: BTreeMap<String, FieldValue>,
}

impl FormState {
    /// Empty state; use `initial_form_data` for a populated one
    pub fn new(report_type: ReportType) -> Self {
        Self {
            report_type,
            values: BTreeMap::new(),
        }
    }

    pub fn report_type(&self) -> ReportType {
        self.report_type
    }

    /// Change the report type only; every other value is kept
    pub fn switch_report_type(&mut self, report_type: ReportType) {
        self.report_type = report_type;
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: FieldValue) {
        self.values.insert(field.into(), value);
    }

    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.insert(field, FieldValue::Text(value.into()));
    }

    pub fn set_list(&mut self, field: &str, values: Vec<String>) {
        self.insert(field, FieldValue::List(values));
    }

    pub fn set_table(&mut self, field: &str, rows: TableRows) {
        self.insert(field, FieldValue::Table(rows));
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        match self.values.get(field)? {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn list(&self, field: &str) -> Option<&[String]> {
        match self.values.get(field)? {
            FieldValue::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn table(&self, field: &str) -> Option<&TableRows> {
        match self.values.get(field)? {
            FieldValue::Table(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn table_mut(&mut self, field: &str) -> Option<&mut TableRows> {
        match self.values.get_mut(field)? {
            FieldValue::Table(rows) => Some(rows),
            _ => None,
        }
    }

    /// Field names in key order, without `reportType`
    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Colors chosen in the report header, copied into new color rows
    pub fn header_colors(&self) -> Vec<String> {
        match self.values.get("color") {
            Some(FieldValue::List(colors)) => colors.clone(),
            Some(FieldValue::Text(color)) if !color.trim().is_empty() => vec![color.clone()],
            _ => Vec::new(),
        }
    }

    /// Flat JSON object
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Parse a flat JSON form against the config of its `reportType`
    pub fn from_json(registry: &ReportTypeRegistry, value: Value) -> Result<Self, FormStateError> {
        Self::from_json_on(registry, value, Utc::now().date_naive())
    }

    /// Same as [`FormState::from_json`], with missing dates defaulting to `today`
    pub fn from_json_on(
        registry: &ReportTypeRegistry,
        value: Value,
        today: NaiveDate,
    ) -> Result<Self, FormStateError> {
        let Value::Object(mut object) = value else {
            return Err(FormStateError::NotAnObject);
        };

        let report_type = match object.remove("reportType") {
            None | Some(Value::Null) => registry.default_type(),
            Some(Value::String(key)) => registry.lookup(&key)?.config().report_type,
            Some(other) => {
                return Err(FormStateError::InvalidField {
                    field: "reportType".to_string(),
                    reason: format!("expected a string, got {}", other),
                })
            }
        };

        let mut state = initial_form_data(registry, report_type, today);
        let Some(config) = registry.get(report_type) else {
            return Ok(state);
        };

        for def in config.ordered_fields() {
            let Some(raw) = object.remove(def.name) else {
                continue;
            };
            if let Some(value) = decode_field(def, raw)? {
                state.insert(def.name, value);
            }
        }

        Ok(state)
    }
}

/// Decode one raw value by its definition; `None` keeps the synthesized default
fn decode_field(def: &FieldDefinition, raw: Value) -> Result<Option<FieldValue>, FormStateError> {
    let invalid = |reason: String| FormStateError::InvalidField {
        field: def.name.to_string(),
        reason,
    };

    if raw.is_null() {
        return Ok(None);
    }

    if let Some(kind) = def.table {
        return TableRows::from_value(kind, raw)
            .map(|rows| Some(FieldValue::Table(rows)))
            .map_err(|e| invalid(e.to_string()));
    }

    if def.field_type.is_list() {
        return match raw {
            Value::Array(items) => items
                .into_iter()
                .map(|item| {
                    scalar_to_string(item)
                        .ok_or_else(|| invalid("expected a list of strings".to_string()))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(|values| Some(FieldValue::List(values))),
            Value::String(value) if value.is_empty() => Ok(Some(FieldValue::List(Vec::new()))),
            Value::String(value) => Ok(Some(FieldValue::List(vec![value]))),
            other => Err(invalid(format!("expected a list, got {}", other))),
        };
    }

    match def.field_type {
        FieldType::Custom => Ok(Some(FieldValue::Text(match raw {
            Value::String(s) => s,
            other => other.to_string(),
        }))),
        _ => scalar_to_string(raw)
            .map(|value| Some(FieldValue::Text(value)))
            .ok_or_else(|| invalid("expected a single value".to_string())),
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_washing_report::rows::PullingTestRow;
    use crate::shared::report_types::UnknownReportTypePolicy;
    use serde_json::json;

    fn registry() -> ReportTypeRegistry {
        ReportTypeRegistry::standard().unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_flat_json_shape() {
        let mut state = FormState::new(ReportType::PullingTest);
        state.set_text("buyer", "ACME");
        state.set_list("images", vec!["a.png".to_string()]);
        state.set_table(
            "testRows",
            TableRows::PullingTest(vec![PullingTestRow::default()]),
        );

        let json = state.to_json().unwrap();
        assert_eq!(json["reportType"], "Pulling Test");
        assert_eq!(json["buyer"], "ACME");
        assert_eq!(json["images"], json!(["a.png"]));
        assert_eq!(json["testRows"][0]["pullingForce"], "");
    }

    #[test]
    fn test_switch_keeps_values() {
        let mut state = initial_form_data(&registry(), ReportType::HomeWash, day());
        state.set_text("ymStyle", "YM-1");
        state.switch_report_type(ReportType::HtTesting);
        assert_eq!(state.report_type(), ReportType::HtTesting);
        assert_eq!(state.text("ymStyle"), Some("YM-1"));
    }

    #[test]
    fn test_from_json_decodes_by_definition() {
        let value = json!({
            "reportType": "Pulling Test",
            "buyer": "ACME",
            "testTime": 930,
            "images": ["front.jpg", "back.png"],
            "testRows": [{ "type": "Snap", "pullingForce": "90N" }],
            "notAField": "ignored"
        });
        let state = FormState::from_json_on(&registry(), value, day()).unwrap();

        assert_eq!(state.report_type(), ReportType::PullingTest);
        assert_eq!(state.text("buyer"), Some("ACME"));
        assert_eq!(state.text("testTime"), Some("930"));
        assert_eq!(state.list("images").unwrap().len(), 2);
        assert!(state.get("notAField").is_none());
        // missing field takes its synthesized default
        assert_eq!(state.text("testDate"), Some("2026-03-14"));

        let Some(TableRows::PullingTest(rows)) = state.table("testRows") else {
            panic!("expected pulling rows");
        };
        assert_eq!(rows[0].row_type, "Snap");
        assert_eq!(rows[0].remark, "");
    }

    #[test]
    fn test_from_json_round_trip() {
        let registry = registry();
        let state = initial_form_data(&registry, ReportType::GarmentWash, day());
        let parsed = FormState::from_json_on(&registry, state.to_json().unwrap(), day()).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_from_json_errors() {
        let registry = registry();
        assert_eq!(
            FormState::from_json(&registry, json!([1, 2])).unwrap_err(),
            FormStateError::NotAnObject
        );

        let err = FormState::from_json(
            &registry,
            json!({ "reportType": "Pulling Test", "testRows": "nope" }),
        )
        .unwrap_err();
        assert!(matches!(err, FormStateError::InvalidField { ref field, .. } if field == "testRows"));

        let strict = registry.with_policy(UnknownReportTypePolicy::Reject);
        assert_eq!(
            FormState::from_json(&strict, json!({ "reportType": "Dry Clean" })).unwrap_err(),
            FormStateError::Registry(RegistryError::UnknownReportType("Dry Clean".to_string()))
        );
    }

    #[test]
    fn test_missing_report_type_uses_default() {
        let state = FormState::from_json_on(&registry(), json!({ "notes": "n" }), day()).unwrap();
        assert_eq!(state.report_type(), ReportType::HomeWash);
        assert_eq!(state.text("notes"), Some("n"));
    }

    #[test]
    fn test_header_colors() {
        let mut state = FormState::new(ReportType::GarmentWash);
        assert!(state.header_colors().is_empty());
        state.set_list("color", vec!["NAVY".to_string(), "RED".to_string()]);
        assert_eq!(state.header_colors(), vec!["NAVY", "RED"]);
        state.set_text("color", "BLACK");
        assert_eq!(state.header_colors(), vec!["BLACK"]);
    }

    #[test]
    fn test_report_id_parsing() {
        let id = WashingReportId::new_v4();
        assert_eq!(WashingReportId::from_string(&id.as_string()).unwrap(), id);
        assert!(WashingReportId::from_string("nope").is_err());
    }
}
