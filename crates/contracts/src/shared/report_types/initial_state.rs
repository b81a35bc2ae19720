//! Initial-state synthesizer
//!
//! Builds a fresh form for a report type from its field definitions alone:
//! list fields start empty, dates start blank or today, tables start with
//! their seed rows and everything else takes its declared default.

use chrono::{NaiveDate, Utc};

use crate::domain::a001_washing_report::{FieldValue, FormState, TableRows};
use crate::enums::report_type::ReportType;
use crate::shared::form_schema::{FieldDefinition, FieldType};

use super::registry::ReportTypeRegistry;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default value of a single field
pub fn initial_value(def: &FieldDefinition, today: NaiveDate) -> FieldValue {
    if def.field_type.is_list() {
        return FieldValue::List(Vec::new());
    }
    if let Some(kind) = def.table {
        return FieldValue::Table(TableRows::seed(kind));
    }
    match def.field_type {
        FieldType::Date if def.defaults_to_today => {
            FieldValue::Text(today.format(DATE_FORMAT).to_string())
        }
        FieldType::Date => FieldValue::empty_text(),
        _ => FieldValue::Text(def.default_value.unwrap_or_default().to_string()),
    }
}

/// Fresh form for `report_type`: `reportType` plus one value per declared field.
/// A type the registry lacks gets the default type's fields.
pub fn initial_form_data(
    registry: &ReportTypeRegistry,
    report_type: ReportType,
    today: NaiveDate,
) -> FormState {
    let config = registry
        .get(report_type)
        .unwrap_or_else(|| registry.default_config());

    let mut state = FormState::new(config.report_type);
    for def in config.ordered_fields() {
        state.insert(def.name, initial_value(def, today));
    }
    state
}

pub fn initial_form_data_for_today(registry: &ReportTypeRegistry, report_type: ReportType) -> FormState {
    initial_form_data(registry, report_type, Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_washing_report::{PassFail, VisualAssessmentRow};
    use crate::shared::report_types::standard_configs;
    use crate::shared::report_types::UnknownReportTypePolicy;
    use std::collections::BTreeSet;

    fn registry() -> ReportTypeRegistry {
        ReportTypeRegistry::standard().unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_key_set_matches_declared_fields() {
        let registry = registry();
        for report_type in ReportType::all() {
            let state = initial_form_data(&registry, report_type, today());
            let json = state.to_json().unwrap();
            let keys: BTreeSet<_> = json.as_object().unwrap().keys().cloned().collect();

            let config = registry.get(report_type).unwrap();
            let mut expected: BTreeSet<String> =
                config.fields.iter().map(|f| f.to_string()).collect();
            expected.insert("reportType".to_string());

            assert_eq!(keys, expected, "{report_type}");
            assert_eq!(json["reportType"], report_type.display_name());
        }
    }

    #[test]
    fn test_list_fields_start_empty() {
        let registry = registry();
        for config in registry.configs() {
            let state = initial_form_data(&registry, config.report_type, today());
            for def in config.ordered_fields().filter(|d| d.field_type.is_list()) {
                assert_eq!(
                    state.list(def.name),
                    Some(&[][..]),
                    "{} / {}",
                    config.label,
                    def.name
                );
            }
        }
    }

    #[test]
    fn test_date_defaults() {
        let registry = registry();
        let home = initial_form_data(&registry, ReportType::HomeWash, today());
        assert_eq!(home.text("sendToHomeWashingDate"), Some("2026-10-18"));

        let ht = initial_form_data(&registry, ReportType::HtTesting, today());
        assert_eq!(ht.text("reportDate"), Some(""));
        assert_eq!(ht.text("recDate"), Some(""));
        assert_eq!(ht.text("finalDate"), Some("2026-10-18"));

        let emb = initial_form_data(&registry, ReportType::EmbPrintingTesting, today());
        assert_eq!(emb.text("checkedDate"), Some("2026-10-18"));

        let pulling = initial_form_data(&registry, ReportType::PullingTest, today());
        assert_eq!(pulling.text("testDate"), Some("2026-10-18"));

        let garment = initial_form_data(&registry, ReportType::GarmentWash, today());
        assert_eq!(garment.text("date"), Some(""));
    }

    #[test]
    fn test_pulling_rows_seeded() {
        let state = initial_form_data(&registry(), ReportType::PullingTest, today());
        let json = state.to_json().unwrap();
        let rows = json["testRows"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        let row = rows[0].as_object().unwrap();
        assert_eq!(row.len(), 6);
        assert!(row.values().all(|v| v == ""));
    }

    #[test]
    fn test_final_result_defaults_to_accepted() {
        let registry = registry();
        let ht = initial_form_data(&registry, ReportType::HtTesting, today());
        assert_eq!(ht.text("finalResults"), Some("Accepted"));
        let emb = initial_form_data(&registry, ReportType::EmbPrintingTesting, today());
        assert_eq!(emb.text("finalResult"), Some("Accepted"));
        let garment = initial_form_data(&registry, ReportType::GarmentWash, today());
        assert_eq!(garment.text("finalResult"), Some("Accepted"));
        assert_eq!(garment.text("notes"), Some(""));
    }

    #[test]
    fn test_garment_tables_seeded() {
        let state = initial_form_data(&registry(), ReportType::GarmentWash, today());

        let Some(TableRows::ColorFastness(rows)) = state.table("colorFastnessRows") else {
            panic!("expected color fastness rows");
        };
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.pass_fail == PassFail::Pass));

        let Some(TableRows::VisualAssessment(rows)) = state.table("visualAssessmentRows") else {
            panic!("expected visual assessment rows");
        };
        assert_eq!(rows.len(), 7);
        assert!(rows.iter().all(|r: &VisualAssessmentRow| r.accepted));

        let Some(TableRows::Shrinkage(rows)) = state.table("shrinkageRows") else {
            panic!("expected shrinkage rows");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].requirement, "±5%");
    }

    #[test]
    fn test_same_day_is_idempotent() {
        let registry = registry();
        for report_type in ReportType::all() {
            assert_eq!(
                initial_form_data(&registry, report_type, today()),
                initial_form_data(&registry, report_type, today())
            );
        }
    }

    #[test]
    fn test_unconfigured_type_uses_default() {
        let configs: Vec<_> = standard_configs()
            .into_iter()
            .filter(|c| c.report_type != ReportType::PullingTest)
            .collect();
        let registry = ReportTypeRegistry::new(
            configs,
            ReportType::HomeWash,
            UnknownReportTypePolicy::FallbackToDefault,
        )
        .unwrap();
        let state = initial_form_data(&registry, ReportType::PullingTest, today());
        assert_eq!(state.report_type(), ReportType::HomeWash);
        assert!(state.get("testRows").is_none());
    }
}
