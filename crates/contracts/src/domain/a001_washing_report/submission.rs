use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::report_type::ReportType;

use super::aggregate::{FieldValue, FormState};
use super::rows::TableRows;
use super::validation::FieldIssue;

/// Who is submitting the report
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmittingUser {
    pub id: String,
    pub name: String,
}

/// Body of `POST /api/report-washing/submit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(default)]
    pub report_type: ReportType,
    /// Flat form object, `reportType` included
    pub form_data: Value,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
}

impl SubmissionPayload {
    /// Build the payload; only the selected shrinkage rows are sent
    pub fn from_form_state(
        state: &FormState,
        user: Option<&SubmittingUser>,
    ) -> Result<Self, serde_json::Error> {
        let mut state = state.clone();
        let selected = match state.table("shrinkageRows") {
            Some(TableRows::Shrinkage(rows)) => {
                Some(rows.iter().filter(|row| row.selected).cloned().collect::<Vec<_>>())
            }
            _ => None,
        };
        if let Some(rows) = selected {
            state.insert("shrinkageRows", FieldValue::Table(TableRows::Shrinkage(rows)));
        }

        Ok(Self {
            report_type: state.report_type(),
            form_data: state.to_json()?,
            user_id: user.map(|u| u.id.clone()).unwrap_or_default(),
            user_name: user.map(|u| u.name.clone()).unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitReportResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<FieldIssue>,
}

impl SubmitReportResponse {
    pub fn saved(id: impl Into<String>) -> Self {
        Self {
            success: true,
            id: Some(id.into()),
            message: "Report submitted successfully".to_string(),
            issues: Vec::new(),
        }
    }

    pub fn rejected(message: impl Into<String>, issues: Vec<FieldIssue>) -> Self {
        Self {
            success: false,
            id: None,
            message: message.into(),
            issues,
        }
    }
}

/// Report as persisted by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReport {
    pub id: String,
    pub report_type: ReportType,
    pub form_data: Value,
    pub user_id: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportListResponse {
    pub items: Vec<StoredReport>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_washing_report::rows::ShrinkageRow;
    use crate::shared::report_types::{initial_form_data, ReportTypeRegistry};
    use chrono::NaiveDate;

    #[test]
    fn test_only_selected_shrinkage_rows_are_sent() {
        let registry = ReportTypeRegistry::standard().unwrap();
        let mut state = initial_form_data(
            &registry,
            ReportType::GarmentWash,
            NaiveDate::from_ymd_opt(2026, 1, 9).unwrap(),
        );
        state.set_table(
            "shrinkageRows",
            TableRows::Shrinkage(vec![
                ShrinkageRow {
                    location: "Chest".to_string(),
                    selected: true,
                    ..ShrinkageRow::default()
                },
                ShrinkageRow {
                    location: "Sleeve".to_string(),
                    ..ShrinkageRow::default()
                },
            ]),
        );

        let user = SubmittingUser {
            id: "u-7".to_string(),
            name: "Dara".to_string(),
        };
        let payload = SubmissionPayload::from_form_state(&state, Some(&user)).unwrap();
        assert_eq!(payload.report_type, ReportType::GarmentWash);
        assert_eq!(payload.user_id, "u-7");
        let rows = payload.form_data["shrinkageRows"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["location"], "Chest");
        // the caller's state is untouched
        assert_eq!(state.table("shrinkageRows").unwrap().len(), 2);
    }

    #[test]
    fn test_payload_defaults() {
        let payload: SubmissionPayload = serde_json::from_str(r#"{"formData":{}}"#).unwrap();
        assert_eq!(payload.report_type, ReportType::HomeWash);
        assert_eq!(payload.user_name, "");

        let json = serde_json::to_value(SubmitReportResponse::rejected("bad", Vec::new())).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "message": "bad" }));
    }
}
