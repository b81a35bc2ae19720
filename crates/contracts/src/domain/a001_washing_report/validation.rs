use serde::{Deserialize, Serialize};

use crate::shared::report_types::ReportTypeConfig;

use super::aggregate::FormState;

/// One required-field problem, reported to the user by label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub label: String,
    pub message: String,
}

/// Collect every required field of `config` that is blank in `state`
pub fn validate_required(config: &ReportTypeConfig, state: &FormState) -> Result<(), Vec<FieldIssue>> {
    let issues: Vec<FieldIssue> = config
        .ordered_fields()
        .filter(|def| def.required)
        .filter(|def| state.get(def.name).map_or(true, |value| value.is_blank()))
        .map(|def| FieldIssue {
            field: def.name.to_string(),
            label: def.label.to_string(),
            message: format!("{} is required", def.label),
        })
        .collect();

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
