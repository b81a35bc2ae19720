use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::shared::report_types::{
    initial_form_data_for_today, ConfigLookup, FieldDefinitionDto, ReportTypeConfig,
    ReportTypeConfigDto, ReportTypeOption, ReportTypeRegistry,
};

use crate::shared::state::AppState;

/// Config for `key` under the registry's unknown-type policy; fallbacks are logged
fn lookup_config<'a>(
    registry: &'a ReportTypeRegistry,
    key: &str,
) -> Result<&'a ReportTypeConfig, StatusCode> {
    match registry.lookup(key) {
        Ok(ConfigLookup::Found(config)) => Ok(config),
        Ok(ConfigLookup::Defaulted { requested, config }) => {
            tracing::warn!(
                "Unknown report type '{}', using '{}'",
                requested,
                config.label
            );
            Ok(config)
        }
        Err(e) => {
            tracing::warn!("{}", e);
            Err(StatusCode::NOT_FOUND)
        }
    }
}

/// GET /api/report-types
pub async fn list_options(State(state): State<AppState>) -> Json<Vec<ReportTypeOption>> {
    Json(state.registry.report_type_options().collect())
}

/// GET /api/report-types/:key
pub async fn get_config(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ReportTypeConfigDto>, StatusCode> {
    let config = lookup_config(&state.registry, &key)?;
    Ok(Json(ReportTypeConfigDto::from(config)))
}

/// GET /api/report-types/:key/fields/:field
pub async fn get_field(
    State(state): State<AppState>,
    Path((key, field)): Path<(String, String)>,
) -> Result<Json<FieldDefinitionDto>, StatusCode> {
    let config = lookup_config(&state.registry, &key)?;
    config
        .field(&field)
        .map(|def| Json(FieldDefinitionDto::from(def)))
        .ok_or(StatusCode::NOT_FOUND)
}

/// GET /api/report-types/:key/initial-form-data
pub async fn get_initial_form_data(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let config = lookup_config(&state.registry, &key)?;
    initial_form_data_for_today(&state.registry, config.report_type)
        .to_json()
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to serialize initial form data: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::report_type::ReportType;
    use contracts::shared::report_types::UnknownReportTypePolicy;

    fn state(policy: UnknownReportTypePolicy) -> AppState {
        AppState::new(policy).unwrap()
    }

    #[tokio::test]
    async fn test_options_in_declaration_order() {
        let Json(options) = list_options(State(state(UnknownReportTypePolicy::Reject))).await;
        assert_eq!(options.len(), 5);
        assert_eq!(options[0].value, ReportType::HomeWash);
        assert_eq!(options[4].label, "Pulling Test");
    }

    #[tokio::test]
    async fn test_unknown_key_by_policy() {
        let lenient = state(UnknownReportTypePolicy::FallbackToDefault);
        let Json(dto) = get_config(State(lenient), Path("nonexistent-type".to_string()))
            .await
            .unwrap();
        assert_eq!(dto.report_type, ReportType::HomeWash);

        let strict = state(UnknownReportTypePolicy::Reject);
        let err = get_config(State(strict), Path("nonexistent-type".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_field_lookup() {
        let state = state(UnknownReportTypePolicy::FallbackToDefault);
        let Json(def) = get_field(
            State(state.clone()),
            Path(("ht_testing".to_string(), "finalResults".to_string())),
        )
        .await
        .unwrap();
        assert_eq!(def.default_value.as_deref(), Some("Accepted"));

        let err = get_field(
            State(state),
            Path(("HT Testing".to_string(), "nope".to_string())),
        )
        .await
        .unwrap_err();
        assert_eq!(err, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_initial_form_data() {
        let state = state(UnknownReportTypePolicy::FallbackToDefault);
        let Json(form) = get_initial_form_data(State(state), Path("pulling_test".to_string()))
            .await
            .unwrap();
        assert_eq!(form["reportType"], "Pulling Test");
        assert_eq!(form["testRows"].as_array().unwrap().len(), 1);
        assert_eq!(form["images"], serde_json::json!([]));
    }
}
