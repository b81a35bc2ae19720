use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_washing_report::{
    ReportListResponse, StoredReport, SubmissionPayload, SubmitReportResponse, WashingReportId,
};
use contracts::enums::report_type::ReportType;
use serde::Deserialize;

use crate::domain::a001_washing_report::service::{self, ListError, SubmitError};
use crate::shared::data::db::get_connection;
use crate::shared::state::AppState;

type SubmitResult = Result<Json<SubmitReportResponse>, (StatusCode, Json<SubmitReportResponse>)>;

fn rejected(
    status: StatusCode,
    response: SubmitReportResponse,
) -> (StatusCode, Json<SubmitReportResponse>) {
    (status, Json(response))
}

/// Status and body for a submission that was not stored
fn submit_error_response(err: SubmitError) -> (StatusCode, Json<SubmitReportResponse>) {
    match err {
        SubmitError::Required(issues) => {
            let message = format!(
                "Please fill in: {}",
                issues
                    .iter()
                    .map(|i| i.label.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            rejected(
                StatusCode::UNPROCESSABLE_ENTITY,
                SubmitReportResponse::rejected(message, issues),
            )
        }
        SubmitError::Form(e) => rejected(
            StatusCode::UNPROCESSABLE_ENTITY,
            SubmitReportResponse::rejected(e.to_string(), Vec::new()),
        ),
        SubmitError::Image(e) => rejected(
            StatusCode::UNPROCESSABLE_ENTITY,
            SubmitReportResponse::rejected(e.to_string(), Vec::new()),
        ),
        SubmitError::Storage(e) => {
            tracing::error!("Failed to store washing report: {}", e);
            rejected(
                StatusCode::INTERNAL_SERVER_ERROR,
                SubmitReportResponse::rejected("Failed to save report", Vec::new()),
            )
        }
    }
}

/// POST /api/report-washing/submit
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<SubmissionPayload>, JsonRejection>,
) -> SubmitResult {
    let Json(payload) = payload.map_err(|e| {
        tracing::warn!("Rejected washing report body: {}", e);
        rejected(
            StatusCode::BAD_REQUEST,
            SubmitReportResponse::rejected(e.body_text(), Vec::new()),
        )
    })?;

    let report = service::prepare(&state.registry, payload).map_err(submit_error_response)?;

    let db = get_connection().map_err(|e| submit_error_response(SubmitError::Storage(e)))?;
    let report = service::store(db, report)
        .await
        .map_err(submit_error_response)?;

    Ok(Json(SubmitReportResponse::saved(report.id)))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub report_type: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// GET /api/report-washing
pub async fn list(Query(query): Query<ListQuery>) -> Result<Json<ReportListResponse>, StatusCode> {
    let report_type = match query.report_type.as_deref().filter(|s| !s.is_empty()) {
        Some(key) => Some(ReportType::parse(key).ok_or(StatusCode::BAD_REQUEST)?),
        None => None,
    };

    let db = get_connection().map_err(|e| {
        tracing::error!("{}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    service::list(db, report_type, query.page, query.limit)
        .await
        .map(Json)
        .map_err(|e| match e {
            ListError::PageOutOfRange { .. } => {
                tracing::warn!("Rejected washing report listing: {}", e);
                StatusCode::BAD_REQUEST
            }
            ListError::Storage(e) => {
                tracing::error!("Failed to list washing reports: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        })
}

/// GET /api/report-washing/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<StoredReport>, StatusCode> {
    if WashingReportId::from_string(&id).is_err() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let db = get_connection().map_err(|e| {
        tracing::error!("{}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    service::get_by_id(db, &id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get washing report {}: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::report_types::UnknownReportTypePolicy;
    use serde_json::json;

    fn state() -> AppState {
        AppState::new(UnknownReportTypePolicy::FallbackToDefault).unwrap()
    }

    #[tokio::test]
    async fn test_missing_required_fields_is_unprocessable() {
        let payload = SubmissionPayload {
            report_type: ReportType::HomeWash,
            form_data: json!({ "factory": "F1" }),
            user_id: String::new(),
            user_name: String::new(),
        };
        let (status, Json(body)) = submit(State(state()), Ok(Json(payload))).await.unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(!body.success);
        assert_eq!(body.issues.len(), 1);
        assert_eq!(body.issues[0].field, "ymStyle");
        assert_eq!(body.message, "Please fill in: YM Style");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let body = Json::<SubmissionPayload>::from_bytes(b"{");
        assert!(body.is_err());

        let (status, Json(response)) = submit(State(state()), body).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!response.success);
        assert!(response.id.is_none());
        assert!(!response.message.is_empty());
    }

    #[tokio::test]
    async fn test_bad_id_is_rejected_before_storage() {
        let err = get_by_id(Path("not-a-uuid".to_string())).await.unwrap_err();
        assert_eq!(err, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_filter_is_bad_request() {
        let query = ListQuery {
            report_type: Some("Dry Clean".to_string()),
            page: None,
            limit: None,
        };
        assert_eq!(list(Query(query)).await.unwrap_err(), StatusCode::BAD_REQUEST);
    }
}
