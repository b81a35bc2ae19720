use chrono::Utc;
use contracts::domain::a001_washing_report::{
    validate_images, validate_required, FieldIssue, FormState, FormStateError, ImageAttachment,
    ImageError, ReportListResponse, StoredReport, SubmissionPayload, WashingReportId,
};
use contracts::enums::report_type::ReportType;
use contracts::shared::report_types::{fields::MAX_IMAGES, ConfigLookup, ReportTypeRegistry};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use thiserror::Error;

use super::repository;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormStateError),

    #[error("{} required field(s) missing", .0.len())]
    Required(Vec<FieldIssue>),

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ListError {
    #[error("page {page} is out of range")]
    PageOutOfRange { page: u64 },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Parse and check a submission, producing the record to store
pub fn prepare(
    registry: &ReportTypeRegistry,
    payload: SubmissionPayload,
) -> Result<StoredReport, SubmitError> {
    let mut form_data = payload.form_data;
    if let Value::Object(object) = &mut form_data {
        object
            .entry("reportType")
            .or_insert_with(|| Value::String(payload.report_type.display_name().to_string()));
    }

    if let Some(key) = form_data.get("reportType").and_then(Value::as_str) {
        if let Ok(ConfigLookup::Defaulted { requested, config }) = registry.lookup(key) {
            tracing::warn!(
                "Unknown report type '{}' submitted, stored as '{}'",
                requested,
                config.label
            );
        }
    }

    let state = FormState::from_json(registry, form_data)?;
    let config = registry
        .get(state.report_type())
        .unwrap_or_else(|| registry.default_config());

    validate_required(config, &state).map_err(SubmitError::Required)?;

    let images: Vec<ImageAttachment> = state
        .list("images")
        .unwrap_or(&[])
        .iter()
        .map(|name| ImageAttachment::from_file_name(name))
        .collect();
    let max_images = config
        .field("images")
        .and_then(|def| def.max_count)
        .unwrap_or(MAX_IMAGES);
    validate_images(&images, max_images)?;

    Ok(StoredReport {
        id: WashingReportId::new_v4().as_string(),
        report_type: state.report_type(),
        form_data: state.to_json().map_err(anyhow::Error::from)?,
        user_id: payload.user_id,
        user_name: payload.user_name,
        created_at: Utc::now(),
    })
}

/// Persist a prepared report
pub async fn store(db: &DatabaseConnection, report: StoredReport) -> Result<StoredReport, SubmitError> {
    repository::insert(db, &report).await?;
    tracing::info!(
        "Washing report {} saved ({}, user '{}')",
        report.id,
        report.report_type,
        report.user_name
    );
    Ok(report)
}

pub async fn get_by_id(db: &DatabaseConnection, id: &str) -> anyhow::Result<Option<StoredReport>> {
    repository::get_by_id(db, id).await
}

/// Row offset of `page`; SQLite takes signed 64-bit offsets
fn page_offset(page: u64, limit: u64) -> Option<u64> {
    (page - 1)
        .checked_mul(limit)
        .filter(|offset| i64::try_from(*offset).is_ok())
}

/// One page of stored reports; pages start at 1
pub async fn list(
    db: &DatabaseConnection,
    report_type: Option<ReportType>,
    page: Option<u64>,
    limit: Option<u64>,
) -> Result<ReportListResponse, ListError> {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let offset = page_offset(page, limit).ok_or(ListError::PageOutOfRange { page })?;
    let (items, total) = repository::list_paginated(db, report_type, limit, offset).await?;
    Ok(ReportListResponse {
        items,
        total,
        page,
        limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::{connect, ensure_schema};
    use contracts::shared::report_types::UnknownReportTypePolicy;
    use serde_json::json;

    fn registry() -> ReportTypeRegistry {
        ReportTypeRegistry::standard().unwrap()
    }

    fn pulling_payload() -> SubmissionPayload {
        SubmissionPayload {
            report_type: ReportType::PullingTest,
            form_data: json!({
                "poNumber": "PO-1",
                "color": "BLACK",
                "buyer": "ACME",
                "testDate": "2026-04-02",
                "images": ["front.jpg"]
            }),
            user_id: "u1".to_string(),
            user_name: "Dara".to_string(),
        }
    }

    #[test]
    fn test_prepare_fills_report_type_and_defaults() {
        let report = prepare(&registry(), pulling_payload()).unwrap();
        assert_eq!(report.report_type, ReportType::PullingTest);
        assert_eq!(report.form_data["reportType"], "Pulling Test");
        assert_eq!(report.form_data["testRows"].as_array().unwrap().len(), 1);
        assert_eq!(report.user_name, "Dara");
    }

    #[test]
    fn test_prepare_collects_required_issues() {
        let mut payload = pulling_payload();
        payload.form_data = json!({ "reportType": "Pulling Test" });
        match prepare(&registry(), payload) {
            Err(SubmitError::Required(issues)) => {
                let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
                // testDate falls back to today
                assert_eq!(fields, vec!["poNumber", "color", "buyer"]);
            }
            other => panic!("expected required issues, got {:?}", other),
        }
    }

    #[test]
    fn test_prepare_rejects_bad_images() {
        let mut payload = pulling_payload();
        payload.form_data["images"] = json!(["a.png", "b.png", "c.png", "d.png", "e.png", "f.png"]);
        assert!(matches!(
            prepare(&registry(), payload),
            Err(SubmitError::Image(ImageError::TooMany { max: 5 }))
        ));

        let mut payload = pulling_payload();
        payload.form_data["images"] = json!(["scan.bmp"]);
        assert!(matches!(
            prepare(&registry(), payload),
            Err(SubmitError::Image(ImageError::UnsupportedType { .. }))
        ));
    }

    #[test]
    fn test_prepare_under_reject_policy() {
        let registry = registry().with_policy(UnknownReportTypePolicy::Reject);
        let mut payload = pulling_payload();
        payload.form_data["reportType"] = json!("Dry Clean");
        assert!(matches!(
            prepare(&registry, payload),
            Err(SubmitError::Form(FormStateError::Registry(_)))
        ));
    }

    #[tokio::test]
    async fn test_submit_then_list() {
        let db = connect("sqlite::memory:").await.unwrap();
        ensure_schema(&db).await.unwrap();
        let registry = registry();

        let prepared = prepare(&registry, pulling_payload()).unwrap();
        let saved = store(&db, prepared).await.unwrap();
        let loaded = get_by_id(&db, &saved.id).await.unwrap().unwrap();
        assert_eq!(loaded.form_data, saved.form_data);

        let page = list(&db, Some(ReportType::PullingTest), None, Some(500))
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, MAX_PAGE_SIZE);

        let empty = list(&db, Some(ReportType::HomeWash), Some(0), None).await.unwrap();
        assert_eq!(empty.total, 0);
        assert_eq!(empty.page, 1);
    }

    #[test]
    fn test_page_offset_bounds() {
        assert_eq!(page_offset(1, 20), Some(0));
        assert_eq!(page_offset(3, 20), Some(40));
        assert_eq!(page_offset(u64::MAX, 20), None);
        // fits u64 but not SQLite's signed offset
        assert_eq!(page_offset(u64::MAX / 2, 2), None);
    }

    #[tokio::test]
    async fn test_huge_page_is_out_of_range() {
        let db = connect("sqlite::memory:").await.unwrap();
        ensure_schema(&db).await.unwrap();

        match list(&db, None, Some(u64::MAX), Some(20)).await {
            Err(ListError::PageOutOfRange { page }) => assert_eq!(page, u64::MAX),
            other => panic!("expected out-of-range page, got {:?}", other.map(|p| p.total)),
        }
    }
}
