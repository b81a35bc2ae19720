use crate::shared::api_utils::{api_url, get_json};
use contracts::domain::a001_washing_report::{
    ReportListResponse, SubmissionPayload, SubmitReportResponse,
};
use contracts::enums::report_type::ReportType;
use gloo_net::http::Request;

/// POST the report. Rejections (400/422) come back as `Ok` with `success == false`.
pub async fn submit_report(payload: &SubmissionPayload) -> Result<SubmitReportResponse, String> {
    let response = Request::post(&api_url("/api/report-washing/submit"))
        .json(payload)
        .map_err(|e| format!("Failed to serialize report: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let status = response.status();
    response
        .json::<SubmitReportResponse>()
        .await
        .map_err(|_| format!("HTTP {}", status))
}

/// Latest stored reports of one type
pub async fn fetch_recent(report_type: ReportType, limit: u64) -> Result<ReportListResponse, String> {
    get_json(&format!(
        "/api/report-washing?report_type={}&limit={}",
        report_type.code(),
        limit
    ))
    .await
}
