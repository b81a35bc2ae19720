use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::state::AppState;

/// All application routes
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // REPORT TYPE REGISTRY
        // ========================================
        .route(
            "/api/report-types",
            get(handlers::report_types::list_options),
        )
        .route(
            "/api/report-types/:key",
            get(handlers::report_types::get_config),
        )
        .route(
            "/api/report-types/:key/fields/:field",
            get(handlers::report_types::get_field),
        )
        .route(
            "/api/report-types/:key/initial-form-data",
            get(handlers::report_types::get_initial_form_data),
        )
        // ========================================
        // A001 WASHING REPORTS
        // ========================================
        .route(
            "/api/report-washing/submit",
            post(handlers::a001_washing_report::submit),
        )
        .route(
            "/api/report-washing",
            get(handlers::a001_washing_report::list),
        )
        .route(
            "/api/report-washing/:id",
            get(handlers::a001_washing_report::get_by_id),
        )
        .with_state(state)
}
