use std::sync::Arc;

use contracts::shared::report_types::{ReportTypeRegistry, UnknownReportTypePolicy};

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ReportTypeRegistry>,
}

impl AppState {
    pub fn new(policy: UnknownReportTypePolicy) -> anyhow::Result<Self> {
        let registry = ReportTypeRegistry::standard()?.with_policy(policy);
        tracing::info!(
            "Report type registry ready: {} types, default '{}', unknown types: {:?}",
            registry.configs().count(),
            registry.default_type(),
            registry.policy()
        );
        Ok(Self {
            registry: Arc::new(registry),
        })
    }
}
