use crate::domain::a001_washing_report::ui::page::WashingReportPage;
use contracts::shared::report_types::ReportTypeRegistry;
use leptos::prelude::*;
use std::sync::Arc;

/// Registry shared with every form component through context
pub type RegistryContext = Arc<ReportTypeRegistry>;

pub fn use_registry() -> RegistryContext {
    use_context::<RegistryContext>().expect("Report type registry context not found")
}

#[component]
pub fn App() -> impl IntoView {
    match ReportTypeRegistry::standard() {
        Ok(registry) => {
            provide_context::<RegistryContext>(Arc::new(registry));
            view! { <WashingReportPage /> }.into_any()
        }
        Err(e) => {
            log::error!("Report type registry is invalid: {}", e);
            view! {
                <div class="error">{format!("Report forms are unavailable: {e}")}</div>
            }
            .into_any()
        }
    }
}
