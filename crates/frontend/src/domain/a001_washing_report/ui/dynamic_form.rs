use super::forms::{EmbTestingForm, GarmentWashForm, GenericForm, HtTestingForm, PullingTestForm};
use crate::app::use_registry;
use contracts::domain::a001_washing_report::FormState;
use contracts::shared::report_types::{
    resolve_for_report_type, FormComponent, FormFallback, FormRenderer,
};
use leptos::prelude::*;

fn describe_fallback(fallback: &FormFallback) -> String {
    match fallback {
        FormFallback::MissingComponent => "no form component configured".to_string(),
        FormFallback::UnknownComponent(name) => format!("unknown form component '{}'", name),
    }
}

/// Mounts the form renderer resolved for the form's report type.
/// The form is only re-mounted when the report type changes.
#[component]
pub fn DynamicFormSection(form: RwSignal<FormState>) -> impl IntoView {
    let registry = use_registry();
    let report_type = Memo::new(move |_| form.with(|state| state.report_type()));

    move || {
        let report_type = report_type.get();
        let resolution = resolve_for_report_type(&registry, Some(report_type));
        if let Some(fallback) = &resolution.fallback {
            log::warn!(
                "Using the generic form for '{}': {}",
                report_type,
                describe_fallback(fallback)
            );
        }

        match resolution.renderer {
            FormRenderer::Generic => {
                view! { <GenericForm form=form report_type=report_type /> }.into_any()
            }
            FormRenderer::Specialized(FormComponent::HtTestingForm) => {
                view! { <HtTestingForm form=form /> }.into_any()
            }
            FormRenderer::Specialized(FormComponent::EmbTestingForm) => {
                view! { <EmbTestingForm form=form /> }.into_any()
            }
            FormRenderer::Specialized(FormComponent::PullingTestForm) => {
                view! { <PullingTestForm form=form /> }.into_any()
            }
            FormRenderer::Specialized(FormComponent::GarmentWashForm) => {
                view! { <GarmentWashForm form=form /> }.into_any()
            }
        }
    }
}
