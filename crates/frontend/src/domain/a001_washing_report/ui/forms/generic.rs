use crate::domain::a001_washing_report::ui::field_input::FieldInput;
use crate::app::use_registry;
use contracts::domain::a001_washing_report::FormState;
use contracts::enums::report_type::ReportType;
use contracts::shared::form_schema::FieldDefinition;
use leptos::prelude::*;

/// Field-driven form: one input per declared field, in config order
#[component]
pub fn GenericForm(form: RwSignal<FormState>, report_type: ReportType) -> impl IntoView {
    let registry = use_registry();
    let config = registry
        .get(report_type)
        .unwrap_or_else(|| registry.default_config());
    let defs: Vec<FieldDefinition> = config.ordered_fields().copied().collect();

    view! {
        <section class="form-section generic-form">
            <h3 class="form-section__title">{config.label}</h3>
            <div class="form-grid form-grid--2">
                {defs
                    .into_iter()
                    .map(|def| view! { <FieldInput form=form def=def /> })
                    .collect_view()}
            </div>
        </section>
    }
}
