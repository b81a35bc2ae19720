//! Report form renderers: the generic field-driven form and the specialized
//! layouts, plus the building blocks they share.

mod emb_testing;
mod garment_wash;
mod generic;
mod ht_testing;
mod pulling_test;

pub use emb_testing::EmbTestingForm;
pub use garment_wash::GarmentWashForm;
pub use generic::GenericForm;
pub use ht_testing::HtTestingForm;
pub use pulling_test::PullingTestForm;

use super::field_input::FieldInput;
use crate::app::use_registry;
use contracts::domain::a001_washing_report::FormState;
use contracts::enums::report_type::ReportType;
use contracts::shared::form_schema::FieldDefinition;
use contracts::shared::report_types::ReportTypeRegistry;
use leptos::prelude::*;

/// Definitions of `names` in the config of `report_type`, in the given order.
/// Names the config does not declare are skipped.
pub fn definitions_for(
    registry: &ReportTypeRegistry,
    report_type: ReportType,
    names: &[&'static str],
) -> Vec<FieldDefinition> {
    let Some(config) = registry.get(report_type) else {
        log::warn!("No config for report type '{}'", report_type);
        return Vec::new();
    };
    names
        .iter()
        .filter_map(|name| {
            let def = config
                .fields
                .contains(name)
                .then(|| config.field(name).copied())
                .flatten();
            if def.is_none() {
                log::warn!("'{}' is not a field of '{}'", name, report_type);
            }
            def
        })
        .collect()
}

/// Titled block of fields laid out on a grid
#[component]
pub fn FieldGroup(
    form: RwSignal<FormState>,
    report_type: ReportType,
    #[prop(into)] title: String,
    names: &'static [&'static str],
    /// Grid columns, 2 when not set
    #[prop(optional)]
    columns: Option<u8>,
) -> impl IntoView {
    let registry = use_registry();
    let defs = definitions_for(&registry, report_type, names);

    view! {
        <section class="form-section">
            <h3 class="form-section__title">{title}</h3>
            <div class=format!("form-grid form-grid--{}", columns.unwrap_or(2))>
                {defs
                    .into_iter()
                    .map(|def| view! { <FieldInput form=form def=def /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// One property measured after each wash cycle
pub struct MatrixRow {
    pub label: &'static str,
    /// One field per cycle, same order as the matrix columns
    pub fields: &'static [&'static str],
}

/// Wash results laid out as property × cycle
#[component]
pub fn WashMatrix(
    form: RwSignal<FormState>,
    title: &'static str,
    cycles: &'static [&'static str],
    rows: &'static [MatrixRow],
) -> impl IntoView {
    view! {
        <section class="form-section">
            <h3 class="form-section__title">{title}</h3>
            <table class="row-table wash-matrix">
                <thead>
                    <tr>
                        <th>"Property"</th>
                        {cycles.iter().map(|cycle| view! { <th>{*cycle}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <th class="wash-matrix__label">{row.label}</th>
                                    {row
                                        .fields
                                        .iter()
                                        .map(|&field| {
                                            view! {
                                                <td>
                                                    <input
                                                        type="text"
                                                        class="table__input"
                                                        prop:value=move || {
                                                            form.with(|s| s.text(field).unwrap_or_default().to_string())
                                                        }
                                                        on:input=move |ev| {
                                                            let value = event_target_value(&ev);
                                                            form.update(|s| s.set_text(field, value));
                                                        }
                                                    />
                                                </td>
                                            }
                                        })
                                        .collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_keep_order_and_skip_unknown() {
        let registry = ReportTypeRegistry::standard().unwrap();
        let defs = definitions_for(
            &registry,
            ReportType::PullingTest,
            &["buyer", "ymStyle", "poNumber"],
        );
        let names: Vec<_> = defs.iter().map(|d| d.name).collect();
        // ymStyle is defined in the shared layer but not listed for pulling tests
        assert_eq!(names, vec!["buyer", "poNumber"]);
    }
}
