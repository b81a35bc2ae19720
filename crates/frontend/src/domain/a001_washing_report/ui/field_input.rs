use super::image_field::ImageField;
use super::row_tables::RowTableField;
use crate::shared::components::ui::{Input, Select, TagInput, Textarea};
use contracts::domain::a001_washing_report::{FieldValue, FormState};
use contracts::shared::form_schema::{FieldDefinition, FieldType};
use leptos::prelude::*;

fn text_signal(form: RwSignal<FormState>, field: &'static str) -> Signal<String> {
    Signal::derive(move || form.with(|state| state.text(field).unwrap_or_default().to_string()))
}

fn text_setter(form: RwSignal<FormState>, field: &'static str) -> Callback<String> {
    Callback::new(move |value: String| form.update(|state| state.set_text(field, value)))
}

/// True while the field this one depends on is still blank
fn waiting_on_dependency(form: RwSignal<FormState>, def: FieldDefinition) -> Signal<bool> {
    Signal::derive(move || match def.depends_on {
        Some(parent) => form.with(|state| state.get(parent).map_or(true, FieldValue::is_blank)),
        None => false,
    })
}

fn placeholder_for(def: &FieldDefinition) -> String {
    match def.placeholder {
        Some(text) => text.to_string(),
        None => format!("Enter {}", def.label),
    }
}

/// Input widget for one field, chosen by its type
#[component]
pub fn FieldInput(form: RwSignal<FormState>, def: FieldDefinition) -> impl IntoView {
    let field = def.name;
    let id = format!("field-{}", field);

    match def.field_type {
        FieldType::Text | FieldType::Number | FieldType::Date => {
            let input_type = match def.field_type {
                FieldType::Number => "number",
                FieldType::Date => "date",
                _ => "text",
            };
            view! {
                <Input
                    id=id
                    label=def.label
                    input_type=input_type
                    value=text_signal(form, field)
                    on_input=text_setter(form, field)
                    placeholder=placeholder_for(&def)
                    readonly=def.readonly
                    disabled=waiting_on_dependency(form, def)
                    required=def.required
                />
            }
            .into_any()
        }
        FieldType::Select if def.options.is_some() => view! {
            <Select
                id=id
                label=def.label
                value=text_signal(form, field)
                on_change=text_setter(form, field)
                options=def.option_pairs()
                placeholder=format!("Select {}", def.label)
                disabled=waiting_on_dependency(form, def)
                required=def.required
            />
        }
        .into_any(),
        // Option lists come from lookups that are not wired up; type the value instead
        FieldType::Select => view! {
            <Input
                id=id
                label=def.label
                value=text_signal(form, field)
                on_input=text_setter(form, field)
                placeholder=placeholder_for(&def)
                disabled=waiting_on_dependency(form, def)
                required=def.required
            />
        }
        .into_any(),
        FieldType::MultiSelect => view! {
            <TagInput
                label=def.label
                values=Signal::derive(move || {
                    form.with(|state| state.list(field).map(<[String]>::to_vec).unwrap_or_default())
                })
                on_change=Callback::new(move |values: Vec<String>| {
                    form.update(|state| state.set_list(field, values))
                })
                options={ def.options.unwrap_or(&[]).iter().map(|o| o.to_string()).collect::<Vec<_>>() }
                placeholder="Comma-separated values"
                required=def.required
            />
        }
        .into_any(),
        FieldType::Textarea => view! {
            <Textarea
                id=id
                label=def.label
                value=text_signal(form, field)
                on_input=text_setter(form, field)
                placeholder=placeholder_for(&def)
                rows=def.rows.unwrap_or(3)
                required=def.required
            />
        }
        .into_any(),
        FieldType::Image => view! { <ImageField form=form def=def /> }.into_any(),
        FieldType::Custom => view! { <RowTableField form=form def=def /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::report_types::fields::COMMON_FIELDS;

    #[test]
    fn test_placeholder_falls_back_to_label() {
        let notes = COMMON_FIELDS.iter().find(|d| d.name == "notes").unwrap();
        assert!(placeholder_for(notes).starts_with("Add any additional notes"));

        let factory = COMMON_FIELDS.iter().find(|d| d.name == "factory").unwrap();
        assert_eq!(placeholder_for(factory), "Enter Factory");
    }
}
