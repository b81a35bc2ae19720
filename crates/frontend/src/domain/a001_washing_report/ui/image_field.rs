use crate::shared::components::ui::{Button, FieldLabel};
use contracts::domain::a001_washing_report::{
    validate_images, FormState, ImageAttachment, ALLOWED_IMAGE_TYPES,
};
use contracts::shared::form_schema::FieldDefinition;
use contracts::shared::report_types::fields::MAX_IMAGES;
use leptos::prelude::*;

/// Attachments already in the form plus the newly picked files.
/// Only file names are kept in the form; the picker knows the real MIME types.
pub fn merge_attachments(
    current: &[String],
    picked: Vec<ImageAttachment>,
    max: usize,
) -> Result<Vec<String>, String> {
    let mut all: Vec<ImageAttachment> = current
        .iter()
        .map(|name| ImageAttachment::from_file_name(name))
        .collect();
    all.extend(picked);
    validate_images(&all, max).map_err(|e| e.to_string())?;
    Ok(all.into_iter().map(|image| image.name).collect())
}

fn picked_files(input: &web_sys::HtmlInputElement) -> Vec<ImageAttachment> {
    let Some(files) = input.files() else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| ImageAttachment::new(file.name(), file.type_()))
        .collect()
}

/// Image picker for an `image` field, capped at the field's `max_count`
#[component]
pub fn ImageField(form: RwSignal<FormState>, def: FieldDefinition) -> impl IntoView {
    let field = def.name;
    let max = def.max_count.unwrap_or(MAX_IMAGES);
    let error = RwSignal::new(None::<String>);
    let names = Signal::derive(move || {
        form.with(|state| state.list(field).map(<[String]>::to_vec).unwrap_or_default())
    });

    let on_pick = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let picked = picked_files(&input);
        input.set_value("");
        if picked.is_empty() {
            return;
        }
        match merge_attachments(&names.get_untracked(), picked, max) {
            Ok(all) => {
                error.set(None);
                form.update(|state| state.set_list(field, all));
            }
            Err(e) => {
                log::warn!("Images rejected for '{}': {}", field, e);
                error.set(Some(e));
            }
        }
    };

    let remove = move |index: usize| {
        form.update(|state| {
            let mut all = state.list(field).map(<[String]>::to_vec).unwrap_or_default();
            if index < all.len() {
                all.remove(index);
            }
            state.set_list(field, all);
        });
        error.set(None);
    };

    view! {
        <div class="form__group image-field">
            <FieldLabel text=def.label required=def.required />
            <div class="image-field__counter">
                {move || format!("{} of {} images", names.get().len(), max)}
            </div>
            <input
                type="file"
                multiple=true
                accept=ALLOWED_IMAGE_TYPES.join(",")
                disabled=move || { names.get().len() >= max }
                on:change=on_pick
            />
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <ul class="image-field__list">
                {move || {
                    names
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, name)| {
                            view! {
                                <li>
                                    <span>{name}</span>
                                    <Button
                                        variant="danger"
                                        title="Remove image"
                                        on_click=Callback::new(move |_| remove(index))
                                    >
                                        "✕"
                                    </Button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_attachments() {
        let current = vec!["a.jpg".to_string()];
        let merged = merge_attachments(
            &current,
            vec![ImageAttachment::new("b", "image/png")],
            MAX_IMAGES,
        )
        .unwrap();
        assert_eq!(merged, vec!["a.jpg", "b"]);

        let too_many: Vec<_> = (0..5)
            .map(|i| ImageAttachment::new(format!("{i}.png"), "image/png"))
            .collect();
        assert!(merge_attachments(&current, too_many, MAX_IMAGES).is_err());

        let pdf = vec![ImageAttachment::new("report.pdf", "application/pdf")];
        assert!(merge_attachments(&current, pdf, MAX_IMAGES).is_err());
    }
}
