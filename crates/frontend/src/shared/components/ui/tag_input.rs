use super::field_label::FieldLabel;
use leptos::prelude::*;

/// Split comma-separated entry into trimmed, non-empty, de-duplicated values
pub fn split_tags(text: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Multi-value field. With options it renders checkboxes, otherwise a
/// comma-separated text entry.
#[component]
pub fn TagInput(
    #[prop(into)] label: String,
    #[prop(into)] values: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    #[prop(optional)] options: Vec<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let text = RwSignal::new(values.get_untracked().join(", "));

    // Follow external changes (report type switch, reset) without fighting the cursor
    Effect::new(move |_| {
        let current = values.get();
        if split_tags(&text.get_untracked()) != current {
            text.set(current.join(", "));
        }
    });

    view! {
        <div class="form__group">
            <FieldLabel text=label required=required />
            {
                if options.is_empty() {
                    view! {
                        <input
                            type="text"
                            class="form__input"
                            placeholder=move || placeholder.get().unwrap_or_default()
                            prop:value=move || text.get()
                            on:input=move |ev| {
                                let entered = event_target_value(&ev);
                                let tags = split_tags(&entered);
                                text.set(entered);
                                on_change.run(tags);
                            }
                        />
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="form__tag-options">
                            {options
                                .into_iter()
                                .map(|opt| {
                                    let for_check = opt.clone();
                                    let for_toggle = opt.clone();
                                    view! {
                                        <label class="form__checkbox-wrapper">
                                            <input
                                                type="checkbox"
                                                class="form__checkbox"
                                                prop:checked=move || values.get().contains(&for_check)
                                                on:change=move |ev| {
                                                    let mut next = values.get_untracked();
                                                    next.retain(|v| v != &for_toggle);
                                                    if event_target_checked(&ev) {
                                                        next.push(for_toggle.clone());
                                                    }
                                                    on_change.run(next);
                                                }
                                            />
                                            <span class="form__checkbox-label">{opt}</span>
                                        </label>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags("BLACK, NAVY ,,BLACK"), vec!["BLACK", "NAVY"]);
        assert!(split_tags("  ").is_empty());
    }
}
