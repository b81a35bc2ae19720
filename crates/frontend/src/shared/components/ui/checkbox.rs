use leptos::prelude::*;

/// Checkbox with an optional trailing label
#[component]
pub fn Checkbox(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    #[prop(optional, into)] title: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <label class="form__checkbox-wrapper" title=move || title.get().unwrap_or_default()>
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            {move || label.get().map(|text| view! {
                <span class="form__checkbox-label">{text}</span>
            })}
        </label>
    }
}
