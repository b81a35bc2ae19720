use leptos::prelude::*;

/// Page title with a reactive subtitle and an actions slot
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: Signal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                <div class="page-header__subtitle">{move || subtitle.get()}</div>
            </div>
            <div class="page-header__actions">{children()}</div>
        </div>
    }
}
