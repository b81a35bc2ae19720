use super::view_model::WashingReportViewModel;
use crate::app::use_registry;
use crate::domain::a001_washing_report::ui::dynamic_form::DynamicFormSection;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Select;
use contracts::domain::a001_washing_report::StoredReport;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Card};

#[component]
fn RecentReports(reports: RwSignal<Vec<StoredReport>>) -> impl IntoView {
    view! {
        <Card attr:class="recent-reports">
            <h3 class="form-section__title">"Recent reports"</h3>
            {move || {
                let items = reports.get();
                if items.is_empty() {
                    view! { <div class="recent-reports__empty">"No reports yet"</div> }.into_any()
                } else {
                    view! {
                        <table class="row-table">
                            <thead>
                                <tr>
                                    <th>"Created"</th>
                                    <th>"Type"</th>
                                    <th>"Submitted by"</th>
                                    <th>"Id"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {items
                                    .into_iter()
                                    .map(|report| {
                                        view! {
                                            <tr>
                                                <td>{report.created_at.format("%Y-%m-%d %H:%M").to_string()}</td>
                                                <td>{report.report_type.display_name()}</td>
                                                <td>{report.user_name}</td>
                                                <td class="recent-reports__id">{report.id}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}
        </Card>
    }
}

#[component]
pub fn WashingReportPage() -> impl IntoView {
    let vm = WashingReportViewModel::new(use_registry());
    vm.load_recent();

    let form = vm.form;
    let saving = vm.saving;
    let error = vm.error;
    let issues = vm.issues;
    let saved_id = vm.saved_id;
    let recent = vm.recent;
    let select_vm = vm.clone();
    let options = vm.report_type_options();
    let selected = Signal::derive(move || form.with(|state| state.report_type().code().to_string()));
    let description = Signal::derive({
        let vm = vm.clone();
        move || vm.description().to_string()
    });

    view! {
        <div class="details-container washing-report">
            <PageHeader title="Washing Test Report" subtitle=description>
                <Select
                    id="report-type"
                    label="Report Type"
                    value=selected
                    options=options
                    on_change=Callback::new({
                        let vm = select_vm.clone();
                        move |key: String| vm.select_report_type(&key)
                    })
                />
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || {
                let issues = issues.get();
                (!issues.is_empty()).then(|| view! {
                    <ul class="form-issues">
                        {issues
                            .into_iter()
                            .map(|issue| view! { <li>{issue.message}</li> })
                            .collect_view()}
                    </ul>
                })
            }}
            {move || saved_id.get().map(|id| view! {
                <div class="success">{format!("Report submitted successfully ({})", id)}</div>
            })}

            <div class="details-form">
                <DynamicFormSection form=form />
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get())
                    on_click={
                        let vm = vm.clone();
                        move |_| vm.submit_command()
                    }
                >
                    {move || if saving.get() { "Submitting..." } else { "Submit Report" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click={
                        let vm = vm.clone();
                        move |_| vm.reset()
                    }
                >
                    "Reset"
                </Button>
            </div>

            <RecentReports reports=recent />
        </div>
    }
}
