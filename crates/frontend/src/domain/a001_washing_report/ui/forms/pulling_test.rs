use super::FieldGroup;
use contracts::domain::a001_washing_report::FormState;
use contracts::enums::report_type::ReportType;
use leptos::prelude::*;

const HEADER: &[&str] = &["poNumber", "color", "buyer", "testDate", "testTime"];
const RESULTS: &[&str] = &["testRows"];
const SIGN_OFF: &[&str] = &["preparedBy", "checkedBy"];
const ATTACHMENTS: &[&str] = &["images", "notes"];

#[component]
pub fn PullingTestForm(form: RwSignal<FormState>) -> impl IntoView {
    let report_type = ReportType::PullingTest;
    view! {
        <div class="report-form pulling-test-form">
            <FieldGroup form=form report_type=report_type title="Test Details" names=HEADER columns=3 />
            <FieldGroup form=form report_type=report_type title="Pulling Results" names=RESULTS columns=1 />
            <FieldGroup form=form report_type=report_type title="Sign-off" names=SIGN_OFF />
            <FieldGroup form=form report_type=report_type title="Attachments" names=ATTACHMENTS columns=1 />
        </div>
    }
}
