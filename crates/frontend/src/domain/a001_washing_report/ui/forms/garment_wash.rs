use super::FieldGroup;
use contracts::domain::a001_washing_report::FormState;
use contracts::enums::report_type::ReportType;
use leptos::prelude::*;

const STYLE: &[&str] = &[
    "style",
    "washType",
    "moNo",
    "custStyle",
    "color",
    "season",
    "styleDescription",
];
const MATERIALS: &[&str] = &["mainFabric", "liningInserts", "detergent", "washingMethod"];
const FASTNESS: &[&str] = &["colorFastnessRows", "colorStainingRows"];
const ASSESSMENT: &[&str] = &["visualAssessmentRows", "shrinkageRows"];
const COMMENTS: &[&str] = &["beforeWashComments", "afterWashComments"];
const SIGN_OFF: &[&str] = &["finalResult", "date", "checkedBy", "approvedBy"];
const ATTACHMENTS: &[&str] = &["images", "notes"];

/// Garment wash report. New color rows pick up the colors chosen in the header.
#[component]
pub fn GarmentWashForm(form: RwSignal<FormState>) -> impl IntoView {
    let report_type = ReportType::GarmentWash;
    view! {
        <div class="report-form garment-wash-form">
            <FieldGroup form=form report_type=report_type title="Style" names=STYLE columns=3 />
            <FieldGroup form=form report_type=report_type title="Materials & Method" names=MATERIALS />
            <FieldGroup form=form report_type=report_type title="Color Fastness" names=FASTNESS columns=1 />
            <FieldGroup form=form report_type=report_type title="Visual Assessment & Shrinkage" names=ASSESSMENT columns=1 />
            <FieldGroup form=form report_type=report_type title="Comments" names=COMMENTS />
            <FieldGroup form=form report_type=report_type title="Final Results" names=SIGN_OFF columns=2 />
            <FieldGroup form=form report_type=report_type title="Attachments" names=ATTACHMENTS columns=1 />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::report_types::ReportTypeRegistry;

    #[test]
    fn test_layout_covers_every_declared_field() {
        let registry = ReportTypeRegistry::standard().unwrap();
        let config = registry.get(ReportType::GarmentWash).unwrap();
        let mut laid_out: Vec<&str> =
            [STYLE, MATERIALS, FASTNESS, ASSESSMENT, COMMENTS, SIGN_OFF, ATTACHMENTS].concat();
        laid_out.sort_unstable();

        let mut declared = config.fields.clone();
        declared.sort_unstable();
        assert_eq!(laid_out, declared);
    }
}
