use super::{FieldGroup, MatrixRow, WashMatrix};
use contracts::domain::a001_washing_report::FormState;
use contracts::enums::report_type::ReportType;
use leptos::prelude::*;

const STYLE: &[&str] = &[
    "styleNo",
    "custStyle",
    "fabricColor",
    "embColor",
    "embName",
    "styleDescription",
    "reportDate",
    "recDate",
    "embPlacement",
    "time",
    "range",
    "season",
    "fabrication",
];

const CONDITIONS: &[&str] = &["testMethod", "detergents", "washingMachine"];

const CYCLES: &[&str] = &["1x", "5x", "10x", "15x"];

const RESULTS: &[MatrixRow] = &[
    MatrixRow {
        label: "Color Change",
        fields: &["colorChange1", "colorChange5", "colorChange10", "colorChange15"],
    },
    MatrixRow {
        label: "Color Staining",
        fields: &[
            "colorStaining1",
            "colorStaining5",
            "colorStaining10",
            "colorStaining15",
        ],
    },
    MatrixRow {
        label: "Appearance",
        fields: &["appearance1", "appearance5", "appearance10", "appearance15"],
    },
    MatrixRow {
        label: "Cracking",
        fields: &["cracking1", "cracking5", "cracking10", "cracking15"],
    },
    MatrixRow {
        label: "Fading",
        fields: &["fading1", "fading5", "fading10", "fading15"],
    },
];

const COMMENTS: &[&str] = &["testComments", "beforeWashed", "afterWashed", "remark"];
const SIGN_OFF: &[&str] = &["finalResult", "checkedBy", "checkedDate"];
const ATTACHMENTS: &[&str] = &["images", "notes"];

/// Embroidery / printing washing test
#[component]
pub fn EmbTestingForm(form: RwSignal<FormState>) -> impl IntoView {
    let report_type = ReportType::EmbPrintingTesting;
    view! {
        <div class="report-form emb-testing-form">
            <FieldGroup form=form report_type=report_type title="Style Information" names=STYLE columns=3 />
            <FieldGroup form=form report_type=report_type title="Test Conditions" names=CONDITIONS columns=3 />
            <WashMatrix form=form title="Washing Results" cycles=CYCLES rows=RESULTS />
            <FieldGroup form=form report_type=report_type title="Comments" names=COMMENTS />
            <FieldGroup form=form report_type=report_type title="Final Result" names=SIGN_OFF columns=3 />
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
        let config = registry.get(ReportType::EmbPrintingTesting).unwrap();
        let mut laid_out: Vec<&str> = [STYLE, CONDITIONS, COMMENTS, SIGN_OFF, ATTACHMENTS]
            .concat();
        laid_out.extend(RESULTS.iter().flat_map(|row| row.fields.iter().copied()));
        laid_out.sort_unstable();

        let mut declared = config.fields.clone();
        declared.sort_unstable();
        assert_eq!(laid_out, declared);
    }
}
