use super::{FieldGroup, MatrixRow, WashMatrix};
use contracts::domain::a001_washing_report::FormState;
use contracts::enums::report_type::ReportType;
use leptos::prelude::*;

const STYLE: &[&str] = &[
    "styleNo",
    "custStyle",
    "fabricColor",
    "htColor",
    "htName",
    "styleDescription",
    "reportDate",
    "recDate",
    "printPlacement",
    "time",
    "range",
    "season",
    "fabrication",
];

const CONDITIONS: &[&str] = &[
    "testMethod",
    "detergents",
    "washingMachine",
    "heatTemperature",
    "washingTime",
    "washingPressure",
    "washingTemperature",
];

const CYCLES: &[&str] = &["3x", "5x", "10x", "15x"];

const RESULTS: &[MatrixRow] = &[
    MatrixRow {
        label: "Colour change of fabric",
        fields: &[
            "colorChangeFabric3",
            "colorChangeFabric5",
            "colorChangeFabric10",
            "colorChangeFabric15",
        ],
    },
    MatrixRow {
        label: "Colour staining of HT",
        fields: &[
            "colorStainingHT3",
            "colorStainingHT5",
            "colorStainingHT10",
            "colorStainingHT15",
        ],
    },
    MatrixRow {
        label: "Appearance after washing",
        fields: &[
            "appearanceAfterWashing3",
            "appearanceAfterWashing5",
            "appearanceAfterWashing10",
            "appearanceAfterWashing15",
        ],
    },
    MatrixRow {
        label: "Peel off",
        fields: &["peelOff3", "peelOff5", "peelOff10", "peelOff15"],
    },
    MatrixRow {
        label: "Fading",
        fields: &["fading3", "fading5", "fading10", "fading15"],
    },
];

const COMMENTS: &[&str] = &["testComments", "beforeWashed", "afterWashed", "washingResult"];
const SIGN_OFF: &[&str] = &["finalResults", "checkedBy", "finalDate"];
const ATTACHMENTS: &[&str] = &["images", "notes"];

/// Heat-transfer washing test
#[component]
pub fn HtTestingForm(form: RwSignal<FormState>) -> impl IntoView {
    let report_type = ReportType::HtTesting;
    view! {
        <div class="report-form ht-testing-form">
            <FieldGroup form=form report_type=report_type title="Style Information" names=STYLE columns=3 />
            <FieldGroup form=form report_type=report_type title="Test Conditions" names=CONDITIONS />
            <WashMatrix form=form title="Washing Results" cycles=CYCLES rows=RESULTS />
            <FieldGroup form=form report_type=report_type title="Comments" names=COMMENTS />
            <FieldGroup form=form report_type=report_type title="Final Results" names=SIGN_OFF columns=3 />
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
        let config = registry.get(ReportType::HtTesting).unwrap();
        let mut laid_out: Vec<&str> = [STYLE, CONDITIONS, COMMENTS, SIGN_OFF, ATTACHMENTS]
            .concat();
        laid_out.extend(RESULTS.iter().flat_map(|row| row.fields.iter().copied()));
        laid_out.sort_unstable();

        let mut declared = config.fields.clone();
        declared.sort_unstable();
        assert_eq!(laid_out, declared);
    }
}
