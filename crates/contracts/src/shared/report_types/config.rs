use serde::{Deserialize, Serialize};

use crate::enums::report_type::ReportType;
use crate::shared::form_schema::{merge_layers, FieldDefinition, FieldMap};

use super::fields::{
    COMMON_FIELDS, EMB_TESTING_FIELDS, GARMENT_WASH_FIELDS, HT_TESTING_FIELDS,
    PULLING_TEST_FIELDS,
};

/// Specialized form renderers. Anything not listed here is rendered by the
/// generic field-driven form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormComponent {
    #[serde(rename = "HTTestingForm")]
    HtTestingForm,
    #[serde(rename = "EMBTestingForm")]
    EmbTestingForm,
    #[serde(rename = "PullingTestForm")]
    PullingTestForm,
    #[serde(rename = "GarmentWashForm")]
    GarmentWashForm,
}

impl FormComponent {
    /// Wire name of the component
    pub fn name(&self) -> &'static str {
        match self {
            FormComponent::HtTestingForm => "HTTestingForm",
            FormComponent::EmbTestingForm => "EMBTestingForm",
            FormComponent::PullingTestForm => "PullingTestForm",
            FormComponent::GarmentWashForm => "GarmentWashForm",
        }
    }

    pub fn all() -> Vec<FormComponent> {
        vec![
            FormComponent::HtTestingForm,
            FormComponent::EmbTestingForm,
            FormComponent::PullingTestForm,
            FormComponent::GarmentWashForm,
        ]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.name() == name)
    }
}

/// Configuration of one report type
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTypeConfig {
    pub report_type: ReportType,
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Display order and membership of the form's fields
    pub fields: Vec<&'static str>,
    pub field_definitions: FieldMap,

    pub use_default_form: bool,
    pub form_component: Option<FormComponent>,
    // Export collaborators, referenced by name only
    pub use_default_pdf: bool,
    pub pdf_component: Option<&'static str>,
    pub use_default_excel: bool,
    pub excel_generator: Option<&'static str>,
}

impl ReportTypeConfig {
    /// Config rendered, printed and exported by the generic components
    pub fn generic(
        report_type: ReportType,
        description: &'static str,
        fields: &[&'static str],
        layers: &[&[FieldDefinition]],
    ) -> Self {
        Self {
            report_type,
            id: report_type.code(),
            label: report_type.display_name(),
            description,
            fields: fields.to_vec(),
            field_definitions: merge_layers(layers),
            use_default_form: true,
            form_component: None,
            use_default_pdf: true,
            pdf_component: None,
            use_default_excel: true,
            excel_generator: None,
        }
    }

    /// Config with its own form, PDF and Excel collaborators
    pub fn specialized(
        base: Self,
        form: FormComponent,
        pdf_component: &'static str,
        excel_generator: &'static str,
    ) -> Self {
        Self {
            use_default_form: false,
            form_component: Some(form),
            use_default_pdf: false,
            pdf_component: Some(pdf_component),
            use_default_excel: false,
            excel_generator: Some(excel_generator),
            ..base
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.field_definitions.get(name)
    }

    /// Declared fields in display order, with their definitions.
    /// A registry-built config always has a definition for every field.
    pub fn ordered_fields(&self) -> impl Iterator<Item = &FieldDefinition> + '_ {
        self.fields
            .iter()
            .filter_map(move |name| self.field_definitions.get(name))
    }

    /// Declared field names without a definition
    pub fn missing_definitions(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .copied()
            .filter(|name| !self.field_definitions.contains_key(name))
            .collect()
    }
}

/// The five report types of the washing/testing workflow
pub fn standard_configs() -> Vec<ReportTypeConfig> {
    vec![
        ReportTypeConfig::generic(
            ReportType::HomeWash,
            "Standard washing test for garments",
            &[
                "ymStyle",
                "color",
                "buyerStyle",
                "po",
                "exFtyDate",
                "factory",
                "range",
                "sendToHomeWashingDate",
                "images",
                "notes",
            ],
            &[COMMON_FIELDS],
        ),
        ReportTypeConfig::specialized(
            ReportTypeConfig::generic(
                ReportType::GarmentWash,
                "Detailed Garment Wash Test Report",
                &[
                    "style",
                    "washType",
                    "moNo",
                    "custStyle",
                    "color",
                    "season",
                    "styleDescription",
                    "mainFabric",
                    "liningInserts",
                    "detergent",
                    "washingMethod",
                    "colorFastnessRows",
                    "colorStainingRows",
                    "visualAssessmentRows",
                    "shrinkageRows",
                    "beforeWashComments",
                    "afterWashComments",
                    "finalResult",
                    "date",
                    "checkedBy",
                    "approvedBy",
                    "images",
                    "notes",
                ],
                &[COMMON_FIELDS, GARMENT_WASH_FIELDS],
            ),
            FormComponent::GarmentWashForm,
            "GarmentWashPDF",
            "generateGarmentWashExcel",
        ),
        ReportTypeConfig::specialized(
            ReportTypeConfig::generic(
                ReportType::HtTesting,
                "Heat-Transfer Washing Test Reports",
                &[
                    "styleNo",
                    "custStyle",
                    "fabricColor",
                    "htColor",
                    "htName",
                    "styleDescription",
                    "reportDate",
                    "recDate",
                    "printPlacement",
                    "fabrication",
                    "time",
                    "range",
                    "season",
                    "testMethod",
                    "detergents",
                    "washingMachine",
                    "heatTemperature",
                    "washingTime",
                    "washingPressure",
                    "washingTemperature",
                    "colorChangeFabric3",
                    "colorChangeFabric5",
                    "colorChangeFabric10",
                    "colorChangeFabric15",
                    "colorStainingHT3",
                    "colorStainingHT5",
                    "colorStainingHT10",
                    "colorStainingHT15",
                    "appearanceAfterWashing3",
                    "appearanceAfterWashing5",
                    "appearanceAfterWashing10",
                    "appearanceAfterWashing15",
                    "peelOff3",
                    "peelOff5",
                    "peelOff10",
                    "peelOff15",
                    "fading3",
                    "fading5",
                    "fading10",
                    "fading15",
                    "testComments",
                    "beforeWashed",
                    "afterWashed",
                    "washingResult",
                    "finalResults",
                    "checkedBy",
                    "finalDate",
                    "images",
                    "notes",
                ],
                &[COMMON_FIELDS, HT_TESTING_FIELDS],
            ),
            FormComponent::HtTestingForm,
            "HTTestingPDF",
            "generateHTTestingExcel",
        ),
        ReportTypeConfig::specialized(
            ReportTypeConfig::generic(
                ReportType::EmbPrintingTesting,
                "Embroidery and Printing Washing Test Reports",
                &[
                    "styleNo",
                    "custStyle",
                    "fabricColor",
                    "embColor",
                    "embName",
                    "styleDescription",
                    "reportDate",
                    "recDate",
                    "embPlacement",
                    "fabrication",
                    "time",
                    "range",
                    "season",
                    "testMethod",
                    "detergents",
                    "washingMachine",
                    "colorChange1",
                    "colorChange5",
                    "colorChange10",
                    "colorChange15",
                    "colorStaining1",
                    "colorStaining5",
                    "colorStaining10",
                    "colorStaining15",
                    "appearance1",
                    "appearance5",
                    "appearance10",
                    "appearance15",
                    "cracking1",
                    "cracking5",
                    "cracking10",
                    "cracking15",
                    "fading1",
                    "fading5",
                    "fading10",
                    "fading15",
                    "testComments",
                    "beforeWashed",
                    "afterWashed",
                    "remark",
                    "finalResult",
                    "checkedBy",
                    "checkedDate",
                    "images",
                    "notes",
                ],
                &[COMMON_FIELDS, EMB_TESTING_FIELDS],
            ),
            FormComponent::EmbTestingForm,
            "EMBPrintingTestingPDF",
            "generateEMBPrintingTestingExcel",
        ),
        ReportTypeConfig::specialized(
            ReportTypeConfig::generic(
                ReportType::PullingTest,
                "Pulling Test Report (Approved)",
                &[
                    "poNumber",
                    "color",
                    "buyer",
                    "testDate",
                    "testTime",
                    "testRows",
                    "preparedBy",
                    "checkedBy",
                    "images",
                    "notes",
                ],
                &[COMMON_FIELDS, PULLING_TEST_FIELDS],
            ),
            FormComponent::PullingTestForm,
            "PullingTestPDF",
            "generatePullingTestExcel",
        ),
    ]
}
