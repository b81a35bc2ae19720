//! Field tables for every washing/testing report
//!
//! `COMMON_FIELDS` is the shared layer; each report type adds its own layer
//! on top (see `merge_layers`).

use crate::shared::form_schema::{FieldDefinition, FieldType, TableKind};

/// Attachment cap for every report
pub const MAX_IMAGES: usize = 5;

pub const COMMON_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::text("ymStyle", "YM Style")
        .required()
        .placeholder("Search from Yorksys")
        .autocomplete(),
    FieldDefinition::new("color", FieldType::MultiSelect, "COLOR").depends_on("ymStyle"),
    FieldDefinition::text("buyerStyle", "Buyer Style")
        .readonly()
        .placeholder("Select YM Style first"),
    FieldDefinition::new("po", FieldType::MultiSelect, "PO").depends_on("ymStyle"),
    FieldDefinition::new("exFtyDate", FieldType::MultiSelect, "Ex Fty Date").depends_on("ymStyle"),
    FieldDefinition::new("factory", FieldType::Select, "Factory")
        .required()
        .searchable(),
    FieldDefinition::date("sendToHomeWashingDate", "SEND To Home Washing Date")
        .required()
        .defaults_to_today(),
    FieldDefinition::new("images", FieldType::Image, "Images").max_count(MAX_IMAGES),
    FieldDefinition::textarea("notes", "Notes", 4)
        .placeholder("Add any additional notes or comments about this report..."),
    FieldDefinition::text("range", "Range").placeholder("Enter range (e.g., XS-XXL, 2-16)"),
];

const TEST_METHOD_HINT: &str =
    "Describe test method (e.g., 15 cycle washed at 30°c + tumble dry low heat after each cycle washed.)";

pub const HT_TESTING_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::text("styleNo", "Style No.")
        .required()
        .placeholder("Enter Style Number (e.g., PTCOC396)"),
    FieldDefinition::text("custStyle", "Cust.Style")
        .required()
        .placeholder("Enter Customer Style (e.g., STCO6817)"),
    FieldDefinition::text("fabricColor", "Fabric Color")
        .required()
        .placeholder("Enter Fabric Color (e.g., BLACK)"),
    FieldDefinition::text("htColor", "HT. color")
        .required()
        .placeholder("Enter Heat Transfer Color (e.g., GREY)"),
    FieldDefinition::text("htName", "HT. Name")
        .required()
        .placeholder("Enter Heat Transfer Name (e.g., LOGO)"),
    FieldDefinition::text("styleDescription", "Style Description")
        .required()
        .placeholder("Enter Style Description (e.g., LADIES' PANTS)"),
    FieldDefinition::date("reportDate", "Report Date").required(),
    FieldDefinition::date("recDate", "Rec. Date").required(),
    FieldDefinition::text("printPlacement", "Print Placement"),
    FieldDefinition::textarea("fabrication", "Fabrication", 2).placeholder(
        "Enter fabric composition (e.g., 86% NYLON SUPPLEX 14% LYCRA SPANDEX KNITTED, JERSEY)",
    ),
    FieldDefinition::text("time", "Time").placeholder("Enter Time (e.g., 12:21PM)"),
    FieldDefinition::text("range", "Range"),
    FieldDefinition::text("season", "Season").placeholder("Enter Season (e.g., SPRING 2026)"),
    FieldDefinition::textarea("testMethod", "Test Method", 2).placeholder(TEST_METHOD_HINT),
    FieldDefinition::text("detergents", "Detergents").placeholder("Enter detergent used (e.g., PERSIL)"),
    FieldDefinition::text("washingMachine", "Washing Machine")
        .placeholder("Enter washing machine type (e.g., Electrolux Front Loading)"),
    FieldDefinition::text("heatTemperature", "HEAT-TEMPERATURE"),
    FieldDefinition::text("washingTime", "Washing Time").placeholder("Enter time (e.g., 15sec.)"),
    FieldDefinition::text("washingPressure", "Washing Pressure")
        .placeholder("Enter pressure (e.g., 3.5 kg)"),
    FieldDefinition::text("washingTemperature", "Washing Temperature")
        .placeholder("Enter temperature (e.g., 155/165°c)"),
    // Print wash results after 3, 5, 10 and 15 washes
    FieldDefinition::text("colorChangeFabric3", "Colour change of fabric (3x)"),
    FieldDefinition::text("colorChangeFabric5", "Colour change of fabric (5x)"),
    FieldDefinition::text("colorChangeFabric10", "Colour change of fabric (10x)"),
    FieldDefinition::text("colorChangeFabric15", "Colour change of fabric (15x)"),
    FieldDefinition::text("colorStainingHT3", "Colour staining of HT (3x)"),
    FieldDefinition::text("colorStainingHT5", "Colour staining of HT (5x)"),
    FieldDefinition::text("colorStainingHT10", "Colour staining of HT (10x)"),
    FieldDefinition::text("colorStainingHT15", "Colour staining of HT (15x)"),
    FieldDefinition::text("appearanceAfterWashing3", "Appearance after washing (3x)"),
    FieldDefinition::text("appearanceAfterWashing5", "Appearance after washing (5x)"),
    FieldDefinition::text("appearanceAfterWashing10", "Appearance after washing (10x)"),
    FieldDefinition::text("appearanceAfterWashing15", "Appearance after washing (15x)"),
    FieldDefinition::text("peelOff3", "Peel off (3x)"),
    FieldDefinition::text("peelOff5", "Peel off (5x)"),
    FieldDefinition::text("peelOff10", "Peel off (10x)"),
    FieldDefinition::text("peelOff15", "Peel off (15x)"),
    FieldDefinition::text("fading3", "Fading (3x)"),
    FieldDefinition::text("fading5", "Fading (5x)"),
    FieldDefinition::text("fading10", "Fading (10x)"),
    FieldDefinition::text("fading15", "Fading (15x)"),
    FieldDefinition::textarea("testComments", "Test Comments", 2).placeholder("Enter test comments"),
    FieldDefinition::textarea("beforeWashed", "Before Washed", 2)
        .placeholder("Comments before washing"),
    FieldDefinition::textarea("afterWashed", "After Washed", 2).placeholder("Comments after washing"),
    FieldDefinition::textarea("washingResult", "Washing Result", 2)
        .placeholder("Washing test results"),
    FieldDefinition::new("finalResults", FieldType::Select, "Final Results")
        .options(FINAL_RESULT_OPTIONS)
        .default_value("Accepted"),
    FieldDefinition::text("checkedBy", "Checked by").placeholder("e.g., A LONG"),
    FieldDefinition::date("finalDate", "Final Date").defaults_to_today(),
];

pub const EMB_TESTING_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::text("styleNo", "Style No.")
        .required()
        .placeholder("Enter Style Number (e.g., PTCOC376)"),
    FieldDefinition::text("custStyle", "Cust.Style")
        .required()
        .placeholder("Enter Customer Style (e.g., SCL6042CC)"),
    FieldDefinition::text("fabricColor", "Fabric Color")
        .required()
        .placeholder("Enter Fabric Color (e.g., PORT ROYALE)"),
    FieldDefinition::text("embColor", "EMB/Print Color")
        .required()
        .placeholder("Enter EMB/Print Color (e.g., PORT ROYALE)"),
    FieldDefinition::text("embName", "EMB/Print Name")
        .required()
        .placeholder("Enter EMB/Print Name (e.g., LOGO)"),
    FieldDefinition::text("styleDescription", "Style Description")
        .required()
        .placeholder("Enter Style Description (e.g., LADIES' T-SHIRT)"),
    FieldDefinition::date("reportDate", "Report Date").required(),
    FieldDefinition::date("recDate", "Rec. Date").required(),
    FieldDefinition::text("embPlacement", "EMB/Print Placement"),
    FieldDefinition::textarea("fabrication", "Fabrication", 2)
        .placeholder("Enter fabric composition (e.g., 92% COTTON 8% SPANDEX KNITTED FLEECE)"),
    FieldDefinition::text("time", "Time").placeholder("Enter Time (e.g., 9:42AM)"),
    FieldDefinition::text("range", "Range"),
    FieldDefinition::text("season", "Season").placeholder("Enter Season (e.g., FALL 2025)"),
    FieldDefinition::textarea("testMethod", "Test Method", 2).placeholder(TEST_METHOD_HINT),
    FieldDefinition::text("detergents", "Detergents").placeholder("Enter detergent used (e.g., PERSIL)"),
    FieldDefinition::text("washingMachine", "Washing Machine")
        .placeholder("Enter washing machine type (e.g., Electrolux Front Loading)"),
    FieldDefinition::text("colorChange1", "Color Change (1x)"),
    FieldDefinition::text("colorChange5", "Color Change (5x)"),
    FieldDefinition::text("colorChange10", "Color Change (10x)"),
    FieldDefinition::text("colorChange15", "Color Change (15x)"),
    FieldDefinition::text("colorStaining1", "Color Staining (1x)"),
    FieldDefinition::text("colorStaining5", "Color Staining (5x)"),
    FieldDefinition::text("colorStaining10", "Color Staining (10x)"),
    FieldDefinition::text("colorStaining15", "Color Staining (15x)"),
    FieldDefinition::text("appearance1", "Appearance (1x)"),
    FieldDefinition::text("appearance5", "Appearance (5x)"),
    FieldDefinition::text("appearance10", "Appearance (10x)"),
    FieldDefinition::text("appearance15", "Appearance (15x)"),
    FieldDefinition::text("cracking1", "Cracking (1x)"),
    FieldDefinition::text("cracking5", "Cracking (5x)"),
    FieldDefinition::text("cracking10", "Cracking (10x)"),
    FieldDefinition::text("cracking15", "Cracking (15x)"),
    FieldDefinition::text("fading1", "Fading (1x)"),
    FieldDefinition::text("fading5", "Fading (5x)"),
    FieldDefinition::text("fading10", "Fading (10x)"),
    FieldDefinition::text("fading15", "Fading (15x)"),
    FieldDefinition::textarea("testComments", "Test Comments", 2).placeholder("Enter test comments"),
    FieldDefinition::textarea("beforeWashed", "Before Washed", 3)
        .placeholder("Comments before washing"),
    FieldDefinition::textarea("afterWashed", "After Washed", 3).placeholder("Comments after washing"),
    FieldDefinition::textarea("remark", "Remark", 2).placeholder("Additional remarks"),
    FieldDefinition::text("finalResult", "Final Result").default_value("Accepted"),
    FieldDefinition::text("checkedBy", "Checked by").placeholder("e.g., LONG"),
    FieldDefinition::date("checkedDate", "Date").defaults_to_today(),
];

pub const PULLING_TEST_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::text("poNumber", "PO#")
        .required()
        .placeholder("Enter PO Number"),
    FieldDefinition::text("color", "COLOR")
        .required()
        .placeholder("Enter Color"),
    FieldDefinition::text("buyer", "BUYER")
        .required()
        .placeholder("Enter Buyer Name"),
    FieldDefinition::date("testDate", "DATE").required().defaults_to_today(),
    FieldDefinition::text("testTime", "TIME").placeholder("e.g., 10:30 AM"),
    FieldDefinition::custom("testRows", "Test Results", TableKind::PullingTest),
    FieldDefinition::text("preparedBy", "Prepare by").placeholder("e.g., CHORIDY"),
    FieldDefinition::text("checkedBy", "Check by").placeholder("e.g., ALONG"),
];

pub const GARMENT_WASH_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::text("style", "STYLE").required(),
    FieldDefinition::new("washType", FieldType::Select, "Wash Type")
        .required()
        .options(&["Before Wash", "After Wash"]),
    FieldDefinition::text("moNo", "MO NO").readonly(),
    FieldDefinition::text("custStyle", "CUST. STYLE").required(),
    FieldDefinition::new("color", FieldType::MultiSelect, "COLOR").required(),
    FieldDefinition::text("season", "SEASON").required(),
    FieldDefinition::text("styleDescription", "STYLE DESCRIPTION").required(),
    FieldDefinition::new("sampleSize", FieldType::Select, "Shrinkage Size")
        .options(SAMPLE_SIZES)
        .default_value("M"),
    FieldDefinition::text("mainFabric", "MATERIAL MAIN FABRIC").required(),
    FieldDefinition::text("liningInserts", "MATERIAL LINING/INSERTS"),
    FieldDefinition::text("detergent", "DETERGENT"),
    FieldDefinition::new("washingMethod", FieldType::Textarea, "Washing Method").required(),
    FieldDefinition::custom("colorFastnessRows", "Color Fastness Data", TableKind::ColorFastness),
    FieldDefinition::custom("colorStainingRows", "Color Staining Data", TableKind::ColorStaining),
    FieldDefinition::custom(
        "visualAssessmentRows",
        "Visual Assessment Data",
        TableKind::VisualAssessment,
    ),
    FieldDefinition::custom("shrinkageRows", "Shrinkage Data", TableKind::Shrinkage),
    FieldDefinition::new("beforeWashComments", FieldType::Textarea, "BEFORE WASH COMMENTS"),
    FieldDefinition::new("afterWashComments", FieldType::Textarea, "AFTER WASH COMMENTS"),
    FieldDefinition::new("finalResult", FieldType::Select, "FINAL RESULTS")
        .required()
        .options(FINAL_RESULT_OPTIONS)
        .default_value("Accepted"),
    FieldDefinition::date("date", "DATE").required(),
    FieldDefinition::text("checkedBy", "CHECKED BY").required(),
    FieldDefinition::text("approvedBy", "APPROVED BY"),
];

pub const FINAL_RESULT_OPTIONS: &[&str] = &["Accepted", "Rejected"];

pub const SAMPLE_SIZES: &[&str] = &["XS", "S", "M", "L", "XL", "XXL"];
