//! Row tables carried by `custom` report fields

use serde::{Deserialize, Serialize};

use crate::shared::form_schema::TableKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PassFail {
    #[default]
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl PassFail {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassFail::Pass => "PASS",
            PassFail::Fail => "FAIL",
        }
    }
}

/// One pulling-force measurement
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PullingTestRow {
    #[serde(rename = "type")]
    pub row_type: String,
    pub pulling_force: String,
    pub pulling_time: String,
    pub visual_appearance: String,
    pub results: String,
    pub remark: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorFastnessRow {
    pub fabric_type: String,
    pub color: String,
    pub color_change: String,
    pub rating_after_wash: String,
    pub requirement: String,
    pub pass_fail: PassFail,
}

impl Default for ColorFastnessRow {
    fn default() -> Self {
        Self {
            fabric_type: String::new(),
            color: String::new(),
            color_change: "5".to_string(),
            rating_after_wash: String::new(),
            requirement: "4-5".to_string(),
            pass_fail: PassFail::Pass,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorStainingRow {
    pub fabric_type: String,
    pub color: String,
    pub color_staining: String,
    pub rating_after_wash: String,
    pub requirement: String,
    pub pass_fail: PassFail,
}

impl Default for ColorStainingRow {
    fn default() -> Self {
        Self {
            fabric_type: String::new(),
            color: String::new(),
            color_staining: "5".to_string(),
            rating_after_wash: String::new(),
            requirement: "4-5".to_string(),
            pass_fail: PassFail::Pass,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualAssessmentRow {
    pub item: String,
    pub accepted: bool,
    pub rejected: bool,
    pub comments: String,
}

impl Default for VisualAssessmentRow {
    fn default() -> Self {
        Self::accepted_item("")
    }
}

impl VisualAssessmentRow {
    pub fn accepted_item(item: &str) -> Self {
        Self {
            item: item.to_string(),
            accepted: true,
            rejected: false,
            comments: String::new(),
        }
    }

    /// Accepted and rejected are mutually exclusive
    pub fn mark(&mut self, verdict: Verdict) {
        self.accepted = verdict == Verdict::Accepted;
        self.rejected = verdict == Verdict::Rejected;
    }
}

/// Garment measurement before/after washing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShrinkageRow {
    pub location: String,
    pub original: String,
    pub tol_minus: String,
    pub tol_plus: String,
    pub before_wash: String,
    pub after_wash: String,
    pub shrinkage: String,
    pub requirement: String,
    pub pass_fail: PassFail,
    /// Only selected rows are submitted
    pub selected: bool,
}

impl Default for ShrinkageRow {
    fn default() -> Self {
        Self {
            location: String::new(),
            original: String::new(),
            tol_minus: "-1/2".to_string(),
            tol_plus: "1/2".to_string(),
            before_wash: String::new(),
            after_wash: String::new(),
            shrinkage: String::new(),
            requirement: "±5%".to_string(),
            pass_fail: PassFail::Pass,
            selected: false,
        }
    }
}

pub const FABRIC_TYPES: &[&str] = &["JERSEY", "RIB"];

pub const VISUAL_ASSESSMENT_ITEMS: &[&str] = &[
    "General Outlook",
    "Seams",
    "Embroidery",
    "H.Transfer",
    "Printing",
    "Trimmings / Accessories",
    "Others / Care label",
];

/// Value of a `custom` field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TableRows {
    PullingTest(Vec<PullingTestRow>),
    ColorFastness(Vec<ColorFastnessRow>),
    ColorStaining(Vec<ColorStainingRow>),
    VisualAssessment(Vec<VisualAssessmentRow>),
    Shrinkage(Vec<ShrinkageRow>),
}

impl TableRows {
    /// Rows a fresh report starts with
    pub fn seed(kind: TableKind) -> Self {
        match kind {
            TableKind::PullingTest => TableRows::PullingTest(vec![PullingTestRow::default()]),
            TableKind::ColorFastness => TableRows::ColorFastness(
                FABRIC_TYPES
                    .iter()
                    .map(|fabric| ColorFastnessRow {
                        fabric_type: fabric.to_string(),
                        ..ColorFastnessRow::default()
                    })
                    .collect(),
            ),
            TableKind::ColorStaining => TableRows::ColorStaining(
                FABRIC_TYPES
                    .iter()
                    .map(|fabric| ColorStainingRow {
                        fabric_type: fabric.to_string(),
                        ..ColorStainingRow::default()
                    })
                    .collect(),
            ),
            TableKind::VisualAssessment => TableRows::VisualAssessment(
                VISUAL_ASSESSMENT_ITEMS
                    .iter()
                    .map(|item| VisualAssessmentRow::accepted_item(item))
                    .collect(),
            ),
            TableKind::Shrinkage => TableRows::Shrinkage(vec![ShrinkageRow::default()]),
        }
    }

    /// Decode rows of a known kind
    pub fn from_value(kind: TableKind, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            TableKind::PullingTest => TableRows::PullingTest(serde_json::from_value(value)?),
            TableKind::ColorFastness => TableRows::ColorFastness(serde_json::from_value(value)?),
            TableKind::ColorStaining => TableRows::ColorStaining(serde_json::from_value(value)?),
            TableKind::VisualAssessment => {
                TableRows::VisualAssessment(serde_json::from_value(value)?)
            }
            TableKind::Shrinkage => TableRows::Shrinkage(serde_json::from_value(value)?),
        })
    }

    pub fn kind(&self) -> TableKind {
        match self {
            TableRows::PullingTest(_) => TableKind::PullingTest,
            TableRows::ColorFastness(_) => TableKind::ColorFastness,
            TableRows::ColorStaining(_) => TableKind::ColorStaining,
            TableRows::VisualAssessment(_) => TableKind::VisualAssessment,
            TableRows::Shrinkage(_) => TableKind::Shrinkage,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TableRows::PullingTest(rows) => rows.len(),
            TableRows::ColorFastness(rows) => rows.len(),
            TableRows::ColorStaining(rows) => rows.len(),
            TableRows::VisualAssessment(rows) => rows.len(),
            TableRows::Shrinkage(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a blank row. Color rows inherit the report's header colors.
    pub fn push_default_row(&mut self, header_colors: &[String]) {
        let color = header_colors.join(", ");
        match self {
            TableRows::PullingTest(rows) => rows.push(PullingTestRow::default()),
            TableRows::ColorFastness(rows) => rows.push(ColorFastnessRow {
                color,
                ..ColorFastnessRow::default()
            }),
            TableRows::ColorStaining(rows) => rows.push(ColorStainingRow {
                color,
                ..ColorStainingRow::default()
            }),
            TableRows::VisualAssessment(rows) => rows.push(VisualAssessmentRow::default()),
            TableRows::Shrinkage(rows) => rows.push(ShrinkageRow::default()),
        }
    }

    /// Remove the row at `index`. The pulling-test table never drops its last row.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        match self {
            TableRows::PullingTest(rows) => {
                if rows.len() <= 1 {
                    return false;
                }
                rows.remove(index);
            }
            TableRows::ColorFastness(rows) => {
                rows.remove(index);
            }
            TableRows::ColorStaining(rows) => {
                rows.remove(index);
            }
            TableRows::VisualAssessment(rows) => {
                rows.remove(index);
            }
            TableRows::Shrinkage(rows) => {
                rows.remove(index);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulling_seed_has_six_blank_keys() {
        let rows = serde_json::to_value(TableRows::seed(TableKind::PullingTest)).unwrap();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        let row = rows[0].as_object().unwrap();
        let mut keys: Vec<_> = row.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "pullingForce",
                "pullingTime",
                "remark",
                "results",
                "type",
                "visualAppearance"
            ]
        );
        assert!(row.values().all(|v| v == ""));
    }

    #[test]
    fn test_color_seeds() {
        let TableRows::ColorFastness(rows) = TableRows::seed(TableKind::ColorFastness) else {
            panic!("wrong kind");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fabric_type, "JERSEY");
        assert_eq!(rows[1].fabric_type, "RIB");
        assert!(rows
            .iter()
            .all(|r| r.color_change == "5" && r.requirement == "4-5" && r.pass_fail == PassFail::Pass));

        let json = serde_json::to_value(TableRows::seed(TableKind::ColorStaining)).unwrap();
        assert_eq!(json[1]["fabricType"], "RIB");
        assert_eq!(json[1]["colorStaining"], "5");
        assert_eq!(json[1]["passFail"], "PASS");
    }

    #[test]
    fn test_visual_assessment_seed() {
        let TableRows::VisualAssessment(rows) = TableRows::seed(TableKind::VisualAssessment) else {
            panic!("wrong kind");
        };
        assert_eq!(rows.len(), 7);
        assert!(rows.iter().all(|r| r.accepted && !r.rejected));
        assert_eq!(rows[6].item, "Others / Care label");
    }

    #[test]
    fn test_shrinkage_seed() {
        let json = serde_json::to_value(TableRows::seed(TableKind::Shrinkage)).unwrap();
        assert_eq!(json[0]["tolMinus"], "-1/2");
        assert_eq!(json[0]["tolPlus"], "1/2");
        assert_eq!(json[0]["requirement"], "±5%");
        assert_eq!(json[0]["passFail"], "PASS");
        // nine measurement keys plus the submit selection flag, off until ticked
        assert_eq!(json[0].as_object().unwrap().len(), 10);
        assert_eq!(json[0]["selected"], false);
    }

    #[test]
    fn test_added_color_rows_take_header_colors() {
        let mut rows = TableRows::seed(TableKind::ColorStaining);
        rows.push_default_row(&["NAVY".to_string(), "RED".to_string()]);
        let TableRows::ColorStaining(rows) = rows else {
            panic!("wrong kind");
        };
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].color, "NAVY, RED");
        assert_eq!(rows[2].fabric_type, "");
        assert_eq!(rows[2].color_staining, "5");
    }

    #[test]
    fn test_pulling_table_keeps_last_row() {
        let mut rows = TableRows::seed(TableKind::PullingTest);
        assert!(!rows.remove_row(0));
        rows.push_default_row(&[]);
        assert!(rows.remove_row(1));
        assert_eq!(rows.len(), 1);
        assert!(!rows.remove_row(5));

        let mut shrinkage = TableRows::seed(TableKind::Shrinkage);
        assert!(shrinkage.remove_row(0));
        assert!(shrinkage.is_empty());
    }

    #[test]
    fn test_mark_is_exclusive() {
        let mut row = VisualAssessmentRow::accepted_item("Seams");
        row.mark(Verdict::Rejected);
        assert!(row.rejected && !row.accepted);
        row.mark(Verdict::Accepted);
        assert!(row.accepted && !row.rejected);
    }

    #[test]
    fn test_decode_by_kind() {
        let value = serde_json::json!([{ "item": "Seams", "accepted": false, "rejected": true }]);
        let rows = TableRows::from_value(TableKind::VisualAssessment, value).unwrap();
        assert_eq!(rows.kind(), TableKind::VisualAssessment);
        let TableRows::VisualAssessment(rows) = rows else {
            panic!("wrong kind");
        };
        assert!(rows[0].rejected);
        assert_eq!(rows[0].comments, "");

        assert!(TableRows::from_value(TableKind::Shrinkage, serde_json::json!("oops")).is_err());
    }
}
