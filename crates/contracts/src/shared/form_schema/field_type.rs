//! Field type enumeration for report form schemas

use serde::{Deserialize, Serialize};

/// Input shape of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[default]
    Text,
    Date,
    Select,
    MultiSelect,
    Number,
    Textarea,
    Image,
    Custom, // table of row records, see TableKind
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::Select => "select",
            Self::MultiSelect => "multi_select",
            Self::Number => "number",
            Self::Textarea => "textarea",
            Self::Image => "image",
            Self::Custom => "custom",
        }
    }

    /// Field value is an ordered list rather than a scalar
    pub fn is_list(&self) -> bool {
        matches!(self, Self::MultiSelect | Self::Image)
    }
}

/// Row table carried by a `custom` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    PullingTest,
    ColorFastness,
    ColorStaining,
    VisualAssessment,
    Shrinkage,
}

impl TableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PullingTest => "pulling_test",
            Self::ColorFastness => "color_fastness",
            Self::ColorStaining => "color_staining",
            Self::VisualAssessment => "visual_assessment",
            Self::Shrinkage => "shrinkage",
        }
    }
}
