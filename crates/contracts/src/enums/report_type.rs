use serde::{Deserialize, Serialize};
use std::fmt;

/// Washing/testing report categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReportType {
    #[serde(rename = "Home Wash Test")]
    HomeWash,
    #[serde(rename = "Garment Wash Report")]
    GarmentWash,
    #[serde(rename = "HT Testing")]
    HtTesting,
    #[serde(rename = "EMB/Printing Testing")]
    EmbPrintingTesting,
    #[serde(rename = "Pulling Test")]
    PullingTest,
}

impl ReportType {
    /// Stable snake_case identifier, used in URLs and storage
    pub fn code(&self) -> &'static str {
        match self {
            ReportType::HomeWash => "home_wash",
            ReportType::GarmentWash => "garment_wash",
            ReportType::HtTesting => "ht_testing",
            ReportType::EmbPrintingTesting => "emb_printing_testing",
            ReportType::PullingTest => "pulling_test",
        }
    }

    /// Human readable name; this is also the value carried in form state
    pub fn display_name(&self) -> &'static str {
        match self {
            ReportType::HomeWash => "Home Wash Test",
            ReportType::GarmentWash => "Garment Wash Report",
            ReportType::HtTesting => "HT Testing",
            ReportType::EmbPrintingTesting => "EMB/Printing Testing",
            ReportType::PullingTest => "Pulling Test",
        }
    }

    /// All report types in declaration order
    pub fn all() -> Vec<ReportType> {
        vec![
            ReportType::HomeWash,
            ReportType::GarmentWash,
            ReportType::HtTesting,
            ReportType::EmbPrintingTesting,
            ReportType::PullingTest,
        ]
    }

    /// Parse from either the display name or the code
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::all()
            .into_iter()
            .find(|t| t.display_name() == value || t.code() == value)
    }
}

impl Default for ReportType {
    fn default() -> Self {
        ReportType::HomeWash
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_name_and_code() {
        assert_eq!(ReportType::parse("HT Testing"), Some(ReportType::HtTesting));
        assert_eq!(ReportType::parse("ht_testing"), Some(ReportType::HtTesting));
        assert_eq!(ReportType::parse("\tHT Testing "), Some(ReportType::HtTesting));
        assert_eq!(ReportType::parse("ht testing"), None);
        assert_eq!(
            ReportType::parse("EMB/Printing Testing"),
            Some(ReportType::EmbPrintingTesting)
        );
        assert_eq!(ReportType::parse("Home Wash"), None);
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&ReportType::PullingTest).unwrap();
        assert_eq!(json, "\"Pulling Test\"");
        let back: ReportType = serde_json::from_str("\"Garment Wash Report\"").unwrap();
        assert_eq!(back, ReportType::GarmentWash);
    }
}
