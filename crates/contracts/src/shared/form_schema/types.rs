//! Static field definitions for report forms
//!
//! All types use 'static data so the whole schema can live in `const` tables
//! and be copied around freely.

use super::field_type::{FieldType, TableKind};

/// Metadata for a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub field_type: FieldType,
    pub label: &'static str,
    pub required: bool,
    /// Field whose value gates this one (e.g. colors need a style first)
    pub depends_on: Option<&'static str>,
    pub readonly: bool,
    pub placeholder: Option<&'static str>,
    pub rows: Option<u8>,
    pub max_count: Option<usize>,
    pub options: Option<&'static [&'static str]>,
    pub autocomplete: bool,
    pub searchable: bool,

    // Declarative defaults used by the initial-state synthesizer
    pub defaults_to_today: bool,
    pub default_value: Option<&'static str>,
    pub table: Option<TableKind>,
}

impl FieldDefinition {
    pub const fn new(name: &'static str, field_type: FieldType, label: &'static str) -> Self {
        Self {
            name,
            field_type,
            label,
            required: false,
            depends_on: None,
            readonly: false,
            placeholder: None,
            rows: None,
            max_count: None,
            options: None,
            autocomplete: false,
            searchable: false,
            defaults_to_today: false,
            default_value: None,
            table: None,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, FieldType::Text, label)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, FieldType::Date, label)
    }

    pub const fn textarea(name: &'static str, label: &'static str, rows: u8) -> Self {
        Self {
            rows: Some(rows),
            ..Self::new(name, FieldType::Textarea, label)
        }
    }

    pub const fn custom(name: &'static str, label: &'static str, table: TableKind) -> Self {
        Self {
            table: Some(table),
            ..Self::new(name, FieldType::Custom, label)
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn depends_on(self, field: &'static str) -> Self {
        Self {
            depends_on: Some(field),
            ..self
        }
    }

    pub const fn readonly(self) -> Self {
        Self {
            readonly: true,
            ..self
        }
    }

    pub const fn placeholder(self, text: &'static str) -> Self {
        Self {
            placeholder: Some(text),
            ..self
        }
    }

    pub const fn max_count(self, count: usize) -> Self {
        Self {
            max_count: Some(count),
            ..self
        }
    }

    pub const fn options(self, options: &'static [&'static str]) -> Self {
        Self {
            options: Some(options),
            ..self
        }
    }

    pub const fn autocomplete(self) -> Self {
        Self {
            autocomplete: true,
            ..self
        }
    }

    pub const fn searchable(self) -> Self {
        Self {
            searchable: true,
            ..self
        }
    }

    pub const fn defaults_to_today(self) -> Self {
        Self {
            defaults_to_today: true,
            ..self
        }
    }

    pub const fn default_value(self, value: &'static str) -> Self {
        Self {
            default_value: Some(value),
            ..self
        }
    }

    /// Options as owned (value, label) pairs for select widgets
    pub fn option_pairs(&self) -> Vec<(String, String)> {
        self.options
            .unwrap_or(&[])
            .iter()
            .map(|o| (o.to_string(), o.to_string()))
            .collect()
    }
}
