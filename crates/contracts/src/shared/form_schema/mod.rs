//! Field schema types for report forms
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::form_schema::{merge_layers, FieldDefinition, FieldType};
//!
//! const COMMON: &[FieldDefinition] = &[FieldDefinition::text("ymStyle", "YM Style").required()];
//! const SPECIFIC: &[FieldDefinition] = &[FieldDefinition::text("buyer", "BUYER")];
//!
//! let fields = merge_layers(&[COMMON, SPECIFIC]);
//! ```

mod field_type;
mod layers;
mod types;

pub use field_type::{FieldType, TableKind};
pub use layers::{merge_layers, FieldMap};
pub use types::FieldDefinition;
