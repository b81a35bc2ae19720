//! Layered field maps
//!
//! Report types share a common set of fields and then add or redefine their
//! own. Layers are merged once when the registry is built; a later layer
//! replaces any earlier definition with the same name.

use std::collections::HashMap;

use super::types::FieldDefinition;

/// Merged name -> definition map
pub type FieldMap = HashMap<&'static str, FieldDefinition>;

/// Merge field layers in order, later layers winning on name collision
pub fn merge_layers(layers: &[&[FieldDefinition]]) -> FieldMap {
    let mut merged = FieldMap::new();
    for layer in layers {
        for def in layer.iter() {
            merged.insert(def.name, *def);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form_schema::FieldType;

    const SHARED: &[FieldDefinition] = &[
        FieldDefinition::new("color", FieldType::MultiSelect, "COLOR").depends_on("ymStyle"),
        FieldDefinition::textarea("notes", "Notes", 4),
    ];

    const SPECIFIC: &[FieldDefinition] = &[
        FieldDefinition::text("color", "COLOR").required(),
        FieldDefinition::text("buyer", "BUYER"),
    ];

    #[test]
    fn test_later_layer_wins() {
        let merged = merge_layers(&[SHARED, SPECIFIC]);
        assert_eq!(merged.len(), 3);

        let color = merged["color"];
        assert_eq!(color.field_type, FieldType::Text);
        assert!(color.required);
        assert_eq!(color.depends_on, None);

        assert_eq!(merged["notes"].rows, Some(4));
    }

    #[test]
    fn test_order_matters() {
        let merged = merge_layers(&[SPECIFIC, SHARED]);
        assert_eq!(merged["color"].field_type, FieldType::MultiSelect);
    }
}
