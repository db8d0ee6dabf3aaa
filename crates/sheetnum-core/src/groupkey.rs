//! Composite grouping keys derived from browser-organization attributes.
//!
//! A group key is just the concatenation, in hierarchy order, of a
//! sheet's attribute values: equal keys mean two sheets sit under the
//! same browser node at that depth. Resolution is pure; the same sheet
//! and definitions always produce the same key.

use sheetnum_model::{AttributeDefinition, Sheet};

/// Full-depth (or any ordered subset) group key for a sheet.
///
/// An attribute with no value for the sheet contributes the empty
/// string rather than an error.
pub fn group_key(sheet: &Sheet, definitions: &[AttributeDefinition]) -> String {
    definitions
        .iter()
        .map(|definition| sheet.attribute_value(definition))
        .collect()
}

/// Group key at a single hierarchy level; used when building the
/// depth-wise subgroup lists.
pub fn group_key_at(sheet: &Sheet, definition: &AttributeDefinition) -> String {
    sheet.attribute_value(definition).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetnum_model::{DefinitionId, SheetId};

    fn definitions() -> Vec<AttributeDefinition> {
        vec![
            AttributeDefinition::new(DefinitionId(0), "Phase"),
            AttributeDefinition::new(DefinitionId(1), "Discipline"),
        ]
    }

    #[test]
    fn concatenates_in_definition_order() {
        let defs = definitions();
        let sheet = Sheet::new(
            SheetId(1),
            "A1",
            vec!["1".to_string(), "Arch".to_string()],
        );
        assert_eq!(group_key(&sheet, &defs), "1Arch");
        assert_eq!(group_key_at(&sheet, &defs[0]), "1");
        assert_eq!(group_key_at(&sheet, &defs[1]), "Arch");
    }

    #[test]
    fn missing_value_contributes_empty_string() {
        let defs = definitions();
        let sheet = Sheet::new(SheetId(2), "B1", vec!["2".to_string()]);
        assert_eq!(group_key(&sheet, &defs), "2");
        assert_eq!(group_key_at(&sheet, &defs[1]), "");
    }

    #[test]
    fn resolution_is_deterministic() {
        let defs = definitions();
        let sheet = Sheet::new(
            SheetId(3),
            "C1",
            vec!["3".to_string(), "Struct".to_string()],
        );
        assert_eq!(group_key(&sheet, &defs), group_key(&sheet, &defs));
    }
}
