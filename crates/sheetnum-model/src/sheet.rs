//! Sheets and the browser-organization attributes that classify them.

use serde::{Deserialize, Serialize};

/// Stable identity of a sheet, independent of its display identifier.
///
/// The identifier is the thing being renumbered, so mutations have to be
/// keyed by something that does not move underneath them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SheetId(pub u64);

/// Handle for one organizational attribute: its position in the browser
/// hierarchy (level 0 = outermost grouping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DefinitionId(pub usize);

/// One attribute of the project's browser organization scheme.
///
/// Definitions arrive from the host in fixed hierarchy order; the id is
/// used only as a lookup key into a sheet's attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub id: DefinitionId,
    /// Display name (e.g. "Phase", "Discipline").
    pub name: String,
}

impl AttributeDefinition {
    pub fn new(id: DefinitionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A document record with a mutable display identifier and one attribute
/// value per definition in the organization scheme.
///
/// Only `identifier` is ever mutated by the renumbering core; sheets are
/// never created or destroyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub id: SheetId,
    /// Human identifier, non-empty and unique across the project.
    pub identifier: String,
    /// Attribute values in definition order; missing slots read as "".
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl Sheet {
    pub fn new(id: SheetId, identifier: impl Into<String>, attributes: Vec<String>) -> Self {
        Self {
            id,
            identifier: identifier.into(),
            attributes,
        }
    }

    /// Value of the given attribute for this sheet, or the empty string
    /// when the sheet carries no value at that level.
    pub fn attribute_value(&self, definition: &AttributeDefinition) -> &str {
        self.attributes
            .get(definition.id.0)
            .map(String::as_str)
            .unwrap_or_default()
    }
}
