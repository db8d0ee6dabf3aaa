//! Order-preserving hierarchy codes appended to sheet identifiers.
//!
//! The browser panel sorts sheets by identifier with plain string
//! comparison. Suffixing each identifier with a code built from an
//! invisible marker character, one more repetition per group, makes
//! that plain sort reproduce the hierarchy order without re-deriving
//! attribute values at display time: a code of N+1 markers always
//! sorts after one of N markers.

use std::collections::{BTreeMap, BTreeSet};

use sheetnum_model::{AttributeDefinition, Sheet};

use crate::groupkey::group_key;

/// Marker repeated to build group codes. An invisible directional
/// formatting character, guaranteed absent from legitimate identifiers.
pub const CODE_MARKER: char = '\u{202A}';

/// Marker for in-flight identifiers during the two-phase rewrite.
/// Reserved alongside [`CODE_MARKER`] and equally disjoint from
/// legitimate identifiers.
pub const TEMP_MARKER: char = '\u{202B}';

/// Assign each distinct full-depth group key a strictly increasing code.
///
/// Keys are enumerated in ascending lexical order (the order the
/// browser displays groups in, not natural order); the Nth key receives
/// N repetitions of [`CODE_MARKER`]. A single group still gets one
/// marker; no sheets yields an empty map.
pub fn assign_codes(
    sheets: &[Sheet],
    definitions: &[AttributeDefinition],
) -> BTreeMap<String, String> {
    let keys: BTreeSet<String> = sheets
        .iter()
        .map(|sheet| group_key(sheet, definitions))
        .collect();

    let mut codes = BTreeMap::new();
    let mut code = String::new();
    for key in keys {
        code.push(CODE_MARKER);
        codes.insert(key, code.clone());
    }
    codes
}

/// Remove any code or temp markers from an identifier, leaving the
/// bare human-visible part.
pub fn strip_markers(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| *c != CODE_MARKER && *c != TEMP_MARKER)
        .collect()
}
