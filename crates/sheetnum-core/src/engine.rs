//! The renumber operation: collect, offer subgroups, rewrite, code.
//!
//! The engine owns the full sequence and nothing else: sheets come from
//! a [`SheetSource`], the subgroup choice from a [`SubgroupSelector`]
//! (the one point where the operation blocks), and every identifier
//! write goes through a [`MutationSink`] that makes the whole batch
//! visible atomically on commit. On any host failure the engine asks
//! the sink to roll back and reports the error; it never attempts a
//! manual undo of its own.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use sheetnum_model::{
    AttributeDefinition, HostError, RenumberError, RenumberOutcome, RenumberRequest, Result,
    Selection, Sheet, SheetId,
};

use crate::codes::{TEMP_MARKER, assign_codes, strip_markers};
use crate::groupkey::{group_key, group_key_at};
use crate::natural::natural_cmp;

/// Enumerates the project's sheets with current identifiers and
/// attribute values.
pub trait SheetSource {
    fn sheets(&self) -> std::result::Result<Vec<Sheet>, HostError>;
}

/// Presents the selectable subgroup keys and returns the user's choice,
/// or cancellation. Blocks the operation until it returns.
pub trait SubgroupSelector {
    fn select(
        &mut self,
        options: &[String],
        default: &str,
    ) -> std::result::Result<Selection, HostError>;
}

/// Accepts identifier writes and makes them visible all-or-nothing.
pub trait MutationSink {
    fn set_identifier(
        &mut self,
        sheet: SheetId,
        identifier: &str,
    ) -> std::result::Result<(), HostError>;
    fn commit(&mut self) -> std::result::Result<(), HostError>;
    fn rollback(&mut self);
}

/// Drives one renumber operation over a fixed organization scheme.
///
/// The definitions arrive in hierarchy order; the first two levels feed
/// subgroup selection and the whole list feeds the final hierarchy
/// codes.
#[derive(Debug, Clone)]
pub struct RenumberEngine {
    definitions: Vec<AttributeDefinition>,
}

impl RenumberEngine {
    pub fn new(definitions: Vec<AttributeDefinition>) -> Self {
        Self { definitions }
    }

    pub fn definitions(&self) -> &[AttributeDefinition] {
        &self.definitions
    }

    /// Run the full operation: collect, compute subgroups, await the
    /// selection, renumber the chosen subgroup, and append hierarchy
    /// codes to every sheet.
    ///
    /// # Errors
    ///
    /// [`RenumberError::EmptyProject`] when the project has no sheets
    /// and [`RenumberError::Cancelled`] when the user declines; neither
    /// touches any sheet. [`RenumberError::Host`] wraps any collaborator
    /// failure after the sink has been rolled back.
    pub fn run<S, U, M>(&self, source: &S, selector: &mut U, sink: &mut M) -> Result<RenumberOutcome>
    where
        S: SheetSource,
        U: SubgroupSelector,
        M: MutationSink,
    {
        let mut sheets = source.sheets().map_err(RenumberError::Host)?;
        if sheets.is_empty() {
            return Err(RenumberError::EmptyProject);
        }
        debug!(count = sheets.len(), "collected sheets");

        let options = self.subgroup_options(&sheets)?;
        let request = match selector
            .select(&options, &options[0])
            .map_err(RenumberError::Host)?
        {
            Selection::Chosen(request) => request,
            Selection::Cancelled => return Err(RenumberError::Cancelled),
        };
        debug!(subgroup = %request.subgroup, start = %request.start, "selection received");

        // Everything from here on mutates; one failure rolls back all of it.
        match self.renumber_and_code(&mut sheets, &request, sink) {
            Ok(outcome) => {
                sink.commit().map_err(|error| {
                    sink.rollback();
                    RenumberError::Host(error)
                })?;
                info!(renumbered = outcome.renumbered, "renumber complete");
                Ok(outcome)
            }
            Err(error) => {
                sink.rollback();
                Err(error)
            }
        }
    }

    /// Distinct depth-1 keys offered for selection: grouped under each
    /// depth-0 key first, then the union across groups in ordinary
    /// string order.
    ///
    /// A depth-1 key spans the first two hierarchy levels, so "Arch"
    /// under phase 1 and "Arch" under phase 2 are distinct subgroups.
    fn subgroup_options(&self, sheets: &[Sheet]) -> Result<Vec<String>> {
        let [outer, _inner, ..] = self.definitions.as_slice() else {
            return Err(RenumberError::Host(HostError::message(
                "browser organization needs at least two grouping levels",
            )));
        };

        let outer_keys: BTreeSet<String> = sheets
            .iter()
            .map(|sheet| group_key_at(sheet, outer))
            .collect();

        let mut options = BTreeSet::new();
        for outer_key in &outer_keys {
            for sheet in sheets
                .iter()
                .filter(|sheet| group_key_at(sheet, outer) == *outer_key)
            {
                options.insert(group_key(sheet, &self.definitions[..2]));
            }
        }
        Ok(options.into_iter().collect())
    }

    /// Steps 4 and 5: sequential renumbering of the chosen subgroup via
    /// the temp marker, then hierarchy codes over the whole project.
    fn renumber_and_code<M: MutationSink>(
        &self,
        sheets: &mut [Sheet],
        request: &RenumberRequest,
        sink: &mut M,
    ) -> Result<RenumberOutcome> {
        let mut chosen: Vec<usize> = (0..sheets.len())
            .filter(|&index| group_key(&sheets[index], &self.definitions[..2]) == request.subgroup)
            .collect();
        chosen.sort_by(|&a, &b| natural_cmp(&sheets[a].identifier, &sheets[b].identifier));

        let start: i64 = match request.start.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(start = %request.start, "starting number not parsable, using 1");
                1
            }
        };
        // A seed so large the sequence would run past i64::MAX gets the
        // same fallback as an unparsable one; numbering never fails the
        // operation.
        let start = match start.checked_add(chosen.len() as i64) {
            Some(_) => start,
            None => {
                warn!(start, "starting number too large for subgroup, using 1");
                1
            }
        };

        // Phase one: route every new number through the temp marker.
        // The marked value is disjoint from both the old identifiers and
        // the final ones, so no write can transiently collide with a
        // sheet that has not been renumbered yet.
        for (offset, &index) in chosen.iter().enumerate() {
            let number = start + offset as i64;
            let marked = format!("{number}{TEMP_MARKER}");
            sink.set_identifier(sheets[index].id, &marked)
                .map_err(RenumberError::Host)?;
            sheets[index].identifier = marked;
        }
        let renumbered = chosen.len();
        debug!(renumbered, start, "sequential identifiers assigned");

        // Phase two, fused with the code pass: strip markers and append
        // each sheet's hierarchy code in a single write per sheet, so
        // identifiers stay unique at every observable point.
        let codes = assign_codes(sheets, &self.definitions);
        for sheet in sheets.iter_mut() {
            let key = group_key(sheet, &self.definitions);
            let code = codes.get(&key).map(String::as_str).unwrap_or_default();
            let rewritten = format!("{}{code}", strip_markers(&sheet.identifier));
            if rewritten != sheet.identifier {
                sink.set_identifier(sheet.id, &rewritten)
                    .map_err(RenumberError::Host)?;
                sheet.identifier = rewritten;
            }
        }
        debug!(groups = codes.len(), "hierarchy codes appended");

        Ok(RenumberOutcome { renumbered })
    }
}
