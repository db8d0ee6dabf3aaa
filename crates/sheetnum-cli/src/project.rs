//! JSON-file realization of the sheet source and mutation sink.
//!
//! The project file holds the organization's attribute definitions in
//! hierarchy order plus every sheet with its identifier and attribute
//! values. Identifier writes accumulate in a pending map and only reach
//! the file on commit, so a failed operation leaves the file as it was.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use sheetnum_core::{MutationSink, SheetSource};
use sheetnum_model::{AttributeDefinition, HostError, Sheet, SheetId};

/// On-disk shape of a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectFile {
    #[serde(default)]
    pub definitions: Vec<AttributeDefinition>,
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

/// A loaded project file with a pending-change set.
#[derive(Debug)]
pub struct JsonProject {
    path: PathBuf,
    file: ProjectFile,
    pending: BTreeMap<SheetId, String>,
}

/// Immutable view of the sheets as they were when taken; what the
/// engine enumerates at the start of an operation.
#[derive(Debug, Clone)]
pub struct SheetSnapshot(Vec<Sheet>);

impl JsonProject {
    /// Load a project from a JSON file.
    pub fn load(path: &Path) -> Result<Self, HostError> {
        let text = fs::read_to_string(path)?;
        let file: ProjectFile = serde_json::from_str(&text)
            .map_err(|error| HostError::message(format!("invalid project file: {error}")))?;
        debug!(
            path = %path.display(),
            sheets = file.sheets.len(),
            definitions = file.definitions.len(),
            "project loaded"
        );
        Ok(Self {
            path: path.to_path_buf(),
            file,
            pending: BTreeMap::new(),
        })
    }

    pub fn definitions(&self) -> &[AttributeDefinition] {
        &self.file.definitions
    }

    pub fn snapshot(&self) -> SheetSnapshot {
        SheetSnapshot(self.file.sheets.clone())
    }

    #[cfg(test)]
    fn in_memory(path: PathBuf, file: ProjectFile) -> Self {
        Self {
            path,
            file,
            pending: BTreeMap::new(),
        }
    }
}

impl SheetSource for SheetSnapshot {
    fn sheets(&self) -> Result<Vec<Sheet>, HostError> {
        Ok(self.0.clone())
    }
}

impl MutationSink for JsonProject {
    fn set_identifier(&mut self, sheet: SheetId, identifier: &str) -> Result<(), HostError> {
        if !self.file.sheets.iter().any(|s| s.id == sheet) {
            return Err(HostError::message(format!(
                "unknown sheet id {}",
                sheet.0
            )));
        }
        self.pending.insert(sheet, identifier.to_string());
        Ok(())
    }

    fn commit(&mut self) -> Result<(), HostError> {
        let pending = std::mem::take(&mut self.pending);
        let count = pending.len();
        for sheet in &mut self.file.sheets {
            if let Some(identifier) = pending.get(&sheet.id) {
                sheet.identifier = identifier.clone();
            }
        }
        let text = serde_json::to_string_pretty(&self.file)
            .map_err(|error| HostError::message(format!("serialize project file: {error}")))?;
        // Write-then-rename so a failure mid-write cannot truncate the
        // project file.
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, text)?;
        fs::rename(&staging, &self.path)?;
        debug!(changes = count, path = %self.path.display(), "project committed");
        Ok(())
    }

    fn rollback(&mut self) {
        let dropped = self.pending.len();
        self.pending.clear();
        debug!(dropped, "pending identifier changes rolled back");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetnum_model::DefinitionId;

    fn sample() -> ProjectFile {
        ProjectFile {
            definitions: vec![
                AttributeDefinition::new(DefinitionId(0), "Phase"),
                AttributeDefinition::new(DefinitionId(1), "Discipline"),
            ],
            sheets: vec![Sheet::new(
                SheetId(1),
                "A1",
                vec!["1".to_string(), "Arch".to_string()],
            )],
        }
    }

    #[test]
    fn writes_are_pending_until_commit() {
        let mut project = JsonProject::in_memory(PathBuf::from("unused.json"), sample());
        project
            .set_identifier(SheetId(1), "10")
            .expect("sheet exists");
        assert_eq!(project.file.sheets[0].identifier, "A1");
        project.rollback();
        assert_eq!(project.file.sheets[0].identifier, "A1");
        assert!(project.pending.is_empty());
    }

    #[test]
    fn unknown_sheet_is_rejected() {
        let mut project = JsonProject::in_memory(PathBuf::from("unused.json"), sample());
        assert!(project.set_identifier(SheetId(99), "10").is_err());
    }

    #[test]
    fn snapshot_is_detached_from_pending_writes() {
        let mut project = JsonProject::in_memory(PathBuf::from("unused.json"), sample());
        let snapshot = project.snapshot();
        project
            .set_identifier(SheetId(1), "10")
            .expect("sheet exists");
        let sheets = snapshot.sheets().expect("snapshot enumerates");
        assert_eq!(sheets[0].identifier, "A1");
    }

    #[test]
    fn commit_applies_and_persists() {
        let dir = std::env::temp_dir().join("sheetnum-project-test");
        fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("project.json");
        let text = serde_json::to_string_pretty(&sample()).expect("serialize sample");
        fs::write(&path, text).expect("write sample");

        let mut project = JsonProject::load(&path).expect("load project");
        project
            .set_identifier(SheetId(1), "10")
            .expect("sheet exists");
        project.commit().expect("commit");

        let reloaded = JsonProject::load(&path).expect("reload project");
        assert_eq!(reloaded.file.sheets[0].identifier, "10");
        assert!(
            !path.with_extension("json.tmp").exists(),
            "staging file must be renamed away"
        );
        fs::remove_file(&path).ok();
    }
}
