//! Structured form of the registry, built once from the expanded table and
//! handed to a renderer. Renderers only format these fields; they never
//! re-derive names from raw identifiers.

use crate::descriptor::ExpandedAction;
use serde::Serialize;
use std::path::PathBuf;

/// Appended to a derived name to form the concrete type name.
pub const TYPE_SUFFIX: &str = "_t";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryModel {
    pub identifier: String,
    /// Concrete type name: derived name plus [`TYPE_SUFFIX`].
    pub type_name: String,
    /// Artifact stem: the derived name.
    pub stem: String,
    pub discriminant: String,
    /// Returned verbatim by the label query.
    pub label: String,
}

impl From<&ExpandedAction> for EntryModel {
    fn from(a: &ExpandedAction) -> Self {
        Self {
            identifier: a.identifier.clone(),
            type_name: format!("{}{TYPE_SUFFIX}", a.derived_name),
            stem: a.derived_name.clone(),
            discriminant: a.discriminant(),
            label: a.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryModel {
    pub entries: Vec<EntryModel>,
}

impl RegistryModel {
    pub fn from_actions(actions: &[ExpandedAction]) -> Self {
        Self {
            entries: actions.iter().map(EntryModel::from).collect(),
        }
    }

    /// Enum discriminants in declaration order.
    pub fn discriminants(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.discriminant.as_str())
    }
}

// ---------------------------------------------------------------------------
// GeneratedArtifact
// ---------------------------------------------------------------------------

/// One rendered file. `path` is relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedArtifact {
    pub fn new(stem: &str, extension: &str, content: String) -> Self {
        Self {
            path: PathBuf::from(format!("{stem}.{extension}")),
            content,
        }
    }
}
