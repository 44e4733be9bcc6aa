use crate::error::{GenError, Result};
use crate::naming;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::{BTreeMap, HashMap};

/// Actions the generator emits when no table is configured.
pub const BUILTIN_ACTIONS: &[(&str, &str)] = &[
    ("shut_down", "Shut down the system gracefully"),
    ("make_table", "Make a table"),
    ("show_table", "Show an existing table"),
    ("list_tables", "List all existing tables"),
];

// ---------------------------------------------------------------------------
// ActionDescriptor / DeclaredAction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionDescriptor {
    pub identifier: String,
    pub description: String,
}

impl ActionDescriptor {
    pub fn new(identifier: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            description: description.into(),
        }
    }
}

/// One entry as written in a table file, before its shape has been checked.
///
/// Accepts `[identifier, description]` or `{ identifier, description }`.
/// Any other mapping lands in `Loose` so its field count can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeclaredAction {
    Fields(Vec<String>),
    Record(ActionDescriptor),
    Loose(BTreeMap<String, Value>),
}

impl DeclaredAction {
    fn into_descriptor(self, index: usize) -> Result<ActionDescriptor> {
        match self {
            DeclaredAction::Record(d) => Ok(d),
            DeclaredAction::Loose(map) => {
                let found = map.len();
                let field = |k: &str| map.get(k).and_then(Value::as_str);
                match (found, field("identifier"), field("description")) {
                    (2, Some(identifier), Some(description)) => {
                        Ok(ActionDescriptor::new(identifier, description))
                    }
                    _ => Err(GenError::StructuralValidation { index, found }),
                }
            }
            DeclaredAction::Fields(fields) => {
                let found = fields.len();
                match <[String; 2]>::try_from(fields) {
                    Ok([identifier, description]) => Ok(ActionDescriptor {
                        identifier,
                        description,
                    }),
                    Err(_) => Err(GenError::StructuralValidation { index, found }),
                }
            }
        }
    }
}

impl From<ActionDescriptor> for DeclaredAction {
    fn from(d: ActionDescriptor) -> Self {
        DeclaredAction::Record(d)
    }
}

// ---------------------------------------------------------------------------
// ExpandedAction
// ---------------------------------------------------------------------------

/// A validated descriptor with its derived camelCase name attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandedAction {
    pub derived_name: String,
    pub identifier: String,
    pub description: String,
}

impl ExpandedAction {
    pub fn discriminant(&self) -> String {
        naming::discriminant(&self.identifier)
    }
}

// ---------------------------------------------------------------------------
// DescriptorTable
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptorTable {
    entries: Vec<DeclaredAction>,
}

impl DescriptorTable {
    pub fn new(entries: Vec<DeclaredAction>) -> Self {
        Self { entries }
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(id, desc)| ActionDescriptor::new(*id, *desc).into())
                .collect(),
        )
    }

    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_ACTIONS)
    }

    pub fn entries(&self) -> &[DeclaredAction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate every entry, then attach derived names.
    ///
    /// Nothing is returned unless the whole table is sound: each entry has
    /// exactly two fields, each identifier matches `[a-z0-9_]+`, and no two
    /// identifiers share a discriminant. Output order is declaration order.
    pub fn expand(&self) -> Result<Vec<ExpandedAction>> {
        if self.entries.is_empty() {
            return Err(GenError::EmptyTable);
        }

        let descriptors = self
            .entries
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, entry)| entry.into_descriptor(i))
            .collect::<Result<Vec<_>>>()?;

        let mut seen: HashMap<String, &str> = HashMap::new();
        for d in &descriptors {
            naming::validate_identifier(&d.identifier)?;
            let disc = naming::discriminant(&d.identifier);
            if let Some(first) = seen.get(&disc) {
                return Err(GenError::IdentifierCollision {
                    discriminant: disc,
                    first: first.to_string(),
                    second: d.identifier.clone(),
                });
            }
            seen.insert(disc, &d.identifier);
        }

        let expanded: Vec<ExpandedAction> = descriptors
            .into_iter()
            .map(|d| ExpandedAction {
                derived_name: naming::to_camel_case(&d.identifier),
                identifier: d.identifier,
                description: d.description,
            })
            .collect();

        // `a_b` and `a__b` both derive `aB`; compare case-folded since the
        // derived name is also a file stem.
        let mut stems: HashMap<String, &str> = HashMap::new();
        for a in &expanded {
            let key = a.derived_name.to_ascii_lowercase();
            if let Some(first) = stems.get(&key) {
                return Err(GenError::DerivedNameCollision {
                    derived_name: a.derived_name.clone(),
                    first: first.to_string(),
                    second: a.identifier.clone(),
                });
            }
            stems.insert(key, &a.identifier);
        }

        Ok(expanded)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
