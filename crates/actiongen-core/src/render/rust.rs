//! Rust module output. The output directory becomes a module: `mod.rs` holds
//! the registry, `database_action.rs` the enum and trait, and each action gets
//! `<derivedName>.rs` mounted under its identifier with `#[path]`.

use super::{unrenderable, Renderer};
use crate::error::Result;
use crate::model::{EntryModel, GeneratedArtifact, RegistryModel};
use crate::types::Target;

pub const INTERFACE_STEM: &str = "database_action";
pub const AGGREGATE_STEM: &str = "mod";

const HEADER: &str = "// @generated by actiongen. Do not edit.";

/// Identifiers that cannot be used as plain module names.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Crate names the generated modules refer to by path.
const SHADOWED_CRATES: &[&str] = &["std", "core", "alloc"];

#[derive(Debug, Clone, Copy, Default)]
pub struct RustRenderer;

impl Renderer for RustRenderer {
    fn target(&self) -> Target {
        Target::Rust
    }

    fn reserved_stems(&self) -> &'static [&'static str] {
        &[INTERFACE_STEM, AGGREGATE_STEM]
    }

    fn check_entry(&self, entry: &EntryModel) -> Result<()> {
        let id = entry.identifier.as_str();
        if KEYWORDS.contains(&id) {
            return Err(unrenderable(entry, Target::Rust, "identifier is a Rust keyword"));
        }
        if id == "_" || id.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(unrenderable(entry, Target::Rust, "identifier is not a valid module name"));
        }
        if SHADOWED_CRATES.contains(&id) {
            return Err(unrenderable(
                entry,
                Target::Rust,
                format!("module '{id}' would shadow the {id} crate"),
            ));
        }
        if id == INTERFACE_STEM {
            return Err(unrenderable(
                entry,
                Target::Rust,
                format!("module name '{id}' is used by a generated file"),
            ));
        }
        Ok(())
    }

    fn interface(&self, model: &RegistryModel) -> GeneratedArtifact {
        let variants = model
            .discriminants()
            .map(|d| format!("    {d}"))
            .collect::<Vec<_>>()
            .join(",\n");

        let content = format!(
            r#"{HEADER}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {{
{variants}
}}

/// Capability shared by every registered action.
pub trait DatabaseAction: Send + Sync {{
    /// Label shown to the user when picking an action.
    fn user_option(&self) -> &'static str;

    /// Which kind of task this action submits.
    fn task_type(&self) -> Task;
}}
"#
        );
        GeneratedArtifact::new(INTERFACE_STEM, Target::Rust.extension(), content)
    }

    fn concrete(&self, entry: &EntryModel) -> GeneratedArtifact {
        let ty = &entry.type_name;
        let disc = &entry.discriminant;
        // Debug formatting of a str is a valid Rust string literal.
        let label = format!("{:?}", entry.label);

        let content = format!(
            r#"{HEADER}

use super::{INTERFACE_STEM}::{{DatabaseAction, Task}};

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default)]
pub struct {ty};

impl DatabaseAction for {ty} {{
    fn user_option(&self) -> &'static str {{
        {label}
    }}

    fn task_type(&self) -> Task {{
        Task::{disc}
    }}
}}
"#
        );
        GeneratedArtifact::new(&entry.stem, Target::Rust.extension(), content)
    }

    fn aggregate(&self, model: &RegistryModel) -> GeneratedArtifact {
        let modules = model
            .entries
            .iter()
            .map(|e| format!("#[path = \"{}.rs\"]\npub mod {};", e.stem, e.identifier))
            .collect::<Vec<_>>()
            .join("\n");
        let registrations = model
            .entries
            .iter()
            .map(|e| format!("        ret.push(Box::new({}::{}));", e.identifier, e.type_name))
            .collect::<Vec<_>>()
            .join("\n");
        let count = model.entries.len();

        let content = format!(
            r#"{HEADER}

pub mod {INTERFACE_STEM};
{modules}

use std::sync::OnceLock;

pub use {INTERFACE_STEM}::{{DatabaseAction, Task}};

pub type PossibleActions = Vec<Box<dyn DatabaseAction>>;

static POSSIBLE_ACTIONS: OnceLock<PossibleActions> = OnceLock::new();

/// Every registered action in declaration order, built once on first use.
pub fn possible_actions() -> &'static [Box<dyn DatabaseAction>] {{
    POSSIBLE_ACTIONS.get_or_init(|| {{
        let mut ret: PossibleActions = Vec::with_capacity({count});
{registrations}
        ret
    }})
}}
"#
        );
        GeneratedArtifact::new(AGGREGATE_STEM, Target::Rust.extension(), content)
    }
}
