use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error(
        "action #{index} has {found} fields; expected exactly two string fields (identifier, description)"
    )]
    StructuralValidation { index: usize, found: usize },

    #[error("invalid identifier '{0}': must be non-empty lowercase alphanumeric with underscores")]
    InvalidIdentifier(String),

    #[error("identifiers '{first}' and '{second}' both map to discriminant {discriminant}")]
    IdentifierCollision {
        discriminant: String,
        first: String,
        second: String,
    },

    #[error("identifiers '{first}' and '{second}' both derive the type name '{derived_name}'")]
    DerivedNameCollision {
        derived_name: String,
        first: String,
        second: String,
    },

    #[error("identifier '{identifier}' cannot be rendered for {target}: {reason}")]
    UnrenderableName {
        identifier: String,
        target: crate::types::Target,
        reason: String,
    },

    #[error("action table is empty")]
    EmptyTable,

    #[error("refusing to clear output directory '{}'", .0.display())]
    UnsafeOutputDir(PathBuf),

    #[error("unknown target '{0}': expected cpp or rust")]
    UnknownTarget(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;
