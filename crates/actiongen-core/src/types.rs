use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Target
// ---------------------------------------------------------------------------

/// Language the registry artifacts are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    #[default]
    Cpp,
    Rust,
}

impl Target {
    pub fn all() -> &'static [Target] {
        &[Target::Cpp, Target::Rust]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Target::Cpp => "cpp",
            Target::Rust => "rust",
        }
    }

    /// File extension of every artifact for this target.
    pub fn extension(self) -> &'static str {
        match self {
            Target::Cpp => "h",
            Target::Rust => "rs",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Target {
    type Err = crate::error::GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpp" | "c++" => Ok(Target::Cpp),
            "rust" | "rs" => Ok(Target::Rust),
            _ => Err(crate::error::GenError::UnknownTarget(s.to_string())),
        }
    }
}
