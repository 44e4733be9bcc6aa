use crate::descriptor::{DescriptorTable, ExpandedAction};
use crate::error::Result;
use crate::model::RegistryModel;
use crate::paths;
use crate::render::renderer_for;
use crate::types::Target;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

impl ConfigWarning {
    fn warning(message: String) -> Self {
        Self {
            level: WarnLevel::Warning,
            message,
        }
    }

    fn error(message: String) -> Self {
        Self {
            level: WarnLevel::Error,
            message,
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

/// Contents of `actiongen.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Relative to the project root. Cleared on every run.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub target: Target,
    pub actions: DescriptorTable,
}

fn default_version() -> u32 {
    1
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_OUTPUT_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            output_dir: default_output_dir(),
            target: Target::default(),
            actions: DescriptorTable::builtin(),
        }
    }
}

impl Config {
    pub fn exists(root: &Path) -> bool {
        paths::config_path(root).exists()
    }

    /// Load `actiongen.yaml` from `root`, or the built-in defaults if absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using built-in actions");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        Self::from_yaml_str(&data)
    }

    pub fn from_yaml_str(data: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(data)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        crate::io::atomic_write(&path, self.to_yaml()?.as_bytes())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        // 1. Output dir is wiped each run, so it must stay inside the project.
        let out = &self.output_dir;
        if out.is_absolute() {
            warnings.push(ConfigWarning::error(format!(
                "output_dir '{}' must be relative to the project root",
                out.display()
            )));
        } else if !out.components().any(|c| matches!(c, Component::Normal(_))) {
            warnings.push(ConfigWarning::error(format!(
                "output_dir '{}' resolves to the project root or above; it would be deleted",
                out.display()
            )));
        } else if out.components().any(|c| matches!(c, Component::ParentDir)) {
            warnings.push(ConfigWarning::warning(format!(
                "output_dir '{}' escapes the project root",
                out.display()
            )));
        }

        // 2. The table itself.
        let actions = match self.actions.expand() {
            Ok(a) => a,
            Err(e) => {
                warnings.push(ConfigWarning::error(e.to_string()));
                return warnings;
            }
        };
        warnings.extend(description_warnings(&actions));

        // 3. Names the chosen target cannot express.
        let model = RegistryModel::from_actions(&actions);
        if let Err(e) = renderer_for(self.target).render(&model) {
            warnings.push(ConfigWarning::error(e.to_string()));
        }

        warnings
    }
}

fn description_warnings(actions: &[ExpandedAction]) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for a in actions {
        let desc = a.description.trim();
        if desc.is_empty() {
            warnings.push(ConfigWarning::warning(format!(
                "action '{}' has an empty description",
                a.identifier
            )));
            continue;
        }
        if let Some(first) = seen.get(desc) {
            warnings.push(ConfigWarning::warning(format!(
                "actions '{}' and '{}' share the description '{}'",
                first, a.identifier, desc
            )));
        } else {
            seen.insert(desc, &a.identifier);
        }
    }
    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
