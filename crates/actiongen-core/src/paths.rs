use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = "actiongen.yaml";
pub const DEFAULT_OUTPUT_DIR: &str = "cli/actions";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Resolve a configured output directory against the project root.
pub fn output_dir(root: &Path, configured: &Path) -> PathBuf {
    root.join(configured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(config_path(root), PathBuf::from("/tmp/proj/actiongen.yaml"));
        assert_eq!(
            output_dir(root, Path::new(DEFAULT_OUTPUT_DIR)),
            PathBuf::from("/tmp/proj/cli/actions")
        );
    }
}
