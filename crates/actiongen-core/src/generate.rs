use crate::descriptor::DescriptorTable;
use crate::error::Result;
use crate::io;
use crate::model::{GeneratedArtifact, RegistryModel};
use crate::render::renderer_for;
use crate::types::Target;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Expand and render the whole table without touching the filesystem.
///
/// Artifacts come back as: interface, one per action in declaration order,
/// aggregate. Identical input always yields identical bytes.
pub fn render_all(table: &DescriptorTable, target: Target) -> Result<Vec<GeneratedArtifact>> {
    let actions = table.expand()?;
    let model = RegistryModel::from_actions(&actions);
    renderer_for(target).render(&model)
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub target: Target,
    pub output_dir: PathBuf,
    pub actions: usize,
    pub files: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Regenerate `output_dir` from `table`.
///
/// Everything is rendered before the directory is cleared, so a bad table
/// leaves existing output untouched. With `dry_run` nothing is written.
pub fn generate(
    table: &DescriptorTable,
    target: Target,
    output_dir: &Path,
    dry_run: bool,
) -> Result<GenerationReport> {
    let artifacts = render_all(table, target)?;
    let actions = artifacts.len() - 2;

    let files = if dry_run {
        artifacts.iter().map(|a| output_dir.join(&a.path)).collect()
    } else {
        io::reset_dir(output_dir)?;
        io::write_artifacts(output_dir, &artifacts)?
    };

    tracing::info!(
        lang = %target,
        dir = %output_dir.display(),
        actions,
        files = files.len(),
        dry_run,
        "generated action registry"
    );

    Ok(GenerationReport {
        target,
        output_dir: output_dir.to_path_buf(),
        actions,
        files,
        dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::DeclaredAction;
    use crate::error::GenError;
    use tempfile::TempDir;

    fn scenario() -> DescriptorTable {
        DescriptorTable::from_pairs(&[
            ("shut_down", "Shut down the system gracefully"),
            ("make_table", "Make a table"),
        ])
    }

    fn read_dir_sorted(dir: &Path) -> Vec<(String, String)> {
        let mut files: Vec<_> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| {
                let p = e.unwrap().path();
                let name = p.file_name().unwrap().to_string_lossy().into_owned();
                (name, std::fs::read_to_string(&p).unwrap())
            })
            .collect();
        files.sort();
        files
    }

    #[test]
    fn render_is_deterministic() {
        for target in Target::all() {
            let a = render_all(&DescriptorTable::builtin(), *target).unwrap();
            let b = render_all(&DescriptorTable::builtin(), *target).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn writes_full_artifact_set() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("cli/actions");
        let report = generate(&scenario(), Target::Cpp, &out, false).unwrap();
        assert_eq!(report.actions, 2);
        assert_eq!(report.files.len(), 4);

        let names: Vec<String> = read_dir_sorted(&out).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["actions.h", "databaseAction.h", "makeTable.h", "shutDown.h"]);
    }

    #[test]
    fn regeneration_is_byte_identical_and_clears_stale_files() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("gen");
        generate(&scenario(), Target::Rust, &out, false).unwrap();
        let first = read_dir_sorted(&out);

        std::fs::write(out.join("stale.rs"), b"// left over").unwrap();
        generate(&scenario(), Target::Rust, &out, false).unwrap();
        assert_eq!(read_dir_sorted(&out), first);
    }

    #[test]
    fn invalid_table_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("gen");
        std::fs::create_dir_all(&out).unwrap();
        std::fs::write(out.join("keep.h"), b"previous output").unwrap();

        let bad = DescriptorTable::new(vec![
            DeclaredAction::Fields(vec!["shut_down".into(), "Stop".into()]),
            DeclaredAction::Fields(vec!["a".into(), "b".into(), "c".into(), "d".into()]),
        ]);
        let err = generate(&bad, Target::Cpp, &out, false).unwrap_err();
        assert!(matches!(err, GenError::StructuralValidation { index: 1, found: 4 }));
        assert_eq!(read_dir_sorted(&out), vec![("keep.h".to_string(), "previous output".to_string())]);
    }

    #[test]
    fn collision_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("gen");
        let bad = DescriptorTable::from_pairs(&[("make_table", "a"), ("make_table", "b")]);
        assert!(generate(&bad, Target::Cpp, &out, false).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn dry_run_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("gen");
        let report = generate(&scenario(), Target::Cpp, &out, true).unwrap();
        assert!(report.dry_run);
        assert_eq!(report.files[0], out.join("databaseAction.h"));
        assert!(!out.exists());
    }
}
