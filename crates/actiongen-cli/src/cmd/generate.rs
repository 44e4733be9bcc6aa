use crate::output::print_json;
use actiongen_core::config::{Config, WarnLevel};
use actiongen_core::{paths, Target};
use anyhow::Context;
use std::path::{Path, PathBuf};

pub fn run(
    root: &Path,
    target: Option<&str>,
    out: Option<PathBuf>,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = Config::load(root).context("failed to load actiongen.yaml")?;
    if let Some(t) = target {
        config.target = t.parse::<Target>()?;
    }
    if let Some(dir) = out {
        config.output_dir = dir;
    }

    // Refuse before anything on disk is touched.
    let mut errors = Vec::new();
    for w in config.validate() {
        match w.level {
            WarnLevel::Warning => tracing::warn!("{}", w.message),
            WarnLevel::Error => errors.push(w.message),
        }
    }
    if !errors.is_empty() {
        anyhow::bail!("{}", errors.join("; "));
    }

    let output_dir = paths::output_dir(root, &config.output_dir);
    let report = actiongen_core::generate(&config.actions, config.target, &output_dir, dry_run)
        .with_context(|| format!("failed to generate into {}", output_dir.display()))?;

    if json {
        return print_json(&report);
    }

    let verb = if report.dry_run { "Would write" } else { "Wrote" };
    println!(
        "{verb} {} files for {} actions ({}) in {}:",
        report.files.len(),
        report.actions,
        report.target,
        output_dir.display()
    );
    for f in &report.files {
        let shown = f.strip_prefix(&output_dir).unwrap_or(f.as_path());
        println!("  {}", shown.display());
    }
    Ok(())
}
