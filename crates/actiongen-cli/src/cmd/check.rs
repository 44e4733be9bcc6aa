use crate::output::print_json;
use actiongen_core::config::{Config, WarnLevel};
use anyhow::Context;
use std::path::Path;

/// `actiongen check`: report config and table problems; non-zero exit on errors.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load actiongen.yaml")?;
    let warnings = config.validate();

    if json {
        print_json(&serde_json::json!({
            "target": config.target,
            "actions": config.actions.len(),
            "warnings": warnings,
        }))?;
    } else if warnings.is_empty() {
        println!(
            "{} actions OK for target {}.",
            config.actions.len(),
            config.target
        );
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    if warnings.iter().any(|w| w.level == WarnLevel::Error) {
        anyhow::bail!("check found errors");
    }
    Ok(())
}
