use crate::output::print_json;
use actiongen_core::{config::Config, io, paths};
use anyhow::Context;
use std::path::Path;

/// `actiongen init`: write `actiongen.yaml` with the built-in actions.
///
/// Never overwrites an existing config.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let path = paths::config_path(root);
    let yaml = render_config(&Config::default())?;
    let created = io::write_if_missing(&path, yaml.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;

    if json {
        return print_json(&serde_json::json!({
            "path": path,
            "created": created,
        }));
    }

    if created {
        println!("Created {}", path.display());
    } else {
        println!("{} already exists; left unchanged", path.display());
    }
    Ok(())
}

fn render_config(config: &Config) -> anyhow::Result<String> {
    let body = config.to_yaml()?;
    Ok(format!(
        "# Actions to generate, in registry order. Each entry is\n\
         # [identifier, description] or {{ identifier, description }}.\n{body}"
    ))
}
