pub mod cpp;
pub mod rust;

use crate::error::{GenError, Result};
use crate::model::{EntryModel, GeneratedArtifact, RegistryModel};
use crate::types::Target;

pub use cpp::CppRenderer;
pub use rust::RustRenderer;

/// Renders a [`RegistryModel`] into source files for one target language.
///
/// `render` emits the interface artifact first, then one concrete artifact per
/// entry in model order, then the aggregate. Output depends only on the model.
pub trait Renderer {
    fn target(&self) -> Target;

    /// Stems taken by the fixed artifacts of this target.
    fn reserved_stems(&self) -> &'static [&'static str];

    /// Target-specific name checks beyond the shared ones.
    fn check_entry(&self, _entry: &EntryModel) -> Result<()> {
        Ok(())
    }

    fn interface(&self, model: &RegistryModel) -> GeneratedArtifact;

    fn concrete(&self, entry: &EntryModel) -> GeneratedArtifact;

    fn aggregate(&self, model: &RegistryModel) -> GeneratedArtifact;

    fn render(&self, model: &RegistryModel) -> Result<Vec<GeneratedArtifact>> {
        for entry in &model.entries {
            check_stem(self.target(), self.reserved_stems(), entry)?;
            self.check_entry(entry)?;
        }
        let mut out = Vec::with_capacity(model.entries.len() + 2);
        out.push(self.interface(model));
        out.extend(model.entries.iter().map(|e| self.concrete(e)));
        out.push(self.aggregate(model));
        Ok(out)
    }
}

pub fn renderer_for(target: Target) -> Box<dyn Renderer> {
    match target {
        Target::Cpp => Box::new(CppRenderer),
        Target::Rust => Box::new(RustRenderer),
    }
}

pub(crate) fn unrenderable(
    entry: &EntryModel,
    target: Target,
    reason: impl Into<String>,
) -> GenError {
    GenError::UnrenderableName {
        identifier: entry.identifier.clone(),
        target,
        reason: reason.into(),
    }
}

fn check_stem(target: Target, reserved: &[&str], entry: &EntryModel) -> Result<()> {
    match entry.stem.chars().next() {
        None => return Err(unrenderable(entry, target, "derived name is empty")),
        Some(c) if c.is_ascii_digit() => {
            return Err(unrenderable(entry, target, "derived name starts with a digit"))
        }
        _ => {}
    }
    if reserved.iter().any(|r| r.eq_ignore_ascii_case(&entry.stem)) {
        return Err(unrenderable(
            entry,
            target,
            format!("stem '{}' is used by a generated file", entry.stem),
        ));
    }
    Ok(())
}
