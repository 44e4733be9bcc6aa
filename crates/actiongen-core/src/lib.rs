pub mod config;
pub mod descriptor;
pub mod error;
pub mod generate;
pub mod io;
pub mod model;
pub mod naming;
pub mod paths;
pub mod render;
pub mod types;

pub use descriptor::{ActionDescriptor, DeclaredAction, DescriptorTable, ExpandedAction};
pub use error::{GenError, Result};
pub use generate::{generate, render_all, GenerationReport};
pub use model::GeneratedArtifact;
pub use types::Target;
