//! Configuration loaded from `relx.kdl`.

pub mod loader;
pub mod types;

pub use loader::{load, load_file, parse_config};
pub use types::{ArtifactsConfig, RelxConfig};
