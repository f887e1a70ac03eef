use crate::artifacts::RepoInfo;
use crate::constants::{
    DEFAULT_INSTANCE, DEFAULT_INVALID_EXTENSIONS, DEFAULT_INVALID_PREFIXES, DEFAULT_PRODUCT,
    OSC_PROGRAM,
};
use crate::providers::ExclusionRules;
use serde::Serialize;

/// Settings read from `relx.kdl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelxConfig {
    /// API URL passed to `osc -A`
    pub osc_instance: String,
    /// Executable used for queries
    pub osc_command: String,
    /// Project scanned when `--project` is not given
    pub default_product: String,
    pub artifacts: ArtifactsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactsConfig {
    pub rules: ExclusionRules,
    pub repos: Vec<RepoInfo>,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            rules: ExclusionRules::new(
                DEFAULT_INVALID_PREFIXES.iter().copied(),
                DEFAULT_INVALID_EXTENSIONS.iter().copied(),
            ),
            repos: Vec::new(),
        }
    }
}

impl Default for RelxConfig {
    fn default() -> Self {
        Self {
            osc_instance: DEFAULT_INSTANCE.to_string(),
            osc_command: OSC_PROGRAM.to_string(),
            default_product: DEFAULT_PRODUCT.to_string(),
            artifacts: ArtifactsConfig::default(),
        }
    }
}
