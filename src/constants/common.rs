// Common constants used throughout the codebase

/// Project name
pub const PROJECT_NAME: &str = "relx";

/// Project organization (reverse domain notation)
pub const PROJECT_QUALIFIER: &str = "org";
pub const PROJECT_ORG: &str = "relx";

/// Configuration file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "relx.kdl";

/// Environment variable overriding the configuration file path
pub const CONFIG_ENV_VAR: &str = "RELX_CONFIG";

/// Build service client invoked for every query
pub const OSC_PROGRAM: &str = "osc";

/// Build service API used when neither config nor flags name one
pub const DEFAULT_INSTANCE: &str = "https://api.opensuse.org";

/// Project scanned by `relx artifacts` without `--project`
pub const DEFAULT_PRODUCT: &str = "openSUSE:Factory";

/// Binary listing entries that are build bookkeeping, not artifacts
pub const DEFAULT_INVALID_PREFIXES: &[&str] = &["_", "rpmlint.log"];

/// Suffixes of files that are never shipped
pub const DEFAULT_INVALID_EXTENSIONS: &[&str] = &[".src.rpm", ".nosrc.rpm", ".log", ".sha256"];
