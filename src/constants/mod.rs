pub mod common;

pub use common::{
    CONFIG_ENV_VAR, CONFIG_FILE_NAME, DEFAULT_INSTANCE, DEFAULT_INVALID_EXTENSIONS,
    DEFAULT_INVALID_PREFIXES, DEFAULT_PRODUCT, OSC_PROGRAM, PROJECT_NAME, PROJECT_ORG,
    PROJECT_QUALIFIER,
};
