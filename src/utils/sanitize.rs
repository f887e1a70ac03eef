//! Input validation for names that end up inside OBS API paths.
//!
//! Commands are spawned without a shell, but group names and search text are
//! still spliced into `/group/<name>` and `/search/person?match=...`, where a
//! stray `/`, `"` or `&` would change which resource is requested.

use crate::error::{RelxError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// OBS project names: `openSUSE:Factory`, `home:user:branches:devel:tools`
static PROJECT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9:._+-]*$").expect("Invalid regex pattern"));

/// OBS group titles
static GROUP_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9._+-]*$").expect("Invalid regex pattern"));

/// Characters that would escape the quoted search predicate or the query string
static SEARCH_DANGEROUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["&#\\\p{Cc}]"#).expect("Invalid regex pattern"));

const MAX_LEN: usize = 256;

fn check_length(kind: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RelxError::InvalidQuery(format!("{} cannot be empty", kind)));
    }
    if value.len() > MAX_LEN {
        return Err(RelxError::InvalidQuery(format!(
            "{} too long (max {} chars)",
            kind, MAX_LEN
        )));
    }
    Ok(())
}

pub fn validate_project_name(name: &str) -> Result<()> {
    check_length("Project name", name)?;
    if !PROJECT_NAME.is_match(name) {
        return Err(RelxError::InvalidQuery(format!(
            "Project name contains invalid characters: {}",
            name
        )));
    }
    Ok(())
}

pub fn validate_group_name(name: &str) -> Result<()> {
    check_length("Group name", name)?;
    if !GROUP_NAME.is_match(name) || name.contains("..") {
        return Err(RelxError::InvalidQuery(format!(
            "Group name contains invalid characters: {}",
            name
        )));
    }
    Ok(())
}

pub fn validate_search_text(text: &str) -> Result<()> {
    check_length("Search text", text)?;
    if SEARCH_DANGEROUS.is_match(text) {
        return Err(RelxError::InvalidQuery(format!(
            "Search text contains unsafe characters: {}",
            text
        )));
    }
    Ok(())
}
