use crate::artifacts::RepoInfo;
use crate::config::types::{ArtifactsConfig, RelxConfig};
use crate::error::{RelxError, Result};
use crate::ui;
use crate::utils::paths;
use kdl::{KdlDocument, KdlNode};
use std::fs;
use std::path::Path;

/// Locate and load the configuration.
///
/// A missing default file yields built-in defaults; a missing file that was
/// named explicitly (flag or environment) is an error.
pub fn load(explicit: Option<&Path>) -> Result<RelxConfig> {
    let (path, required) = paths::resolve_config_file(explicit)?;

    if !path.exists() {
        if required {
            return Err(RelxError::ConfigNotFound { path });
        }
        ui::debug(&format!(
            "no config at {}, using defaults",
            path.display()
        ));
        return Ok(RelxConfig::default());
    }

    ui::debug(&format!("loading config from {}", path.display()));
    load_file(&path)
}

pub fn load_file(path: &Path) -> Result<RelxConfig> {
    let content = fs::read_to_string(path).map_err(|source| RelxError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<RelxConfig> {
    let doc: KdlDocument = content.parse().map_err(|e: kdl::KdlError| {
        let err_msg = e.to_string();
        let hint = if err_msg.contains("unexpected end of file") {
            "\nHint: You might be missing a closing brace '}'."
        } else {
            ""
        };
        RelxError::ConfigError(format!("KDL parsing error: {}{}", err_msg, hint))
    })?;

    let mut config = RelxConfig::default();

    for node in doc.nodes() {
        match node.name().value() {
            "osc-instance" => config.osc_instance = single_string(node)?,
            "osc-command" => config.osc_command = single_string(node)?,
            "default-product" => config.default_product = single_string(node)?,
            "artifacts" => config.artifacts = parse_artifacts(node)?,
            other => {
                return Err(RelxError::ConfigError(format!(
                    "Unknown setting '{}'. Valid settings: osc-instance, osc-command, default-product, artifacts",
                    other
                )));
            }
        }
    }

    Ok(config)
}

/// `artifacts { invalid-start ...; invalid-extensions ...; repo "name" pattern="..." }`
///
/// Rule lists given here replace the defaults rather than extending them.
fn parse_artifacts(node: &KdlNode) -> Result<ArtifactsConfig> {
    let mut artifacts = ArtifactsConfig::default();

    let Some(children) = node.children() else {
        return Ok(artifacts);
    };

    for child in children.nodes() {
        match child.name().value() {
            "invalid-start" => artifacts.rules.invalid_prefixes = string_list(child),
            "invalid-extensions" => artifacts.rules.invalid_extensions = string_list(child),
            "repo" => artifacts.repos.push(parse_repo(child)?),
            other => {
                return Err(RelxError::ConfigError(format!(
                    "Unknown artifacts setting '{}'. Valid settings: invalid-start, invalid-extensions, repo",
                    other
                )));
            }
        }
    }

    Ok(artifacts)
}

fn parse_repo(node: &KdlNode) -> Result<RepoInfo> {
    let mut name = None;
    let mut pattern = None;

    for entry in node.entries() {
        let Some(value) = entry.value().as_string() else {
            continue;
        };
        match entry.name().map(|n| n.value()) {
            None => name = Some(value.to_string()),
            Some("name") => name = Some(value.to_string()),
            Some("pattern") => pattern = Some(value.to_string()),
            Some(_) => {}
        }
    }

    let name = name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| RelxError::ConfigError("repo entry requires a name".to_string()))?;
    let pattern = pattern.ok_or_else(|| {
        RelxError::ConfigError(format!("repo '{}' requires pattern=\"...\"", name))
    })?;

    Ok(RepoInfo { name, pattern })
}

/// String arguments of a node plus the names of its children.
fn string_list(node: &KdlNode) -> Vec<String> {
    let mut values: Vec<String> = node
        .entries()
        .iter()
        .filter(|e| e.name().is_none())
        .filter_map(|e| e.value().as_string())
        .map(str::to_string)
        .collect();

    if let Some(children) = node.children() {
        for child in children.nodes() {
            values.push(child.name().value().to_string());
        }
    }

    values
}

fn single_string(node: &KdlNode) -> Result<String> {
    node.entries()
        .first()
        .and_then(|e| e.value().as_string())
        .map(str::to_string)
        .ok_or_else(|| {
            RelxError::ConfigError(format!(
                "'{}' requires a string value",
                node.name().value()
            ))
        })
}
