use crate::error::{RelxError, Result};
use crate::providers::traits::DataProvider;
use crate::providers::types::ExclusionRules;
use crate::providers::DataSourcer;
use regex::Regex;
use serde::Serialize;

/// A build repository plus the package-name pattern that selects its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoInfo {
    pub name: String,
    pub pattern: String,
}

impl RepoInfo {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    pub fn selector(&self) -> Result<PackageSelector> {
        PackageSelector::new(&self.pattern)
    }
}

/// A compiled package-name pattern. A package is selected when its name
/// contains a match anywhere, not only at the start.
#[derive(Debug, Clone)]
pub struct PackageSelector {
    regex: Regex,
}

impl PackageSelector {
    pub fn new(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(|regex| Self { regex })
            .map_err(|e| RelxError::InvalidRegex(format!("/{}/: {}", pattern, e)))
    }

    pub fn matches(&self, package: &str) -> bool {
        self.regex.is_match(package)
    }

    pub fn select<'p>(&self, packages: &'p [String]) -> Vec<&'p str> {
        packages
            .iter()
            .map(String::as_str)
            .filter(|name| self.matches(name))
            .collect()
    }
}

/// Packages whose name contains a match for `pattern`, in input order.
pub fn select_packages<'p>(packages: &'p [String], pattern: &str) -> Result<Vec<&'p str>> {
    Ok(PackageSelector::new(pattern)?.select(packages))
}

/// Inputs of one artifact scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanQuery<'a> {
    pub instance: &'a str,
    pub project: &'a str,
    pub packages: &'a [String],
    pub repos: &'a [RepoInfo],
    pub rules: &'a ExclusionRules,
}

impl ScanQuery<'_> {
    /// One step per package per repository, matching or not.
    pub fn total_steps(&self) -> usize {
        self.repos.len() * self.packages.len()
    }
}

/// Produced as the scan advances; nothing is buffered between events.
#[derive(Debug)]
pub enum ScanEvent<'a> {
    /// A repository is about to be walked; `selected` of its packages match.
    Repository {
        repo: &'a RepoInfo,
        selected: usize,
    },
    Artifacts {
        repo: &'a RepoInfo,
        package: &'a str,
        artifacts: Vec<String>,
    },
    Failed {
        repo: &'a RepoInfo,
        package: &'a str,
        error: RelxError,
    },
    Step,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub steps: usize,
    pub queried: usize,
    pub artifacts: usize,
    pub failures: usize,
}

/// Walk `repos × matching packages`, handing each filtered listing to `sink`
/// as soon as it is fetched.
///
/// A failed lookup is reported as `ScanEvent::Failed` and the walk goes on.
/// Only an invalid repository pattern aborts, before any query is made.
pub fn scan_artifacts<'a, P, F>(
    sourcer: &DataSourcer<P>,
    query: &ScanQuery<'a>,
    mut sink: F,
) -> Result<ScanSummary>
where
    P: DataProvider,
    F: FnMut(ScanEvent<'a>),
{
    let selectors = query
        .repos
        .iter()
        .map(|repo| {
            repo.selector().map_err(|e| match e {
                RelxError::InvalidRegex(msg) => {
                    RelxError::InvalidRegex(format!("repository '{}' {}", repo.name, msg))
                }
                other => other,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut summary = ScanSummary::default();

    for (repo, selector) in query.repos.iter().zip(&selectors) {
        sink(ScanEvent::Repository {
            repo,
            selected: selector.select(query.packages).len(),
        });

        for package in query.packages.iter().map(String::as_str) {
            if selector.matches(package) {
                summary.queried += 1;
                match sourcer.list_artifacts(
                    query.instance,
                    query.project,
                    package,
                    &repo.name,
                    query.rules,
                ) {
                    Ok(artifacts) => {
                        summary.artifacts += artifacts.len();
                        sink(ScanEvent::Artifacts {
                            repo,
                            package,
                            artifacts,
                        });
                    }
                    Err(error) => {
                        summary.failures += 1;
                        sink(ScanEvent::Failed {
                            repo,
                            package,
                            error,
                        });
                    }
                }
            }
            summary.steps += 1;
            sink(ScanEvent::Step);
        }
    }

    Ok(summary)
}
