use crate::artifacts::{ScanEvent, ScanQuery, ScanSummary, scan_artifacts};
use crate::config::RelxConfig;
use crate::error::Result;
use crate::providers::{DataProvider, DataSourcer};
use crate::ui::{self, progress::ProgressBar};
use crate::utils::machine_output::{self, OutputFormat};
use crate::utils::sanitize;
use serde::Serialize;

/// Options for the artifacts command
pub struct ArtifactsOptions {
    pub instance: String,
    pub project: String,
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct ArtifactListing {
    repository: String,
    package: String,
    artifacts: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ArtifactsReport {
    project: String,
    listings: Vec<ArtifactListing>,
    summary: ScanSummary,
}

pub fn run<P: DataProvider>(
    sourcer: &DataSourcer<P>,
    config: &RelxConfig,
    options: ArtifactsOptions,
) -> Result<()> {
    sanitize::validate_project_name(&options.project)?;

    let repos = config.artifacts.repos.as_slice();
    if repos.is_empty() {
        ui::warning("No repositories configured; add `repo` entries under `artifacts` in relx.kdl");
    }

    let packages = sourcer.list_packages(&options.instance, &options.project)?;
    ui::debug(&format!(
        "{} packages in {}",
        packages.len(),
        options.project
    ));

    let query = ScanQuery {
        instance: &options.instance,
        project: &options.project,
        packages: &packages,
        repos,
        rules: &config.artifacts.rules,
    };

    let machine = options.format.is_machine();
    let mut progress = if machine || ui::is_quiet() {
        ProgressBar::hidden(query.total_steps())
    } else {
        ProgressBar::new(query.total_steps(), "Searching artifacts")
    };

    let mut listings = Vec::new();
    let mut errors = Vec::new();

    let summary = scan_artifacts(sourcer, &query, |event| match event {
        ScanEvent::Repository { repo, selected } => {
            if ui::is_verbose() {
                let msg = format!(
                    "repository '{}': {} of {} packages match /{}/",
                    repo.name,
                    selected,
                    packages.len(),
                    repo.pattern
                );
                progress.suspend(|| ui::debug(&msg));
            }
        }
        ScanEvent::Artifacts {
            repo,
            package,
            artifacts,
        } => {
            if machine {
                listings.push(ArtifactListing {
                    repository: repo.name.clone(),
                    package: package.to_string(),
                    artifacts,
                });
            } else {
                for artifact in &artifacts {
                    progress.println(artifact);
                }
            }
        }
        ScanEvent::Failed {
            repo,
            package,
            error,
        } => {
            let msg = format!("{} ({}): {}", package, repo.name, error);
            progress.suspend(|| ui::error(&msg));
            errors.push(msg);
        }
        ScanEvent::Step => progress.inc(),
    })?;
    progress.finish();

    ui::debug(&format!(
        "queried {} package/repository pairs, {} artifacts, {} failures",
        summary.queried, summary.artifacts, summary.failures
    ));

    if machine {
        let report = ArtifactsReport {
            project: options.project,
            listings,
            summary,
        };
        machine_output::emit_v1("artifacts", report, Vec::new(), errors, options.format)?;
    }

    Ok(())
}
