//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::config::{self, RelxConfig};
use crate::error::{RelxError, Result};
use crate::providers::{DataSourcer, OscProvider};
use crate::ui;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    match &args.command {
        Command::Completions { shell } => commands::completions::run(*shell),

        Command::Artifacts { project, format } => {
            let config = config::load(args.global.config.as_deref())?;
            let sourcer = build_sourcer(&config)?;
            commands::artifacts::run(
                &sourcer,
                &config,
                commands::artifacts::ArtifactsOptions {
                    instance: instance(args, &config),
                    project: project
                        .clone()
                        .unwrap_or_else(|| config.default_product.clone()),
                    format: *format,
                },
            )
        }

        Command::Users {
            group,
            login,
            email,
            name,
            search_text,
            format,
        } => {
            let lookup = commands::users::Lookup::from_flags(*group, *login, *email, *name)?;
            let config = config::load(args.global.config.as_deref())?;
            let sourcer = build_sourcer(&config)?;
            commands::users::run(
                &sourcer,
                commands::users::UsersOptions {
                    instance: instance(args, &config),
                    lookup,
                    search_text: search_text.clone(),
                    format: *format,
                },
            )
        }
    }
}

fn instance(args: &Cli, config: &RelxConfig) -> String {
    args.global
        .osc_instance
        .clone()
        .unwrap_or_else(|| config.osc_instance.clone())
}

/// Build the `osc`-backed sourcer, checking first that the client exists.
fn build_sourcer(config: &RelxConfig) -> Result<DataSourcer> {
    let program = &config.osc_command;
    let resolved = which::which(program).map_err(|_| {
        RelxError::DependencyMissing(format!(
            "'{}' not found. Install osc or set osc-command in relx.kdl",
            program
        ))
    })?;
    ui::debug(&format!("using {}", resolved.display()));

    Ok(DataSourcer::new(
        OscProvider::new().with_program(program.clone()),
    ))
}
