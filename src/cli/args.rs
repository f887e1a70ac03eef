use crate::utils::machine_output::OutputFormat;
use clap::{ArgGroup, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "relx",
    about = "Query Open Build Service instances for artifacts, groups and users",
    long_about = "Query Open Build Service instances for build artifacts, groups and users through the osc client",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// OBS API URL (overrides osc-instance from the config)
    #[arg(short = 'A', long = "osc-instance", value_name = "URL", global = true)]
    pub osc_instance: Option<String>,

    /// Configuration file (default: platform config dir, or $RELX_CONFIG)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Return the list of artifacts from an OBS project
    Artifacts {
        /// OBS project (default: default-product from the config)
        #[arg(short = 'p', long)]
        project: Option<String>,

        /// Output format
        #[arg(long, value_enum, ignore_case = true, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Search OBS for the given user or group
    #[command(group(
        ArgGroup::new("mode")
            .required(true)
            .args(["group", "login", "email", "name"])
    ))]
    Users {
        /// Search for a group
        #[arg(short = 'g', long)]
        group: bool,

        /// Search users by login
        #[arg(short = 'l', long)]
        login: bool,

        /// Search users by email
        #[arg(short = 'e', long)]
        email: bool,

        /// Search users by real name (substring)
        #[arg(short = 'n', long)]
        name: bool,

        /// Search text
        search_text: String,

        /// Output format
        #[arg(long, value_enum, ignore_case = true, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
