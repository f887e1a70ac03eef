pub mod artifacts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod providers;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Run relx CLI entrypoint.
pub fn run_cli() {
    let args = cli::args::Cli::parse();
    ui::init_colors(args.global.no_color);
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
