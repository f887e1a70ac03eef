use crate::error::{RelxError, Result};
use crate::ui;
use std::process::{Command, Stdio};

/// Captured output of a finished external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs pre-tokenized command lines.
///
/// Providers depend on this seam rather than on `std::process` so they can be
/// exercised with canned output.
pub trait CommandRunner {
    fn run(&self, argv: &[String]) -> Result<CommandOutput>;
}

/// Spawns real processes, one at a time, blocking until they exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> Result<CommandOutput> {
        run_command(argv)
    }
}

/// Render an argument vector the way a shell user would type it.
pub fn display_command(argv: &[String]) -> String {
    shlex::try_join(argv.iter().map(String::as_str)).unwrap_or_else(|_| argv.join(" "))
}

/// Execute `argv[0]` with the remaining tokens as arguments.
///
/// No shell is involved, so project, package and group names are passed
/// through verbatim.
pub fn run_command(argv: &[String]) -> Result<CommandOutput> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| RelxError::InvalidQuery("empty command line".to_string()))?;
    let command = display_command(argv);
    ui::debug(&format!("running: {}", command));

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| RelxError::SystemCommandFailed {
            command: command.clone(),
            reason: e.to_string(),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(RelxError::ExternalCommand {
            command,
            exit_code: output.status.code(),
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(CommandOutput { stdout, stderr })
}
