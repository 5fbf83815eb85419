//! Runs the external documentation tool and captures what it prints.
//!
//! Commands are built from discrete arguments and executed directly, never
//! through a shell, so package names cannot be interpreted as shell syntax.

use std::process::Command;

use tracing::info;

use crate::config::ToolConfig;
use crate::error::ToolError;

/// Logging switches for a command run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Log both captured streams after the command finishes.
    pub verbose: bool,
    /// Log the command line before it runs.
    pub debug: bool,
}

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output, byte for byte.
    pub stdout: Vec<u8>,
    /// Standard error, trimmed of surrounding whitespace.
    pub stderr: String,
    /// Exit code, or `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    /// Whether the process exited successfully.
    pub success: bool,
}

impl CommandOutput {
    /// A successful run that printed `stdout` and nothing on stderr.
    pub fn ok(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            code: Some(0),
            success: true,
        }
    }
}

/// Runs `command` to completion and captures its output.
///
/// A non-zero exit status is not an error here: the output is returned with
/// `success == false` and the caller decides what to do about it.
///
/// # Errors
///
/// Returns [`ToolError::Spawn`] if the process cannot be started.
pub fn run(command: &mut Command, opts: RunOptions) -> Result<CommandOutput, ToolError> {
    let program = command.get_program().to_string_lossy().into_owned();
    if opts.debug {
        info!(command = %command_line(command), "running");
    }

    let output = command
        .output()
        .map_err(|source| ToolError::Spawn { program, source })?;

    let captured = CommandOutput {
        stdout: output.stdout,
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        code: output.status.code(),
        success: output.status.success(),
    };

    if opts.verbose {
        info!(
            stdout = %String::from_utf8_lossy(&captured.stdout),
            stderr = %captured.stderr,
            "captured"
        );
    }
    Ok(captured)
}

/// Renders a command line for logs: program and arguments separated by spaces.
pub fn command_line(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Produces HTML documentation for a module path.
pub trait DocTool {
    /// Name used in error messages.
    fn program(&self) -> &str;

    /// Documents `module_path`, returning the captured tool output.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Spawn`] if the tool cannot be started.
    fn render(&self, module_path: &str) -> Result<CommandOutput, ToolError>;
}

/// A [`DocTool`] backed by an external program such as `godoc -html`.
#[derive(Debug, Clone)]
pub struct ExternalTool {
    program: String,
    args: Vec<String>,
    opts: RunOptions,
}

impl ExternalTool {
    /// Creates a tool from its configuration.
    pub fn new(config: &ToolConfig, opts: RunOptions) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            opts,
        }
    }

    /// The command that documents `module_path`.
    pub fn command(&self, module_path: &str) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).arg(module_path);
        command
    }
}

impl DocTool for ExternalTool {
    fn program(&self) -> &str {
        &self.program
    }

    fn render(&self, module_path: &str) -> Result<CommandOutput, ToolError> {
        run(&mut self.command(module_path), self.opts)
    }
}
