//! Applying generated SQL with the external database CLI
//!
//! The apply step shells out to `wrangler d1 execute <db> --local|--remote
//! --file <sql>` and waits for it. The child inherits stderr, and stdout unless
//! the caller reserves stdout for machine-readable output, in which case the
//! child's stdout is sent to stderr. A non-zero exit is surfaced as
//! [`Error::ExternalCommandFailed`]; nothing is retried or rolled back and the
//! SQL file stays on disk.

use crate::app::models::Target;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// A fully specified invocation of the apply command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyCommand {
    program: String,
    prefix_args: Vec<String>,
    db_name: String,
    target: Target,
    sql_path: PathBuf,
    stdout_to_stderr: bool,
}

impl ApplyCommand {
    /// Build an invocation from a command prefix such as
    /// `["npx", "wrangler", "d1", "execute"]`
    pub fn new(
        command: &[String],
        db_name: impl Into<String>,
        target: Target,
        sql_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let (program, prefix_args) = command
            .split_first()
            .ok_or_else(|| Error::configuration("Apply command cannot be empty"))?;

        Ok(Self {
            program: program.clone(),
            prefix_args: prefix_args.to_vec(),
            db_name: db_name.into(),
            target,
            sql_path: sql_path.as_ref().to_path_buf(),
            stdout_to_stderr: false,
        })
    }

    /// Send the child's stdout to our stderr
    pub fn with_stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Arguments passed to the program, in order
    pub fn args(&self) -> Vec<String> {
        let mut args = self.prefix_args.clone();
        args.push(self.db_name.clone());
        args.push(self.target.flag().to_string());
        args.push("--file".to_string());
        args.push(self.sql_path.display().to_string());
        args
    }

    /// Shell-style rendering of the command line, for echoing and errors
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Build the process without running it
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.args());
        if self.stdout_to_stderr {
            command.stdout(Stdio::from(std::io::stderr()));
        }
        command
    }

    /// Run the command to completion
    ///
    /// Blocks until the child exits. No timeout is applied.
    pub fn run(&self) -> Result<()> {
        let command_line = self.command_line();
        info!("Running: {}", command_line);

        let status = self.to_command().status().map_err(|e| {
            Error::io(format!("Failed to start `{}`", self.program), e)
        })?;
        debug!("`{}` exited with {}", self.program, status);

        if status.success() {
            Ok(())
        } else {
            Err(Error::external_command_failed(command_line, status.code()))
        }
    }
}
