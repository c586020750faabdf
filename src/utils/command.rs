//! Command execution utilities

use crate::error::{FlagfetchError, Result};
use std::process::Command;

/// Run a command and return its trimmed stdout.
pub fn run_command(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program).args(args).output()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(FlagfetchError::Detection(format!(
            "command '{}' exited with {:?}",
            program,
            output.status.code()
        )))
    }
}
