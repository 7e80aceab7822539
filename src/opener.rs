//! Open a path with the platform's default application

use std::path::Path;
use std::process::Command;

use log::warn;

use crate::error::{Error, Result};

/// Build the opener command for an OS identifier (as in `std::env::consts::OS`)
pub fn opener_command(os: &str, path: &Path) -> Result<Command> {
    let command = match os {
        "macos" => {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            cmd
        }
        "linux" => {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            cmd
        }
        "windows" => {
            // `start` is a cmd builtin; the empty string is the window title
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(path);
            cmd
        }
        other => return Err(Error::UnsupportedPlatform(other.to_string())),
    };
    Ok(command)
}

/// Launch the default handler for `path` and wait for the launcher to exit
pub fn open_path(path: &Path) -> Result<()> {
    let mut command = opener_command(std::env::consts::OS, path)?;
    let program = command.get_program().to_string_lossy().to_string();
    let status = command
        .status()
        .map_err(|source| Error::Launch { program: program.clone(), source })?;
    if !status.success() {
        warn!("{} exited with {}", program, status);
    }
    Ok(())
}
