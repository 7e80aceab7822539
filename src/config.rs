//! Runtime configuration
//!
//! Resolution priority for each setting:
//! - Timesheet root: `--root` flag, then TIMESHEET_ROOT, then the current directory
//! - Editor: TIMESHEET_EDITOR, then EDITOR, then `vim`
//! - Picker: TIMESHEET_PICKER, then `fzf`

use std::path::PathBuf;

use crate::constants as C;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding projects.json and the date directories
    pub root: PathBuf,
    /// Editor command line, program first
    pub editor: Vec<String>,
    /// Picker command line, program first
    pub picker: Vec<String>,
}

impl Config {
    /// Build a config from the `--root` flag and the environment
    pub fn new(root: Option<&str>) -> Self {
        let root = root
            .map(PathBuf::from)
            .or_else(|| env_value(C::ENV_ROOT).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));

        let editor = env_value(C::ENV_EDITOR)
            .or_else(|| env_value("EDITOR"))
            .unwrap_or_else(|| C::DEFAULT_EDITOR.to_string());

        let picker = env_value(C::ENV_PICKER).unwrap_or_else(|| C::DEFAULT_PICKER.to_string());

        Self {
            root,
            editor: split_command(&editor, C::DEFAULT_EDITOR),
            picker: split_command(&picker, C::DEFAULT_PICKER),
        }
    }
}

// Treat empty strings as unset
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.trim().is_empty())
}

/// Split a command line on whitespace, falling back when it is blank
fn split_command(value: &str, fallback: &str) -> Vec<String> {
    let parts: Vec<String> = value.split_whitespace().map(str::to_string).collect();
    if parts.is_empty() {
        vec![fallback.to_string()]
    } else {
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("code --wait", "vim"), vec!["code", "--wait"]);
        assert_eq!(split_command("  ", "vim"), vec!["vim"]);
    }

    #[test]
    fn test_explicit_root_wins() {
        let config = Config::new(Some("/tmp/timesheets"));
        assert_eq!(config.root, PathBuf::from("/tmp/timesheets"));
        assert!(!config.editor.is_empty());
        assert!(!config.picker.is_empty());
    }
}
