use clap::{Parser, Subcommand};

/// timesheet - A personal time-tracking CLI
///
/// Each day lives in its own `YYYY-MM-DD/` directory under the timesheet
/// root, holding `timesheet.json`, one notes file per project and optional
/// media folders. Known projects are listed in `projects.json`.
///
/// ```bash
/// timesheet add-project "Alpha"     # Register a project
/// timesheet list-projects           # Show registered projects
/// timesheet create                  # Record a new day interactively
/// timesheet show 2024-03-05         # Print a day (omit the date to pick one)
/// timesheet edit                    # Amend a day: hours, notes, media, delete
/// timesheet open                    # Open a day's directory
/// ```
///
/// ## Environment Variables
///
/// - `TIMESHEET_ROOT`: timesheet root (default: current directory)
/// - `TIMESHEET_EDITOR` / `EDITOR`: notes editor (default: vim)
/// - `TIMESHEET_PICKER`: selection program (default: fzf)
/// - `TIMESHEET_LOG`: log filter (default: warn)
#[derive(Parser, Debug)]
#[command(name = "timesheet")]
#[command(version = "0.1.0")]
#[command(about = "A personal time-tracking CLI")]
pub struct Cli {
    /// Timesheet root directory (default: $TIMESHEET_ROOT or the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a project name
    AddProject {
        name: String,
    },

    /// Remove a project name from the registry
    DeleteProject {
        name: String,
    },

    /// List registered projects
    #[command(alias = "ls")]
    ListProjects,

    /// Create the timesheet for today, yesterday or an earlier date
    Create,

    /// Print a day's timesheet
    Show {
        /// Date directory (YYYY-MM-DD); picked interactively when omitted
        date: Option<String>,
    },

    /// Edit a day's timesheet
    Edit {
        /// Date directory (YYYY-MM-DD); picked interactively when omitted
        date: Option<String>,
    },

    /// Open a day's directory with the default application
    Open {
        /// Date directory (YYYY-MM-DD); picked interactively when omitted
        date: Option<String>,
    },
}
