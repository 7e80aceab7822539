//! Constants for timesheet
//!
//! File names, format strings and user-facing messages shared across the
//! stores, the workflow and the command modules.

// === File and Directory Names ===

/// Project registry file at the timesheet root
pub const PROJECTS_FILENAME: &str = "projects.json";

/// Day record file inside each date directory
pub const TIMESHEET_FILENAME: &str = "timesheet.json";

/// Suffix of a project entry's notes file: <Name>-notes.txt
pub const NOTES_SUFFIX: &str = "-notes.txt";

/// Suffix of a project entry's media directory: <Name>-media
pub const MEDIA_SUFFIX: &str = "-media";

// === Date Formats ===

/// Date directory format: YYYY-MM-DD
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Human-readable date label for the picker: DD MonthName YYYY
pub const DATE_LABEL_FORMAT: &str = "%d %B %Y";

// === Environment Variables ===

pub const ENV_ROOT: &str = "TIMESHEET_ROOT";
pub const ENV_EDITOR: &str = "TIMESHEET_EDITOR";
pub const ENV_PICKER: &str = "TIMESHEET_PICKER";
pub const ENV_TODAY: &str = "TIMESHEET_TODAY";
pub const ENV_LOG: &str = "TIMESHEET_LOG";

/// Editor used when neither TIMESHEET_EDITOR nor EDITOR is set
pub const DEFAULT_EDITOR: &str = "vim";

/// Picker used when TIMESHEET_PICKER is not set
pub const DEFAULT_PICKER: &str = "fzf";

// === Picker Choices ===

/// Date choices offered by `create`
pub const DATE_CHOICE_TODAY: &str = "today";
pub const DATE_CHOICE_YESTERDAY: &str = "yesterday";
pub const DATE_CHOICE_EARLIER: &str = "earlier";

/// Sentinel appended to the entry list by `edit`
pub const NEW_ENTRY_CHOICE: &str = "New Project Entry";

/// Sub-actions offered for an existing entry by `edit`
pub const EDIT_ACTIONS: [&str; 4] = ["hours", "notes", "media", "delete"];

// === Notes ===

/// First line written to every new notes file
pub const NOTES_HEADER_PREFIX: &str = "Notes for project: ";

// === Display Markers ===

pub const NOTES_NOT_FOUND: &str = "[File not found]";
pub const MEDIA_NOT_FOUND: &str = "[Media not found]";
