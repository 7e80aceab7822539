//! Small helpers for date directories, file naming and path display

use std::path::Path;

use chrono::{Duration, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants as C;

static DATE_DIR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"));

/// Check whether a name matches the date directory pattern (YYYY-MM-DD).
/// Only the shape is checked, not calendar validity.
pub fn is_valid_date_dir(name: &str) -> bool {
    DATE_DIR_RE.is_match(name)
}

/// Convert a date directory name to its picker label ("05 March 2024").
/// Names that match the pattern but are not real dates keep their raw form.
pub fn date_label(date_dir: &str) -> String {
    NaiveDate::parse_from_str(date_dir, C::DATE_FORMAT)
        .map(|d| d.format(C::DATE_LABEL_FORMAT).to_string())
        .unwrap_or_else(|_| date_dir.to_string())
}

/// Format a date as a directory name
pub fn date_dir_name(date: NaiveDate) -> String {
    date.format(C::DATE_FORMAT).to_string()
}

/// Today's local date, overridable via TIMESHEET_TODAY=YYYY-MM-DD for testing
pub fn today() -> NaiveDate {
    if let Ok(value) = std::env::var(C::ENV_TODAY) {
        if let Ok(date) = NaiveDate::parse_from_str(value.trim(), C::DATE_FORMAT) {
            return date;
        }
    }
    Local::now().date_naive()
}

/// The day before `date`
pub fn yesterday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(1)
}

/// File stem used for a project's notes and media: spaces become underscores
pub fn project_file_stem(project: &str) -> String {
    project.replace(' ', "_")
}

/// Display a path with forward slashes (cross-platform standard)
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Display a path canonicalized when it exists, without Windows UNC prefixes
pub fn display_real_path(path: &Path) -> String {
    let real = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    display_path(&real)
}

/// Render an hours value the way it is typed: 2.5, 3, 0.25
pub fn format_hours(hours: f64) -> String {
    format!("{}", hours)
}
