//! Timesheet root - on-disk layout and whole-file JSON persistence
//!
//! ```text
//! <root>/projects.json
//! <root>/<YYYY-MM-DD>/timesheet.json
//! <root>/<YYYY-MM-DD>/<Name>-notes.txt
//! <root>/<YYYY-MM-DD>/<Name>-media/
//! ```
//!
//! Every write replaces the whole file: the JSON is written to a temp file in
//! the same directory and renamed over the target.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::constants as C;
use crate::error::{Error, Result};
use crate::model::DayRecord;
use crate::util;

/// A working directory holding the registry and the date directories
#[derive(Debug, Clone)]
pub struct TimesheetRoot {
    path: PathBuf,
}

impl TimesheetRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn projects_file(&self) -> PathBuf {
        self.path.join(C::PROJECTS_FILENAME)
    }

    pub fn day_dir(&self, date: &str) -> PathBuf {
        self.path.join(date)
    }

    pub fn record_file(&self, date: &str) -> PathBuf {
        self.day_dir(date).join(C::TIMESHEET_FILENAME)
    }

    /// Directory presence is the existence check for a day
    pub fn day_exists(&self, date: &str) -> bool {
        self.day_dir(date).exists()
    }

    /// Notes path for a project on a date, relative to the root
    pub fn notes_path(date: &str, project: &str) -> PathBuf {
        Path::new(date).join(format!("{}{}", util::project_file_stem(project), C::NOTES_SUFFIX))
    }

    /// Media path for a project on a date, relative to the root
    pub fn media_path(date: &str, project: &str) -> PathBuf {
        Path::new(date).join(format!("{}{}", util::project_file_stem(project), C::MEDIA_SUFFIX))
    }

    /// Resolve a stored path against the root (absolute paths pass through)
    pub fn resolve(&self, stored: &Path) -> PathBuf {
        self.path.join(stored)
    }

    /// Load a day record; `None` when its timesheet file is missing
    pub fn load_record(&self, date: &str) -> Result<Option<DayRecord>> {
        let file = self.record_file(date);
        if !file.exists() {
            return Ok(None);
        }
        read_json(&file).map(Some)
    }

    pub fn save_record(&self, record: &DayRecord) -> Result<()> {
        fs::create_dir_all(self.day_dir(&record.date))?;
        write_json(&self.record_file(&record.date), record)
    }

    /// Date directories under the root, sorted chronologically
    pub fn list_dates(&self) -> Result<Vec<String>> {
        let mut dates = Vec::new();
        if !self.path.exists() {
            return Ok(dates);
        }
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if util::is_valid_date_dir(name) {
                    dates.push(name.to_string());
                }
            }
        }
        dates.sort();
        Ok(dates)
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("reading {}", path.display());
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    debug!("writing {}", path.display());
    let json_error = |source| Error::Json {
        path: path.to_path_buf(),
        source,
    };

    // Temp file in the target's directory, removed on drop unless persisted
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, value).map_err(json_error)?;
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(io::Error::from)?;
    Ok(())
}
