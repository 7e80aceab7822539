//! Day record and project entry, as persisted in `<date>/timesheet.json`

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One project's contribution within a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    /// Project name, drawn from the registry
    pub name: String,
    /// Notes file, relative to the timesheet root
    pub notes: PathBuf,
    /// Media directory, relative to the timesheet root; `None` until the user opts in
    pub media: Option<PathBuf>,
    pub hours: f64,
}

/// The complete record of one date's worked hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: String,
    /// Confirmed total for the day, never below the entries' sum when confirmed
    pub hours: f64,
    pub projects: Vec<ProjectEntry>,
}

impl DayRecord {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            hours: 0.0,
            projects: Vec::new(),
        }
    }

    /// Sum of all entries' hours
    pub fn entry_hours(&self) -> f64 {
        self.projects.iter().map(|p| p.hours).sum()
    }

    /// Names of the projects already entered, in entry order
    pub fn entry_names(&self) -> Vec<String> {
        self.projects.iter().map(|p| p.name.clone()).collect()
    }

    pub fn entry(&self, name: &str) -> Option<&ProjectEntry> {
        self.projects.iter().find(|p| p.name == name)
    }

    pub fn entry_mut(&mut self, name: &str) -> Option<&mut ProjectEntry> {
        self.projects.iter_mut().find(|p| p.name == name)
    }

    /// Remove and return the entry with this name
    pub fn remove_entry(&mut self, name: &str) -> Option<ProjectEntry> {
        let index = self.projects.iter().position(|p| p.name == name)?;
        Some(self.projects.remove(index))
    }
}

/// Registry names not yet used by `record`, in registry order
pub fn available_projects(registry: &[String], record: &DayRecord) -> Vec<String> {
    registry
        .iter()
        .filter(|name| record.entry(name).is_none())
        .cloned()
        .collect()
}
