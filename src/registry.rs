//! Project registry - the shared list of known project names (`projects.json`)

use log::{debug, info};

use crate::error::{Error, Result};
use crate::store::{read_json, write_json, TimesheetRoot};

/// Outcome of `add`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

/// Outcome of `remove`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotPresent,
}

/// Registry operations over a timesheet root. Each call reads and rewrites
/// the whole file.
pub struct ProjectRegistry<'a> {
    root: &'a TimesheetRoot,
}

impl<'a> ProjectRegistry<'a> {
    pub fn new(root: &'a TimesheetRoot) -> Self {
        Self { root }
    }

    /// All registered names, in insertion order.
    /// Fails with `RegistryNotFound` when the store has never been created.
    pub fn list(&self) -> Result<Vec<String>> {
        let path = self.root.projects_file();
        if !path.exists() {
            return Err(Error::RegistryNotFound);
        }
        read_json(&path)
    }

    /// Append a name, creating the store on first use
    pub fn add(&self, name: &str) -> Result<AddOutcome> {
        let mut projects = match self.list() {
            Ok(projects) => projects,
            Err(Error::RegistryNotFound) => Vec::new(),
            Err(e) => return Err(e),
        };
        if projects.iter().any(|p| p == name) {
            debug!("project {} already registered", name);
            return Ok(AddOutcome::AlreadyExists);
        }
        projects.push(name.to_string());
        write_json(&self.root.projects_file(), &projects)?;
        Ok(AddOutcome::Added)
    }

    pub fn remove(&self, name: &str) -> Result<RemoveOutcome> {
        let mut projects = self.list()?;
        let Some(index) = projects.iter().position(|p| p == name) else {
            return Ok(RemoveOutcome::NotPresent);
        };
        projects.remove(index);
        write_json(&self.root.projects_file(), &projects)?;
        info!("removed project {} from registry", name);
        Ok(RemoveOutcome::Removed)
    }
}
