//! Timesheet workflow - creating, editing and displaying day records
//!
//! Every operation re-reads its stores from disk, mutates the record in
//! memory and writes it back whole. All user interaction goes through
//! [`Interaction`], so declining a picker is an ordinary `None`.

use std::fs;
use std::io::{self, Write};
use std::str::FromStr;

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::constants as C;
use crate::error::{Error, Result};
use crate::model::{available_projects, DayRecord, ProjectEntry};
use crate::prompt::{confirm, confirm_total, prompt_hours, wait_for_enter, Interaction};
use crate::registry::ProjectRegistry;
use crate::store::TimesheetRoot;
use crate::util;

// === Project Entry Capture ===

/// Capture hours, notes and optional media for `project` on `date`.
/// The date directory must already exist.
pub fn capture_entry<I: Interaction + ?Sized>(
    root: &TimesheetRoot,
    io: &mut I,
    date: &str,
    project: &str,
) -> Result<ProjectEntry> {
    let hours = prompt_hours(io, &format!("🕒 How many hours did you spend on {}? ", project))?;

    let notes = TimesheetRoot::notes_path(date, project);
    let notes_file = root.resolve(&notes);
    fs::write(&notes_file, format!("{}{}\n", C::NOTES_HEADER_PREFIX, project))?;
    io.edit(&notes_file)?;

    let media = if confirm(io, "Do you have any additional media to attach? (y/n): ")? {
        let media = TimesheetRoot::media_path(date, project);
        let media_dir = root.resolve(&media);
        fs::create_dir_all(&media_dir)?;
        wait_for_enter(
            io,
            &format!(
                "🎥 Press Enter once you have copied all the media you want to attach to {}",
                util::display_real_path(&media_dir)
            ),
        )?;
        Some(media)
    } else {
        None
    };

    Ok(ProjectEntry {
        name: project.to_string(),
        notes,
        media,
        hours,
    })
}

// === Creation ===

/// Offer today, yesterday or a typed date. A typed date that does not match
/// YYYY-MM-DD fails the whole operation.
pub fn choose_new_date<I: Interaction + ?Sized>(io: &mut I, today: NaiveDate) -> Result<Option<String>> {
    let options = vec![
        C::DATE_CHOICE_TODAY.to_string(),
        C::DATE_CHOICE_YESTERDAY.to_string(),
        C::DATE_CHOICE_EARLIER.to_string(),
    ];

    let date = match io.select("Date", &options)?.as_deref() {
        Some(C::DATE_CHOICE_TODAY) => util::date_dir_name(today),
        Some(C::DATE_CHOICE_YESTERDAY) => util::date_dir_name(util::yesterday(today)),
        Some(C::DATE_CHOICE_EARLIER) => {
            let typed = io.input("Enter a date (YYYY-MM-DD): ")?;
            let typed = typed.trim();
            if !util::is_valid_date_dir(typed) {
                return Err(Error::InvalidDate(typed.to_string()));
            }
            typed.to_string()
        }
        _ => return Ok(None),
    };
    Ok(Some(date))
}

/// Create a new day record interactively.
///
/// Returns `None` when the user declines the date, or declines the first
/// project. The date directory is removed again unless the record is saved.
pub fn create_day<I: Interaction + ?Sized>(
    root: &TimesheetRoot,
    io: &mut I,
    today: NaiveDate,
) -> Result<Option<DayRecord>> {
    let Some(date) = choose_new_date(io, today)? else {
        println!("No date selected.");
        return Ok(None);
    };

    if root.day_exists(&date) {
        return Err(Error::DayExists(date));
    }
    let registry = ProjectRegistry::new(root).list()?;
    let day_dir = root.day_dir(&date);
    fs::create_dir_all(&day_dir)?;

    // A date directory without a saved record must not outlive the create
    match fill_new_day(root, io, &registry, &date) {
        Ok(Some(record)) => {
            info!("created timesheet for {}", date);
            Ok(Some(record))
        }
        Ok(None) => {
            fs::remove_dir_all(&day_dir)?;
            println!("No projects entered; timesheet for {} not created.", date);
            Ok(None)
        }
        Err(e) => {
            if let Err(cleanup) = fs::remove_dir_all(&day_dir) {
                warn!("could not remove {}: {}", day_dir.display(), cleanup);
            }
            Err(e)
        }
    }
}

/// Entry loop, total confirmation and save for a freshly created date directory.
/// `None` when no project was entered.
fn fill_new_day<I: Interaction + ?Sized>(
    root: &TimesheetRoot,
    io: &mut I,
    registry: &[String],
    date: &str,
) -> Result<Option<DayRecord>> {
    let mut record = DayRecord::new(date);
    loop {
        let candidates = available_projects(registry, &record);
        if candidates.is_empty() {
            println!("Every registered project has an entry for {}.", date);
            break;
        }
        let Some(project) = io.select("Project", &candidates)? else {
            println!("No project selected.");
            break;
        };

        let entry = capture_entry(root, io, date, &project)?;
        record.projects.push(entry);

        if !confirm(io, "❔ Did you work on more projects today? (y/n): ")? {
            break;
        }
    }

    if record.projects.is_empty() {
        return Ok(None);
    }

    let floor = record.entry_hours();
    record.hours = confirm_total(
        io,
        &format!(
            "⌛ Please confirm the total number of hours worked today (>= {}): ",
            util::format_hours(floor)
        ),
        floor,
    )?;

    root.save_record(&record)?;
    Ok(Some(record))
}

// === Editing ===

/// What can be done to an existing entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Hours,
    Notes,
    Media,
    Delete,
}

impl FromStr for EditAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "hours" => Ok(EditAction::Hours),
            "notes" => Ok(EditAction::Notes),
            "media" => Ok(EditAction::Media),
            "delete" => Ok(EditAction::Delete),
            other => Err(format!("Unknown edit action: {}", other)),
        }
    }
}

/// Edit a day record until the user declines a selection.
/// Returns `false` when the date has no timesheet.
pub fn edit_day<I: Interaction + ?Sized>(root: &TimesheetRoot, io: &mut I, date: &str) -> Result<bool> {
    let Some(mut record) = root.load_record(date)? else {
        println!("No timesheet found in the directory {}", date);
        return Ok(false);
    };

    loop {
        let mut choices = record.entry_names();
        choices.push(C::NEW_ENTRY_CHOICE.to_string());

        let Some(selected) = io.select("Entry", &choices)? else {
            println!("No project selected.");
            return Ok(true);
        };

        if selected == C::NEW_ENTRY_CHOICE {
            if !add_entry(root, io, &mut record)? {
                return Ok(true);
            }
        } else {
            let actions: Vec<String> = C::EDIT_ACTIONS.iter().map(|a| a.to_string()).collect();
            let action = io
                .select("Action", &actions)?
                .and_then(|a| a.parse::<EditAction>().ok());
            let Some(action) = action else {
                println!("No option selected.");
                return Ok(true);
            };
            apply_action(root, io, &mut record, &selected, action)?;
        }

        root.save_record(&record)?;
        println!("Timesheet has been updated.");
    }
}

/// Append a new entry to an existing record, then re-confirm the total.
/// The total may not drop below the previously confirmed value; empty input
/// keeps it.
fn add_entry<I: Interaction + ?Sized>(
    root: &TimesheetRoot,
    io: &mut I,
    record: &mut DayRecord,
) -> Result<bool> {
    let registry = ProjectRegistry::new(root).list()?;
    let candidates = available_projects(&registry, record);
    let Some(project) = io.select("Project", &candidates)? else {
        println!("No project selected.");
        return Ok(false);
    };

    let entry = capture_entry(root, io, &record.date, &project)?;
    record.projects.push(entry);

    let floor = record.hours;
    record.hours = confirm_total(
        io,
        &format!(
            "Please confirm the total number of hours worked on {} (>= {}): ",
            record.date,
            util::format_hours(floor)
        ),
        floor,
    )?;
    Ok(true)
}

fn apply_action<I: Interaction + ?Sized>(
    root: &TimesheetRoot,
    io: &mut I,
    record: &mut DayRecord,
    name: &str,
    action: EditAction,
) -> Result<()> {
    let Some(entry) = record.entry(name) else {
        println!("Project {} not found in the timesheet.", name);
        return Ok(());
    };

    match action {
        EditAction::Delete => {
            delete_entry(root, record, name)?;
        }
        EditAction::Hours => {
            let hours = prompt_hours(io, &format!("Enter the new number of hours for {}: ", name))?;
            if let Some(entry) = record.entry_mut(name) {
                entry.hours = hours;
            }
        }
        EditAction::Notes => {
            io.edit(&root.resolve(&entry.notes))?;
        }
        EditAction::Media => {
            let media = entry
                .media
                .clone()
                .unwrap_or_else(|| TimesheetRoot::media_path(&record.date, name));
            let media_dir = root.resolve(&media);
            fs::create_dir_all(&media_dir)?;
            if let Some(entry) = record.entry_mut(name) {
                entry.media = Some(media);
            }
            wait_for_enter(
                io,
                &format!(
                    "Press Enter once you have copied all the media you want to attach to {}.",
                    util::display_real_path(&media_dir)
                ),
            )?;
        }
    }
    Ok(())
}

/// Remove an entry along with its notes file and media directory.
/// Returns `false` when no entry has this name.
pub fn delete_entry(root: &TimesheetRoot, record: &mut DayRecord, name: &str) -> Result<bool> {
    let Some(entry) = record.entry(name) else {
        return Ok(false);
    };

    let notes_file = root.resolve(&entry.notes);
    if notes_file.exists() {
        fs::remove_file(&notes_file)?;
    }
    if let Some(media) = &entry.media {
        let media_dir = root.resolve(media);
        if media_dir.exists() {
            fs::remove_dir_all(&media_dir)?;
        }
    }

    record.remove_entry(name);
    info!("deleted entry {} from {}", name, record.date);
    Ok(true)
}

// === Display ===

/// Render a day record. Returns `false` (after saying so) when the date has
/// no timesheet. Nothing on disk is modified.
pub fn render_day<W: Write>(root: &TimesheetRoot, date: &str, out: &mut W) -> Result<bool> {
    let Some(record) = root.load_record(date)? else {
        writeln!(out, "No timesheet found in the directory {}", date)?;
        return Ok(false);
    };

    writeln!(out, "Date: {}", record.date)?;
    writeln!(out, "Total Hours Worked: {}", util::format_hours(record.hours))?;
    writeln!(out, "Projects:")?;

    for entry in &record.projects {
        writeln!(out, "  - Project Name: {}", entry.name)?;
        writeln!(out, "    Hours: {}", util::format_hours(entry.hours))?;

        match fs::read(root.resolve(&entry.notes)) {
            Ok(bytes) => {
                writeln!(out, "    Notes:")?;
                for line in String::from_utf8_lossy(&bytes).lines() {
                    writeln!(out, "      {}", line.trim())?;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("notes for {} missing: {}", entry.name, e);
                writeln!(out, "    Notes: {}", C::NOTES_NOT_FOUND)?;
            }
            Err(e) => return Err(e.into()),
        }

        let media_dir = entry.media.as_ref().map(|m| (m, root.resolve(m)));
        match media_dir {
            Some((media, dir)) if dir.is_dir() => {
                writeln!(out, "    Media:")?;
                let mut names: Vec<_> = fs::read_dir(&dir)?
                    .filter_map(|e| e.ok())
                    .map(|e| e.file_name())
                    .collect();
                names.sort();
                for name in names {
                    writeln!(out, "      {}", util::display_path(&media.join(name)))?;
                }
            }
            _ => writeln!(out, "    Media: {}", C::MEDIA_NOT_FOUND)?,
        }
    }

    writeln!(out)?;
    Ok(true)
}

// === Date Resolution ===

/// Let the user pick one of the date directories by its readable label
pub fn select_date<I: Interaction + ?Sized>(root: &TimesheetRoot, io: &mut I) -> Result<Option<String>> {
    let labelled: Vec<(String, String)> = root
        .list_dates()?
        .into_iter()
        .map(|date| (util::date_label(&date), date))
        .collect();
    let labels: Vec<String> = labelled.iter().map(|(label, _)| label.clone()).collect();

    let chosen = io
        .select("Date", &labels)?
        .and_then(|label| labelled.into_iter().find(|(l, _)| *l == label))
        .map(|(_, date)| date);

    if chosen.is_none() {
        println!("No date selected.");
    }
    Ok(chosen)
}

/// Use the explicit date when given, otherwise ask
pub fn resolve_date<I: Interaction + ?Sized>(
    root: &TimesheetRoot,
    io: &mut I,
    date: Option<String>,
) -> Result<Option<String>> {
    match date {
        Some(date) => Ok(Some(date)),
        None => select_date(root, io),
    }
}
