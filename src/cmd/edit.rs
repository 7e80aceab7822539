use timesheet::{workflow, Interaction, Result, TimesheetRoot};

pub fn run<I: Interaction>(root: &TimesheetRoot, io: &mut I, date: Option<String>) -> Result<()> {
    let Some(date) = workflow::resolve_date(root, io, date)? else {
        return Ok(());
    };
    workflow::edit_day(root, io, &date)?;
    Ok(())
}
