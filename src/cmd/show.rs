use timesheet::{workflow, Interaction, Result, TimesheetRoot};

pub fn run<I: Interaction>(root: &TimesheetRoot, io: &mut I, date: Option<String>) -> Result<()> {
    let Some(date) = workflow::resolve_date(root, io, date)? else {
        return Ok(());
    };
    workflow::render_day(root, &date, &mut std::io::stdout().lock())?;
    Ok(())
}
