//! Create command module

use timesheet::{util, workflow, Interaction, Result, TimesheetRoot};

pub fn run<I: Interaction>(root: &TimesheetRoot, io: &mut I) -> Result<()> {
    let Some(record) = workflow::create_day(root, io, util::today())? else {
        return Ok(());
    };

    println!("✅ Timesheet created.");
    println!("\nSummary of the entered information:\n");
    workflow::render_day(root, &record.date, &mut std::io::stdout().lock())?;
    Ok(())
}
