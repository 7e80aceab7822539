use timesheet::{opener, util, workflow, Interaction, Result, TimesheetRoot};

pub fn run<I: Interaction>(root: &TimesheetRoot, io: &mut I, date: Option<String>) -> Result<()> {
    let Some(date) = workflow::resolve_date(root, io, date)? else {
        return Ok(());
    };
    let dir = root.day_dir(&date);
    println!("Opening {}", util::display_path(&dir));
    opener::open_path(&dir)
}
