use timesheet::{ProjectRegistry, RemoveOutcome, Result, TimesheetRoot};

pub fn run(root: &TimesheetRoot, name: &str) -> Result<()> {
    match ProjectRegistry::new(root).remove(name)? {
        RemoveOutcome::Removed => println!("❌ Project {} has been deleted.", name),
        RemoveOutcome::NotPresent => println!("Project {} does not exist.", name),
    }
    Ok(())
}
