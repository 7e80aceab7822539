use timesheet::{AddOutcome, ProjectRegistry, Result, TimesheetRoot};

pub fn run(root: &TimesheetRoot, name: &str) -> Result<()> {
    match ProjectRegistry::new(root).add(name)? {
        AddOutcome::Added => println!("✅ Project {} has been added.", name),
        AddOutcome::AlreadyExists => println!("Project {} already exists.", name),
    }
    Ok(())
}
