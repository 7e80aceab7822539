use timesheet::{ProjectRegistry, Result, TimesheetRoot};

pub fn run(root: &TimesheetRoot) -> Result<()> {
    let projects = ProjectRegistry::new(root).list()?;
    if projects.is_empty() {
        println!("  (none)");
    }
    for name in projects {
        println!("{}", name);
    }
    Ok(())
}
