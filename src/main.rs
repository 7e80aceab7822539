use std::process::ExitCode;

use clap::Parser;
use log::debug;
use timesheet::constants as C;
use timesheet::{Cli, Command, Config, Terminal, TimesheetRoot};
use yansi::Paint;

fn main() -> ExitCode {
    init_logging();
    if std::env::var_os("NO_COLOR").is_some() {
        yansi::disable();
    }

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Single failure hook: message only, no debug trace
            eprintln!("{}", e.to_string().red());
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().filter_or(C::ENV_LOG, "warn"))
        .format_timestamp_millis()
        .try_init();
}

fn run(cli: Cli) -> timesheet::Result<()> {
    let config = Config::new(cli.root.as_deref());
    debug!("timesheet root: {}", config.root.display());
    let root = TimesheetRoot::new(&config.root);
    let mut io = Terminal::new(&config);

    match cli.command {
        Command::AddProject { name } => cmd::add_project::run(&root, &name),
        Command::DeleteProject { name } => cmd::delete_project::run(&root, &name),
        Command::ListProjects => cmd::list_projects::run(&root),
        Command::Create => cmd::create::run(&root, &mut io),
        Command::Show { date } => cmd::show::run(&root, &mut io, date),
        Command::Edit { date } => cmd::edit::run(&root, &mut io, date),
        Command::Open { date } => cmd::open::run(&root, &mut io, date),
    }
}

mod cmd {
    pub mod add_project;
    pub mod delete_project;
    pub mod list_projects;
    pub mod create;
    pub mod show;
    pub mod edit;
    pub mod open;
}
