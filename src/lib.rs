pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod opener;
pub mod prompt;
pub mod registry;
pub mod store;
pub mod util;
pub mod workflow;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{Error, Result};
pub use model::{DayRecord, ProjectEntry};
pub use prompt::{Interaction, Terminal};
pub use registry::{AddOutcome, ProjectRegistry, RemoveOutcome};
pub use store::TimesheetRoot;
