mod projects;
mod report;

pub use projects::ProjectsCommands;
pub use report::{ExportArgs, ReportCommands};
