pub mod dispatch;
pub mod projects;
pub mod report;
pub mod shared;
pub mod shell;
