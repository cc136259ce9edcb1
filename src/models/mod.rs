pub mod customer;
pub mod daily;
pub mod report;
pub mod shortcut;
pub mod target;

pub use customer::Customer;
pub use daily::{DailyState, HistoryEntry, RunningTimer};
pub use report::{DailyReport, ProjectGroup, TaskLine};
pub use shortcut::Shortcut;
pub use target::Target;
