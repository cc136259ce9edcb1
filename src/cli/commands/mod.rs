pub mod add;
pub mod config;
pub mod copy;
pub mod list;
pub mod note;
pub mod report;
pub mod reset;
pub mod shortcut;
pub mod start;
pub mod stop;
