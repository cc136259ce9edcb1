pub mod add;
pub mod calculator;
pub mod report;
pub mod resolve;
pub mod shortcut;
pub mod timer;
