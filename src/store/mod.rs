//! Flat JSON file persistence.

mod json_file;

pub use json_file::{load_or_default, remove, save};
