//! tt main entrypoint.

use tt_tracker::run;
use tt_tracker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
