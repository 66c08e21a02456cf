//! horaslite main entrypoint.

use horaslite::run;
use horaslite::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
