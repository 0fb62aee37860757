//! Entry point.
//!
//! ```text
//! cli::run() --> Logging --> Config --> Shell
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    match gitplay::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
