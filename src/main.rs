//! Overlay CLI - reapplies embedded-llama fork overlays after an upstream sync

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = overlay_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
