//! Kodegen Bundler Snap - Snap package bundler for desktop applications.
//!
//! This binary creates .snap packages from already-built application
//! directories with proper error handling and artifact verification.

mod bundler;
mod cli;
mod error;
mod metadata;

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
