//! Colored terminal output for CLI operations.
#![allow(dead_code)] // Public API - items may be used by external consumers

use console::style;

/// Terminal output manager with verbosity and quiet handling.
///
/// All CLI-facing text goes through this type so verbosity flags are honored
/// in one place; diagnostics for machine consumption stay on the `log`
/// facade instead.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print an informational message.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    /// Print a success message.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {message}", style("✓").green());
        }
    }

    /// Print a warning message to stderr.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {message}", style("warning:").yellow().bold());
        }
    }

    /// Print an error message to stderr (always shown).
    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", style("error:").red().bold());
    }

    /// Print an indented continuation line.
    pub fn indent(&self, message: &str) {
        if !self.quiet {
            println!("  {message}");
        }
    }

    /// Print a dimmed verbose message.
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("{}", style(message).dim());
        }
    }
}
