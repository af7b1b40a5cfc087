//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with proper
//! validation and error handling.

use crate::bundler::Arch;
use clap::Parser;
use std::path::PathBuf;

/// Snap package bundler for desktop applications
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_snap",
    version,
    about = "Snap package bundler for desktop applications",
    long_about = "Creates a .snap package from an already-built application directory.

Reads package metadata from the project's Cargo.toml, stages a snapcraft
tree next to the application directory, and drives snapcraft (natively on
Linux, inside a builder container elsewhere).

Usage:
  kodegen_bundler_snap --app-dir dist/linux-unpacked --output-dir dist
  kodegen_bundler_snap --app-dir dist/linux-arm64-unpacked --output-dir dist --arch arm64

Exit code 0 = artifact guaranteed to exist in the output directory."
)]
pub struct Args {
    /// Directory holding the built application payload
    #[arg(short = 'a', long, value_name = "DIR")]
    pub app_dir: PathBuf,

    /// Output directory for the .snap artifact
    ///
    /// The artifact filename is computed as
    /// {executable}_{version}_{arch}.snap.
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Path to the Cargo.toml supplying package metadata
    #[arg(short = 'm', long, value_name = "PATH", default_value = "Cargo.toml")]
    pub manifest_path: PathBuf,

    /// Target architecture: amd64, i386, arm64, armhf, armel, riscv64
    ///
    /// Defaults to the host architecture.
    #[arg(long, value_name = "ARCH")]
    pub arch: Option<String>,

    /// Print verbose progress output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if let Some(arch) = &self.arch {
            if Arch::from_linux_arch_string(arch).is_none() {
                return Err(format!(
                    "Invalid architecture: {}. Valid architectures: amd64, i386, arm64, armhf, armel, riscv64",
                    arch
                ));
            }
        }

        Ok(())
    }

    /// Architecture override parsed from `--arch`, if given
    pub fn arch_override(&self) -> Option<Arch> {
        self.arch
            .as_deref()
            .and_then(Arch::from_linux_arch_string)
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);

        Self { output }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    #[allow(dead_code)] // Public API - preserved for external consumers
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) {
        self.output.success(message)
    }

    /// Print an indented continuation line
    pub fn indent(&self, message: &str) {
        self.output.indent(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) {
        self.output.warn(message)
    }

    /// Print verbose message if in verbose mode
    pub fn verbose(&self, message: &str) {
        self.output.verbose(message)
    }
}
