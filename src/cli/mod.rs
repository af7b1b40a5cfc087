//! Command line interface for the snap bundler.
//!
//! This module wires argument parsing, metadata loading, and the bundler
//! together into the binary's entry point.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::bundler::{BundleBinary, Bundler, PackageSettings, SettingsBuilder};
use crate::error::{CliError, Result};
use crate::metadata;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    if let Err(reason) = args.validate() {
        return Err(CliError::InvalidArguments { reason }.into());
    }
    let runtime_config = RuntimeConfig::from(&args);

    let manifest_path = args.manifest_path.canonicalize().map_err(|e| {
        CliError::InvalidArguments {
            reason: format!(
                "Cannot resolve manifest path {}: {}",
                args.manifest_path.display(),
                e
            ),
        }
    })?;
    let manifest = metadata::load_manifest(&manifest_path)?;
    runtime_config.verbose(&format!(
        "Loaded metadata for {} {}",
        manifest.metadata.name, manifest.metadata.version
    ));

    let project_directory = manifest_path
        .parent()
        .ok_or_else(|| CliError::InvalidArguments {
            reason: "Invalid Cargo.toml path".to_string(),
        })?;

    let mut builder = SettingsBuilder::new()
        .app_directory(&args.app_dir)
        .project_out_directory(&args.output_dir)
        .project_directory(project_directory)
        .package_settings(PackageSettings {
            product_name: manifest.metadata.name,
            version: manifest.metadata.version,
            description: manifest.metadata.description,
            homepage: manifest.metadata.homepage,
            authors: (!manifest.metadata.authors.is_empty()).then_some(manifest.metadata.authors),
        })
        .bundle_settings(manifest.bundle_settings)
        .binaries(vec![BundleBinary::new(manifest.binary_name, true)]);

    if let Some(arch) = args.arch_override() {
        builder = builder.arch(arch);
    }

    let settings = builder.build()?;
    let bundler = Bundler::new(settings);
    let artifacts = bundler.bundle().await?;

    for artifact in &artifacts {
        runtime_config.success(&format!("Created snap: {}", artifact.path.display()));
        runtime_config.indent(&format!("arch: {}", artifact.arch.linux_arch_string()));
        runtime_config.indent(&format!("size: {} bytes", artifact.size));
        runtime_config.indent(&format!("sha256: {}", artifact.checksum));
    }

    if artifacts.is_empty() {
        runtime_config.warn("No artifact produced");
        return Ok(1);
    }

    Ok(0)
}
