//! Main bundler orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that drives the snap
//! target and collects artifact metadata for reporting.

use crate::bundler::{
    Result, Settings,
    error::ErrorExt,
    platform::linux::snap::SnapTarget,
    settings::Arch,
};
use std::path::PathBuf;

use super::checksum::calculate_sha256;

/// A finished artifact with reporting metadata.
#[derive(Debug, Clone)]
pub struct BundledArtifact {
    /// Path of the artifact file.
    pub path: PathBuf,
    /// Architecture the artifact was built for.
    pub arch: Arch,
    /// Artifact size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 checksum.
    pub checksum: String,
}

/// Main bundler orchestrator.
///
/// Runs the snap target for the configured architecture and reports each
/// produced artifact exactly once, together with its size and checksum.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_snap::bundler::Bundler;
///
/// # async fn example(settings: kodegen_bundler_snap::bundler::Settings)
/// # -> kodegen_bundler_snap::bundler::Result<()> {
/// let bundler = Bundler::new(settings);
/// let artifacts = bundler.bundle().await?;
/// println!("Created {} packages", artifacts.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Builds the snap for the configured architecture.
    ///
    /// # Returns
    ///
    /// Vector of [`BundledArtifact`] results. Empty only when an installed
    /// manifest hook short-circuited the build; otherwise exactly one entry.
    pub async fn bundle(&self) -> Result<Vec<BundledArtifact>> {
        let target = SnapTarget::new(&self.settings);
        self.bundle_with(&target).await
    }

    /// Builds the snap using a caller-configured target.
    ///
    /// Used when the caller needs a specific runner strategy or an
    /// inspection hook on the target.
    pub async fn bundle_with(&self, target: &SnapTarget<'_>) -> Result<Vec<BundledArtifact>> {
        let arch = self.settings.binary_arch();

        let mut artifacts = Vec::new();
        if let Some(artifact) = target.build(self.settings.app_directory(), arch).await? {
            let metadata = tokio::fs::metadata(&artifact.path)
                .await
                .fs_context("reading artifact metadata", &artifact.path)?;
            let checksum = calculate_sha256(&artifact.path).await?;

            artifacts.push(BundledArtifact {
                path: artifact.path,
                arch: artifact.arch,
                size: metadata.len(),
                checksum,
            });
        }

        Ok(artifacts)
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
