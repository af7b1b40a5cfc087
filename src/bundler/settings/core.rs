//! Core Settings struct and implementations.

use super::{Arch, BundleBinary, BundleSettings, PackageSettings, SnapSettings};
use crate::bundler::error::Context;
use std::path::{Path, PathBuf};

/// Main settings for snap bundling operations.
///
/// Central configuration for the bundler, constructed via [`SettingsBuilder`].
/// Contains package metadata, bundle settings, and the directories involved
/// in a build.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_snap::bundler::{Settings, SettingsBuilder, PackageSettings};
///
/// # fn example() -> kodegen_bundler_snap::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .app_directory("dist/linux-unpacked")
///     .project_out_directory("dist")
///     .package_settings(PackageSettings {
///         product_name: "MyApp".into(),
///         version: "1.0.0".into(),
///         description: "My application".into(),
///         ..Default::default()
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`SettingsBuilder`] - Builder for constructing Settings
/// - [`PackageSettings`] - Package metadata
/// - [`BundleSettings`] - Bundle configuration
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package metadata.
    package: PackageSettings,

    /// Bundle configuration.
    bundle_settings: BundleSettings,

    /// Directory holding the already-built application payload.
    app_directory: PathBuf,

    /// Output directory for finished artifacts.
    project_out_directory: PathBuf,

    /// Root of the consuming project.
    ///
    /// Mounted into the build container; defaults to the directory holding
    /// the project's Cargo.toml.
    project_directory: PathBuf,

    /// Binaries shipped in the application payload.
    binaries: Vec<BundleBinary>,

    /// Target triple (e.g., "x86_64-unknown-linux-gnu").
    ///
    /// Used for architecture detection.
    target: String,

    /// Explicit architecture override for cross-builds.
    arch_override: Option<Arch>,
}

impl Settings {
    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the package description.
    pub fn description(&self) -> &str {
        &self.package.description
    }

    /// Returns the directory holding the built application payload.
    pub fn app_directory(&self) -> &Path {
        &self.app_directory
    }

    /// Returns the artifact output directory.
    pub fn project_out_directory(&self) -> &Path {
        &self.project_out_directory
    }

    /// Returns the root of the consuming project.
    pub fn project_directory(&self) -> &Path {
        &self.project_directory
    }

    /// Returns the target architecture.
    ///
    /// The explicit override wins; otherwise the architecture is detected
    /// from the target triple.
    pub fn binary_arch(&self) -> Arch {
        self.arch_override
            .unwrap_or_else(|| Arch::from_target(&self.target))
    }

    /// Returns the binaries shipped in the payload.
    pub fn binaries(&self) -> &[BundleBinary] {
        &self.binaries
    }

    /// Returns the name of the main executable.
    ///
    /// The main executable names the snap and its single app entry.
    pub fn main_binary_name(&self) -> crate::bundler::Result<&str> {
        self.binaries
            .iter()
            .find(|b| b.main())
            .map(BundleBinary::name)
            .context("no main binary configured")
    }

    /// Returns the bundle settings.
    pub fn bundle_settings(&self) -> &BundleSettings {
        &self.bundle_settings
    }

    /// Returns the snap-specific settings.
    pub fn snap_settings(&self) -> &SnapSettings {
        &self.bundle_settings.snap
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        bundle_settings: BundleSettings,
        app_directory: PathBuf,
        project_out_directory: PathBuf,
        project_directory: PathBuf,
        binaries: Vec<BundleBinary>,
        target: String,
        arch_override: Option<Arch>,
    ) -> Self {
        Self {
            package,
            bundle_settings,
            app_directory,
            project_out_directory,
            project_directory,
            binaries,
            target,
            arch_override,
        }
    }
}
