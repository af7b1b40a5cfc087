//! Builder for constructing Settings.

use super::{Arch, BundleBinary, BundleSettings, PackageSettings, Settings};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API for building bundler settings with validation.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_snap::bundler::{SettingsBuilder, PackageSettings, BundleBinary};
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
///     .binaries(vec![
///         BundleBinary::new("myapp".into(), true),
///     ])
///     .target("x86_64-unknown-linux-gnu".into())
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`Settings`] - The built settings struct
#[derive(Default)]
pub struct SettingsBuilder {
    app_directory: Option<PathBuf>,
    project_out_directory: Option<PathBuf>,
    project_directory: Option<PathBuf>,
    package_settings: Option<PackageSettings>,
    bundle_settings: BundleSettings,
    binaries: Vec<BundleBinary>,
    target: Option<String>,
    arch: Option<Arch>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the directory holding the built application payload.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn app_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.app_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the artifact output directory.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn project_out_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_out_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the root of the consuming project.
    ///
    /// Default: the current working directory.
    pub fn project_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets package metadata.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Sets bundle configuration.
    ///
    /// Default: Empty [`BundleSettings`]
    pub fn bundle_settings(mut self, settings: BundleSettings) -> Self {
        self.bundle_settings = settings;
        self
    }

    /// Sets binaries shipped in the payload.
    ///
    /// Default: Empty (main binary falls back to the product name)
    pub fn binaries(mut self, binaries: Vec<BundleBinary>) -> Self {
        self.binaries = binaries;
        self
    }

    /// Sets target triple.
    ///
    /// If not set, uses the `TARGET` environment variable or current
    /// architecture.
    ///
    /// Default: Current architecture
    pub fn target(mut self, target: String) -> Self {
        self.target = Some(target);
        self
    }

    /// Overrides the target architecture for cross-builds.
    ///
    /// Default: detected from the target triple.
    pub fn arch(mut self, arch: Arch) -> Self {
        self.arch = Some(arch);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing:
    /// - `app_directory`
    /// - `project_out_directory`
    /// - `package_settings`
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        let target = self.target.unwrap_or_else(|| {
            std::env::var("TARGET").unwrap_or_else(|_| std::env::consts::ARCH.to_string())
        });

        let project_directory = match self.project_directory {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };

        Ok(Settings::new(
            self.package_settings
                .context("package_settings is required")?,
            self.bundle_settings,
            self.app_directory.context("app_directory is required")?,
            self.project_out_directory
                .context("project_out_directory is required")?,
            project_directory,
            self.binaries,
            target,
            self.arch,
        ))
    }
}
