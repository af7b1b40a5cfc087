//! Bundle configuration and binary definitions.

use super::SnapSettings;
use std::path::PathBuf;

/// Bundle configuration.
///
/// Central configuration structure containing application metadata shared by
/// the staging steps (icons, desktop entry) plus the snap-specific settings.
///
/// # Configuration
///
/// Add to `Cargo.toml`:
///
/// ```toml
/// [package.metadata.bundle]
/// identifier = "com.example.app"
/// publisher = "Example Inc."
/// icon = ["assets/img/icon_512x512.png"]
/// category = "Utility"
/// ```
///
/// # See Also
///
/// - [`SnapSettings`] - Snap package configuration
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct BundleSettings {
    /// Bundle identifier in reverse domain notation.
    ///
    /// Example: "com.example.app", "ai.kodegen.app"
    ///
    /// Default: None
    pub identifier: Option<String>,

    /// Publisher/company name.
    ///
    /// Default: None
    pub publisher: Option<String>,

    /// Icon file paths (PNG).
    ///
    /// Provide multiple sizes for best quality:
    /// `["icon_32x32.png", "icon_128x128.png", "icon_512x512.png"]`
    ///
    /// The largest PNG is embedded in the snap.
    ///
    /// Default: None
    pub icon: Option<Vec<PathBuf>>,

    /// Copyright notice string.
    ///
    /// Example: "Copyright © 2024 Example Inc."
    ///
    /// Default: None
    pub copyright: Option<String>,

    /// Application category (freedesktop.org Desktop Entry Specification).
    ///
    /// Valid values: AudioVideo, Audio, Video, Development, Education, Game,
    /// Graphics, Network, Office, Settings, Utility
    ///
    /// Default: None
    pub category: Option<String>,

    /// Snap-specific settings.
    ///
    /// See [`SnapSettings`] for details.
    pub snap: SnapSettings,
}

/// A binary to bundle into the package.
///
/// Represents an executable shipped in the application output directory.
/// Multiple binaries can be listed, but exactly one is marked as the main
/// executable; it names the snap and its single app entry.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_snap::bundler::BundleBinary;
///
/// let main_binary = BundleBinary::new("myapp".into(), true);
/// let helper = BundleBinary::new("myapp-helper".into(), false);
/// ```
#[derive(Clone, Debug)]
pub struct BundleBinary {
    name: String,
    main: bool,
}

impl BundleBinary {
    /// Creates a new bundle binary.
    ///
    /// # Arguments
    ///
    /// * `name` - Binary name (without extension)
    /// * `main` - Whether this is the main executable
    pub fn new(name: String, main: bool) -> Self {
        Self { name, main }
    }

    /// Returns whether this is the main executable.
    pub fn main(&self) -> bool {
        self.main
    }

    /// Returns the binary name (without extension).
    pub fn name(&self) -> &str {
        &self.name
    }
}
