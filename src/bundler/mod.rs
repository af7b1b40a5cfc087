//! Snap bundling engine.
//!
//! The bundling layer is split the same way as its sibling bundlers:
//!
//! - `settings` - Configuration structures and the settings builder
//! - `platform` - Platform-specific targets (Linux snap)
//! - `builder` - Orchestration and artifact metadata
//! - `utils` - Shared filesystem helpers
//! - `error` - Error types and context helpers

pub mod builder;
pub mod error;
pub mod platform;
pub mod settings;
pub mod utils;

// Re-export commonly used types
pub use builder::{BundledArtifact, Bundler};
pub use error::{Error, Result};
pub use platform::linux::snap::{ManifestHook, SnapManifest, SnapTarget, TargetArtifact};
pub use settings::{
    Arch, BundleBinary, BundleSettings, PackageSettings, Settings, SettingsBuilder, SnapSettings,
};
