//! Configuration structures for snap bundling operations.
//!
//! This module provides configuration types for snap bundling, including
//! package metadata, snap-specific settings, and a builder pattern for
//! constructing settings.

#![allow(dead_code)] // Public API - Settings structs preserve all fields for external consumers

mod arch;
mod builder;
mod bundle;
mod core;
mod package;
mod snap;

// Re-export all public types
pub use arch::Arch;
pub use builder::SettingsBuilder;
pub use bundle::{BundleBinary, BundleSettings};
pub use core::Settings;
pub use package::PackageSettings;
pub use snap::SnapSettings;
