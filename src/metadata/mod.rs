//! Metadata and binary discovery from single Cargo.toml

use crate::bundler::{BundleSettings, SnapSettings};
use crate::error::{BundlerError, CliError, Result};
use std::path::Path;

/// Package metadata extracted from Cargo.toml
pub struct PackageMetadata {
    /// Package name from Cargo.toml
    pub name: String,

    /// Package description from Cargo.toml
    pub description: String,

    /// Package version from Cargo.toml (e.g., "0.1.0")
    pub version: String,

    /// List of package authors from Cargo.toml
    pub authors: Vec<String>,

    /// Homepage URL if specified in Cargo.toml
    pub homepage: Option<String>,
}

/// Complete manifest data from Cargo.toml
pub struct CargoManifest {
    /// Package metadata ([package] section)
    pub metadata: PackageMetadata,

    /// Primary binary name (from [[bin]] or package.name)
    pub binary_name: String,

    /// Bundle settings (from [package.metadata.bundle] section + asset discovery)
    pub bundle_settings: BundleSettings,
}

/// Load complete manifest from Cargo.toml (single read + parse)
///
/// Reads and parses Cargo.toml exactly once, then extracts metadata, the
/// binary name, and the bundle/snap settings from the parsed TOML value.
pub fn load_manifest(cargo_toml_path: &Path) -> Result<CargoManifest> {
    // Step 1: Read file once
    let manifest = std::fs::read_to_string(cargo_toml_path).map_err(|e| {
        BundlerError::Cli(CliError::ExecutionFailed {
            command: "read_cargo_toml".to_string(),
            reason: format!("Failed to read {}: {}", cargo_toml_path.display(), e),
        })
    })?;

    // Step 2: Parse TOML once
    let toml_value: toml::Value = toml::from_str(&manifest).map_err(|e| {
        BundlerError::Cli(CliError::ExecutionFailed {
            command: "parse_cargo_toml".to_string(),
            reason: format!("Failed to parse Cargo.toml: {}", e),
        })
    })?;

    let package = toml_value.get("package").ok_or_else(|| {
        BundlerError::Cli(CliError::InvalidArguments {
            reason: "No [package] section in Cargo.toml".to_string(),
        })
    })?;

    // Step 3: Extract metadata from parsed TOML (no additional I/O)
    let metadata = PackageMetadata {
        name: package
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                BundlerError::Cli(CliError::InvalidArguments {
                    reason: "Missing 'name' in [package]".to_string(),
                })
            })?
            .to_string(),

        description: package
            .get("description")
            .and_then(|v| v.as_str())
            .unwrap_or("Rust application")
            .to_string(),

        version: package
            .get("version")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                BundlerError::Cli(CliError::InvalidArguments {
                    reason: "Missing 'version' in [package]".to_string(),
                })
            })?
            .to_string(),

        authors: package
            .get("authors")
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default(),

        homepage: package
            .get("homepage")
            .and_then(|v| v.as_str())
            .map(String::from),
    };

    // Step 4: Discover binary name from parsed TOML (no additional I/O)
    // Try [[bin]] section first
    let binary_name = toml_value
        .get("bin")
        .and_then(|v| v.as_array())
        .and_then(|arr| arr.first())
        .and_then(|first| first.get("name"))
        .and_then(|v| v.as_str())
        .map(String::from)
        .or_else(|| {
            // Fallback to package name
            package
                .get("name")
                .and_then(|v| v.as_str())
                .map(String::from)
        })
        .ok_or_else(|| {
            BundlerError::Cli(CliError::InvalidArguments {
                reason: "No binary found in Cargo.toml".to_string(),
            })
        })?;

    // Step 5: Parse bundle settings from [package.metadata.bundle] section
    let cargo_dir = cargo_toml_path.parent().ok_or_else(|| {
        BundlerError::Cli(CliError::InvalidArguments {
            reason: "Invalid Cargo.toml path".to_string(),
        })
    })?;

    let mut bundle_settings = parse_bundle_settings(&toml_value)?;

    // Step 6: Discover icons from the conventional location when none are
    // configured explicitly
    if bundle_settings.icon.is_none() {
        discover_bundle_icons(cargo_dir, &mut bundle_settings);
    }

    Ok(CargoManifest {
        metadata,
        binary_name,
        bundle_settings,
    })
}

/// Parse bundle settings from [package.metadata.bundle] section
///
/// Extracts shared bundle configuration plus the snap-specific settings from
/// [package.metadata.bundle.snap].
fn parse_bundle_settings(toml_value: &toml::Value) -> Result<BundleSettings> {
    let mut settings = BundleSettings::default();

    if let Some(bundle) = toml_value
        .get("package")
        .and_then(|p| p.get("metadata"))
        .and_then(|m| m.get("bundle"))
    {
        settings.identifier = bundle
            .get("identifier")
            .and_then(|v| v.as_str())
            .map(String::from);

        settings.publisher = bundle
            .get("publisher")
            .and_then(|v| v.as_str())
            .map(String::from);

        settings.category = bundle
            .get("category")
            .and_then(|v| v.as_str())
            .map(String::from);

        settings.copyright = bundle
            .get("copyright")
            .and_then(|v| v.as_str())
            .map(String::from);

        settings.icon = bundle.get("icon").and_then(|v| v.as_array()).map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(std::path::PathBuf::from))
                .collect()
        });

        if let Some(snap) = bundle.get("snap") {
            settings.snap = snap
                .clone()
                .try_into::<SnapSettings>()
                .map_err(BundlerError::Toml)?;
        }
    }

    Ok(settings)
}

/// Discover PNG icons from the conventional assets/img/ directory
///
/// Scans for icon_*x*.png files (including @2x variants). Files are only
/// added if they exist; the snap simply ships without an icon when none are
/// found.
fn discover_bundle_icons(package_root: &Path, settings: &mut BundleSettings) {
    let assets_dir = package_root.join("assets").join("img");

    if !assets_dir.exists() {
        log::debug!("Assets directory not found: {}", assets_dir.display());
        return;
    }

    let icon_sizes = [
        "icon_16x16.png",
        "icon_16x16@2x.png",
        "icon_32x32.png",
        "icon_32x32@2x.png",
        "icon_128x128.png",
        "icon_128x128@2x.png",
        "icon_256x256.png",
        "icon_256x256@2x.png",
        "icon_512x512.png",
        "icon_512x512@2x.png",
    ];

    let mut icons = Vec::new();
    for filename in icon_sizes {
        let icon_path = assets_dir.join(filename);
        if icon_path.exists() {
            log::debug!("Found icon: {}", filename);
            icons.push(icon_path);
        }
    }

    if icons.is_empty() {
        log::warn!("No icon files found in assets/img/");
    } else {
        log::info!("Discovered {} icon files", icons.len());
        settings.icon = Some(icons);
    }
}
