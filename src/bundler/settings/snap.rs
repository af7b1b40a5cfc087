//! Snap package configuration.

/// Snap package (.snap) configuration.
///
/// Configures the creation of snap packages via snapcraft. Every field has a
/// sensible default, so an empty section produces a working strictly-confined
/// snap.
///
/// # Configuration
///
/// Add to `Cargo.toml`:
///
/// ```toml
/// [package.metadata.bundle.snap]
/// summary = "An awesome application"
/// confinement = "strict"
/// grade = "stable"
/// plugs = ["default", "removable-media"]
/// stage_packages = ["default"]
/// ```
///
/// # The `"default"` sentinel
///
/// The `plugs` and `stage_packages` lists replace the built-in defaults
/// entirely. To extend the defaults instead, include the sentinel entry
/// `"default"` anywhere in the list; it is expanded in place to the built-in
/// default list, keeping surrounding entries in order.
///
/// # Ubuntu app platform
///
/// Setting `ubuntu_app_platform_content` (to any value) switches the snap to
/// the shared ubuntu-app-platform content interface: the heavy desktop
/// libraries are consumed from the platform snap instead of being staged into
/// the package, which shrinks the artifact considerably.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// One-line summary shown in store listings.
    ///
    /// Default: None (uses the product name)
    pub summary: Option<String>,

    /// Long package description.
    ///
    /// Default: None (uses the package description)
    pub description: Option<String>,

    /// Confinement mode: "strict", "devmode", or "classic".
    ///
    /// Default: None (uses "strict")
    pub confinement: Option<String>,

    /// Quality grade: "stable" or "devel".
    ///
    /// Default: None (uses "stable")
    pub grade: Option<String>,

    /// Features assumed to be present on the target system
    /// (snapd feature flags such as "command-chain").
    ///
    /// Kept as a raw TOML value; the shape (list of strings) is validated at
    /// build time so a wrongly-typed value fails the build with a clear
    /// message rather than being silently dropped during parsing.
    ///
    /// Default: None
    pub assumes: Option<toml::Value>,

    /// Interface plugs granted to the app. Supports the `"default"` sentinel.
    ///
    /// Default: None (uses the built-in plug list)
    pub plugs: Option<Vec<String>>,

    /// Native packages staged into the snap. Supports the `"default"`
    /// sentinel.
    ///
    /// Default: None (uses the built-in package list)
    pub stage_packages: Option<Vec<String>>,

    /// Opts in to the ubuntu-app-platform content interface.
    ///
    /// Any present value enables platform mode; the value's internal
    /// structure is not inspected.
    ///
    /// Default: None (disabled)
    pub ubuntu_app_platform_content: Option<toml::Value>,
}

impl SnapSettings {
    /// Whether the ubuntu-app-platform content interface is enabled.
    pub fn uses_ubuntu_platform(&self) -> bool {
        self.ubuntu_app_platform_content.is_some()
    }
}
