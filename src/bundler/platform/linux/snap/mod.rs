//! Snap package target.
//!
//! Assembles a snapcraft manifest for an already-built application payload,
//! stages icons and desktop integration next to it, and drives snapcraft to
//! produce the final `.snap` artifact.
//!
//! # Module Organization
//!
//! - `defaults` - Built-in option lists and the `"default"` sentinel rule
//! - `manifest` - snapcraft.yaml data model and serialization
//! - `runner` - Native vs. container snapcraft invocation strategies

mod defaults;
mod manifest;
mod runner;

pub use defaults::{
    DEFAULT_PLUGS, DEFAULT_STAGE_PACKAGES, UBUNTU_PLATFORM_STAGE_PACKAGES, replace_default,
};
pub use manifest::{ContentPlug, MANIFEST_LINE_WIDTH, SnapApp, SnapManifest, SnapPart, wrap_text};
pub use runner::{HAS_SNAPCRAFT, Snapcraft, SnapcraftInvocation};

use crate::bundler::{
    error::{Context, Error, ErrorExt, Result},
    settings::{Arch, Settings},
    utils::fs,
};
use super::desktop::DesktopEntryHelper;
use runner::CONTAINER_OUT_DIR;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Icon path inside the staging tree, recorded verbatim in the manifest.
const STAGED_ICON_PATH: &str = "setup/gui/icon.png";

/// Icon reference as seen from inside the installed snap.
const INSTALLED_ICON_PATH: &str = "${SNAP}/meta/gui/icon.png";

/// A produced snap artifact.
#[derive(Debug, Clone)]
pub struct TargetArtifact {
    /// Path of the `.snap` file under the output directory.
    pub path: PathBuf,
    /// Architecture the snap was built for.
    pub arch: Arch,
}

/// Optional interception point for a fully-assembled manifest.
///
/// Invoked after the manifest is completely built but before it is written
/// or any external tool runs. Returning `true` marks the manifest as handled
/// and skips packaging entirely (dry-run and inspection flows).
pub trait ManifestHook: Send + Sync {
    /// Returns `true` when the build should stop without producing an
    /// artifact.
    fn intercept(&self, manifest: &SnapManifest) -> bool;
}

impl<F> ManifestHook for F
where
    F: Fn(&SnapManifest) -> bool + Send + Sync,
{
    fn intercept(&self, manifest: &SnapManifest) -> bool {
        self(manifest)
    }
}

/// Snap packaging target.
///
/// One instance handles one configured project; [`SnapTarget::build`] may be
/// called once per architecture, each call staging into its own directory.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_snap::bundler::{Settings, SnapTarget};
///
/// # async fn example(settings: Settings) -> kodegen_bundler_snap::bundler::Result<()> {
/// let target = SnapTarget::new(&settings);
/// let artifact = target
///     .build(settings.app_directory(), settings.binary_arch())
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct SnapTarget<'a> {
    settings: &'a Settings,
    helper: DesktopEntryHelper<'a>,
    runner: Snapcraft,
    hook: Option<Box<dyn ManifestHook>>,
}

impl<'a> SnapTarget<'a> {
    /// Creates a target with the invocation strategy detected for this host.
    pub fn new(settings: &'a Settings) -> Self {
        Self::with_runner(settings, Snapcraft::detect())
    }

    /// Creates a target with an explicit invocation strategy.
    pub fn with_runner(settings: &'a Settings, runner: Snapcraft) -> Self {
        Self {
            settings,
            helper: DesktopEntryHelper::new(settings),
            runner,
            hook: None,
        }
    }

    /// Installs a manifest interception hook.
    pub fn with_hook(mut self, hook: impl ManifestHook + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Builds a snap from the given application payload for one architecture.
    ///
    /// Returns `None` only when an installed [`ManifestHook`] handled the
    /// manifest; every other outcome is either exactly one artifact or an
    /// error with nothing reported.
    pub async fn build(&self, app_out_dir: &Path, arch: Arch) -> Result<Option<TargetArtifact>> {
        log::info!("Building snap for arch {}", arch.linux_arch_string());

        let settings = self.settings;
        let options = settings.snap_settings();
        let executable = settings.main_binary_name()?.to_string();
        let uses_platform = options.uses_ubuntu_platform();

        let snap_dir = staging_dir(app_out_dir);
        fs::create_dir_all(&snap_dir, true)
            .await
            .fs_context("creating staging directory", &snap_dir)?;

        let extra_source_dir = snap_dir.join(".extra");
        if uses_platform {
            // ubuntu-app-platform requires the directory to exist and stay empty
            let platform_dir = extra_source_dir.join("ubuntu-app-platform");
            fs::create_dir_all(&platform_dir, true)
                .await
                .fs_context("creating platform content directory", &platform_dir)?;
        }

        let summary = options
            .summary
            .clone()
            .unwrap_or_else(|| settings.product_name().to_string());
        let description = wrap_text(self.helper.description(), MANIFEST_LINE_WIDTH);
        let confinement = options
            .confinement
            .clone()
            .unwrap_or_else(|| "strict".to_string());
        let grade = options.grade.clone().unwrap_or_else(|| "stable".to_string());

        let mut icon = None;
        if let Some(icon_path) = self.helper.max_icon_path().await {
            fs::copy_file(&icon_path, &snap_dir.join(STAGED_ICON_PATH)).await?;
            icon = Some(STAGED_ICON_PATH.to_string());
        }

        let desktop_file = snap_dir
            .join("setup")
            .join("gui")
            .join(format!("{executable}.desktop"));
        self.helper
            .write_desktop_entry(
                &executable,
                &executable,
                &desktop_file,
                Some(INSTALLED_ICON_PATH),
            )
            .await?;

        let assumes = validate_assumes(options.assumes.as_ref())?;

        let mut plugs = replace_default(options.plugs.as_deref(), DEFAULT_PLUGS);
        if uses_platform {
            plugs.push("platform".to_string());
        }

        let mut apps = BTreeMap::new();
        apps.insert(
            executable.clone(),
            SnapApp {
                command: format!("desktop-launch $SNAP/{executable}"),
                plugs,
            },
        );

        let plug_declarations = uses_platform.then(|| {
            let mut declarations = BTreeMap::new();
            declarations.insert(
                "platform".to_string(),
                ContentPlug {
                    interface: "content".to_string(),
                    content: "ubuntu-app-platform1".to_string(),
                    target: "ubuntu-app-platform".to_string(),
                    default_provider: "ubuntu-app-platform".to_string(),
                },
            );
            declarations
        });

        let stage_defaults = if uses_platform {
            UBUNTU_PLATFORM_STAGE_PACKAGES
        } else {
            DEFAULT_STAGE_PACKAGES
        };

        let in_container = self.runner.in_container();
        let app_source = if in_container {
            format!("{CONTAINER_OUT_DIR}/{}", dir_name(app_out_dir)?)
        } else {
            app_out_dir.display().to_string()
        };
        let after = if uses_platform {
            vec!["extra".to_string(), "desktop-ubuntu-app-platform".to_string()]
        } else {
            vec!["desktop-glib-only".to_string()]
        };

        let mut parts = BTreeMap::new();
        parts.insert(
            "app".to_string(),
            SnapPart {
                plugin: "dump".to_string(),
                stage_packages: Some(replace_default(
                    options.stage_packages.as_deref(),
                    stage_defaults,
                )),
                source: app_source,
                after: Some(after),
            },
        );

        if uses_platform {
            let extra_source = if in_container {
                format!(
                    "{CONTAINER_OUT_DIR}/{}/{}",
                    dir_name(&snap_dir)?,
                    dir_name(&extra_source_dir)?
                )
            } else {
                extra_source_dir.display().to_string()
            };
            parts.insert(
                "extra".to_string(),
                SnapPart {
                    plugin: "dump".to_string(),
                    stage_packages: None,
                    source: extra_source,
                    after: None,
                },
            );
        }

        let manifest = SnapManifest {
            name: executable.clone(),
            version: settings.version_string().to_string(),
            summary,
            description,
            confinement,
            grade,
            icon,
            assumes,
            apps,
            plugs: plug_declarations,
            parts,
        };

        // Manifest is complete; give the hook its chance before anything
        // else is written or executed.
        if let Some(hook) = &self.hook {
            if hook.intercept(&manifest) {
                log::debug!("manifest intercepted; skipping snapcraft invocation");
                return Ok(None);
            }
        }

        let manifest_path = snap_dir.join("snapcraft.yaml");
        tokio::fs::write(&manifest_path, manifest.to_yaml()?)
            .await
            .fs_context("writing manifest", &manifest_path)?;

        let snap_name = snap_file_name(&executable, settings.version_string(), arch);
        let result_path = settings.project_out_directory().join(&snap_name);

        self.runner
            .run(&SnapcraftInvocation {
                project_dir: settings.project_directory(),
                out_dir: settings.project_out_directory(),
                snap_dir: &snap_dir,
                arch: arch.linux_arch_string(),
                snap_name: &snap_name,
                result_path: &result_path,
            })
            .await?;

        log::info!("✓ Created snap: {}", result_path.display());

        Ok(Some(TargetArtifact {
            path: result_path,
            arch,
        }))
    }
}

/// Computes the artifact filename for a build.
pub fn snap_file_name(executable: &str, version: &str, arch: Arch) -> String {
    format!("{executable}_{version}_{}.snap", arch.linux_arch_string())
}

/// Staging directory for one architecture's build, next to its payload.
fn staging_dir(app_out_dir: &Path) -> PathBuf {
    let mut dir = app_out_dir.as_os_str().to_os_string();
    dir.push("-snap");
    PathBuf::from(dir)
}

/// Final path component as UTF-8, for container-relative source paths.
fn dir_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("directory has no usable name: {}", path.display()))
}

/// Checks the configured `assumes` value: absent is fine, anything present
/// must be a list of strings.
fn validate_assumes(assumes: Option<&toml::Value>) -> Result<Option<Vec<String>>> {
    let Some(value) = assumes else {
        return Ok(None);
    };

    let items = value.as_array().ok_or_else(|| {
        Error::ValidationError("snap.assumes must be an array of strings".to_string())
    })?;

    items
        .iter()
        .map(|item| {
            item.as_str().map(ToString::to_string).ok_or_else(|| {
                Error::ValidationError("snap.assumes must be an array of strings".to_string())
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}
