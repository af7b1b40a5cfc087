//! Desktop entry and icon helpers shared by Linux targets.

use crate::bundler::{error::Result, settings::Settings};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Helper for icon resolution and desktop entry generation.
///
/// Wraps [`Settings`] with the two pieces of desktop integration every Linux
/// package needs: finding the best icon from the configured set and writing a
/// freedesktop.org compliant `.desktop` file.
pub struct DesktopEntryHelper<'a> {
    settings: &'a Settings,
}

impl<'a> DesktopEntryHelper<'a> {
    /// Creates a helper over the given settings.
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Returns the largest configured PNG icon, if any.
    ///
    /// Icon sets typically carry several sizes of the same artwork, so the
    /// biggest file is the highest-resolution variant.
    pub async fn max_icon_path(&self) -> Option<PathBuf> {
        let icons = self.settings.bundle_settings().icon.as_ref()?;

        let mut best: Option<(u64, PathBuf)> = None;
        for path in icons
            .iter()
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("png"))
        {
            let Ok(meta) = tokio::fs::metadata(path).await else {
                log::debug!("Skipping unreadable icon: {}", path.display());
                continue;
            };
            if best.as_ref().is_none_or(|(len, _)| meta.len() > *len) {
                best = Some((meta.len(), path.clone()));
            }
        }

        best.map(|(_, path)| path)
    }

    /// Effective long description: the snap-specific override if configured,
    /// else the package description.
    pub fn description(&self) -> &str {
        self.settings
            .snap_settings()
            .description
            .as_deref()
            .unwrap_or_else(|| self.settings.description())
    }

    /// Writes a freedesktop.org desktop entry for the given app.
    ///
    /// `icon_override` replaces the icon reference when the entry is consumed
    /// from inside a package whose icon lives at a packaging-format-specific
    /// location (e.g. `${SNAP}/meta/gui/icon.png`).
    pub async fn write_desktop_entry(
        &self,
        name: &str,
        exec: &str,
        desktop_file: &Path,
        icon_override: Option<&str>,
    ) -> Result<()> {
        use crate::bundler::error::ErrorExt;

        if let Some(parent) = desktop_file.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .fs_context("creating desktop entry directory", parent)?;
        }

        let mut file = tokio::fs::File::create(desktop_file)
            .await
            .fs_context("creating desktop file", desktop_file)?;

        file.write_all(b"[Desktop Entry]\n").await?;
        file.write_all(b"Type=Application\n").await?;
        file.write_all(format!("Name={}\n", self.settings.product_name()).as_bytes())
            .await?;
        file.write_all(format!("Exec={}\n", exec).as_bytes()).await?;

        let icon = icon_override.unwrap_or(name);
        file.write_all(format!("Icon={}\n", icon).as_bytes()).await?;

        let description = self.description();
        if !description.is_empty() {
            file.write_all(format!("Comment={}\n", description).as_bytes())
                .await?;
        }

        if let Some(category) = &self.settings.bundle_settings().category {
            file.write_all(format!("Categories={}\n", category).as_bytes())
                .await?;
        }

        file.write_all(b"Terminal=false\n").await?;
        Ok(())
    }
}
