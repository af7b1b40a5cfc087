//! Snap manifest data model and serialization.
//!
//! Mirrors the subset of the snapcraft.yaml schema this bundler emits. Field
//! names follow the wire format (kebab-case where snapcraft expects it);
//! optional sections are omitted entirely rather than serialized as null.

use crate::bundler::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// Column limit for free-form manifest text.
pub const MANIFEST_LINE_WIDTH: usize = 160;

/// A snapcraft.yaml manifest.
///
/// Built fresh per build invocation, serialized once, then discarded. The
/// manifest always carries exactly one app entry keyed by the executable
/// name and an `app` part; an `extra` part joins it only in
/// ubuntu-app-platform mode.
#[derive(Debug, Clone, Serialize)]
pub struct SnapManifest {
    /// Snap name (the executable name).
    pub name: String,
    /// Application version.
    pub version: String,
    /// One-line summary.
    pub summary: String,
    /// Long description, wrapped at [`MANIFEST_LINE_WIDTH`].
    pub description: String,
    /// Confinement mode: "strict", "devmode", or "classic".
    pub confinement: String,
    /// Quality grade: "stable" or "devel".
    pub grade: String,
    /// Icon path relative to the staging directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// snapd features assumed to be present on the target system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assumes: Option<Vec<String>>,
    /// App entries. Always exactly one, keyed by the executable name.
    pub apps: BTreeMap<String, SnapApp>,
    /// Content-interface plug declarations (ubuntu-app-platform mode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugs: Option<BTreeMap<String, ContentPlug>>,
    /// Build parts describing how inputs are staged.
    pub parts: BTreeMap<String, SnapPart>,
}

impl SnapManifest {
    /// Serializes the manifest to its YAML wire form.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// A single app entry.
#[derive(Debug, Clone, Serialize)]
pub struct SnapApp {
    /// Launch command wrapping the executable.
    pub command: String,
    /// Interface plugs granted to the app.
    pub plugs: Vec<String>,
}

/// A content-interface plug declaration.
#[derive(Debug, Clone, Serialize)]
pub struct ContentPlug {
    /// Interface type, always "content" here.
    pub interface: String,
    /// Content identifier provided by the platform snap.
    pub content: String,
    /// Mount target inside the snap.
    pub target: String,
    /// Snap expected to provide the content.
    #[serde(rename = "default-provider")]
    pub default_provider: String,
}

/// A build part.
#[derive(Debug, Clone, Serialize)]
pub struct SnapPart {
    /// Snapcraft plugin, always "dump" here.
    pub plugin: String,
    /// Native packages staged into the part.
    #[serde(rename = "stage-packages", skip_serializing_if = "Option::is_none")]
    pub stage_packages: Option<Vec<String>>,
    /// Source directory the part is dumped from.
    pub source: String,
    /// Parts and remote parts this part is staged after.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Vec<String>>,
}

/// Greedily wraps free-form text at the given column width.
///
/// Existing line breaks are kept; only overlong lines are re-filled
/// word by word. Words longer than the width land on their own line.
pub fn wrap_text(text: &str, width: usize) -> String {
    let mut lines = Vec::new();

    for input_line in text.lines() {
        if input_line.chars().count() <= width {
            lines.push(input_line.to_string());
            continue;
        }

        let mut current = String::new();
        for word in input_line.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_manifest() -> SnapManifest {
        let mut apps = BTreeMap::new();
        apps.insert(
            "myapp".to_string(),
            SnapApp {
                command: "desktop-launch $SNAP/myapp".to_string(),
                plugs: vec!["home".to_string(), "x11".to_string()],
            },
        );

        let mut parts = BTreeMap::new();
        parts.insert(
            "app".to_string(),
            SnapPart {
                plugin: "dump".to_string(),
                stage_packages: Some(vec!["libnss3".to_string()]),
                source: "/tmp/app".to_string(),
                after: Some(vec!["desktop-glib-only".to_string()]),
            },
        );

        SnapManifest {
            name: "myapp".to_string(),
            version: "1.2.3".to_string(),
            summary: "My app".to_string(),
            description: "Does things.".to_string(),
            confinement: "strict".to_string(),
            grade: "stable".to_string(),
            icon: None,
            assumes: None,
            apps,
            plugs: None,
            parts,
        }
    }

    #[test]
    fn yaml_uses_wire_field_names() {
        let yaml = minimal_manifest().to_yaml().expect("serialize");
        assert!(yaml.contains("stage-packages:"));
        assert!(yaml.contains("command: desktop-launch $SNAP/myapp"));
    }

    #[test]
    fn optional_sections_are_omitted() {
        let yaml = minimal_manifest().to_yaml().expect("serialize");
        assert!(!yaml.contains("icon:"));
        assert!(!yaml.contains("assumes:"));
        assert!(!yaml.contains("plugs:\n  platform"));
    }

    #[test]
    fn content_plug_uses_default_provider_key() {
        let plug = ContentPlug {
            interface: "content".to_string(),
            content: "ubuntu-app-platform1".to_string(),
            target: "ubuntu-app-platform".to_string(),
            default_provider: "ubuntu-app-platform".to_string(),
        };
        let yaml = serde_yaml::to_string(&plug).expect("serialize");
        assert!(yaml.contains("default-provider: ubuntu-app-platform"));
    }

    #[test]
    fn wrap_text_keeps_short_lines() {
        assert_eq!(wrap_text("short line", 160), "short line");
        assert_eq!(wrap_text("a\nb", 160), "a\nb");
    }

    #[test]
    fn wrap_text_fills_long_lines() {
        let long = "word ".repeat(80);
        let wrapped = wrap_text(long.trim(), 20);
        assert!(wrapped.lines().all(|line| line.chars().count() <= 20));
        assert_eq!(wrapped.split_whitespace().count(), 80);
    }
}
