//! Built-in option lists and the `"default"` sentinel expansion rule.

/// Sentinel entry that expands to the built-in default list.
pub const DEFAULT_SENTINEL: &str = "default";

/// Interface plugs granted to the app when none are configured.
pub const DEFAULT_PLUGS: &[&str] = &[
    "home",
    "x11",
    "unity7",
    "browser-support",
    "network",
    "gsettings",
    "pulseaudio",
    "opengl",
];

/// Native packages staged into a self-contained snap.
///
/// libxss1, libasound2, gconf2 - was "error while loading shared libraries:
/// libXss.so.1" on Xubuntu 16.04
pub const DEFAULT_STAGE_PACKAGES: &[&str] = &[
    "libnotify4",
    "libappindicator1",
    "libxtst6",
    "libnss3",
    "libxss1",
    "fontconfig-config",
    "gconf2",
    "libasound2",
    "pulseaudio",
];

/// Native packages staged when the ubuntu-app-platform content interface
/// supplies the desktop libraries.
pub const UBUNTU_PLATFORM_STAGE_PACKAGES: &[&str] = &["libnss3"];

/// Resolves a user-supplied list against a built-in default list.
///
/// - Absent input returns the defaults unchanged.
/// - Input containing the `"default"` sentinel has the defaults spliced in at
///   the sentinel's position, keeping surrounding entries in order.
/// - Input without the sentinel is returned as-is (defaults suppressed).
///
/// Applies identically to the plug list and the stage-package list.
pub fn replace_default(user: Option<&[String]>, defaults: &[&str]) -> Vec<String> {
    let Some(user) = user else {
        return defaults.iter().map(ToString::to_string).collect();
    };

    match user.iter().position(|entry| entry == DEFAULT_SENTINEL) {
        Some(index) => {
            let mut list: Vec<String> = user[..index].to_vec();
            list.extend(defaults.iter().map(ToString::to_string));
            list.extend_from_slice(&user[index + 1..]);
            list
        }
        None => user.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn absent_list_yields_defaults() {
        let resolved = replace_default(None, DEFAULT_PLUGS);
        assert_eq!(resolved, strings(DEFAULT_PLUGS));
    }

    #[test]
    fn list_without_sentinel_suppresses_defaults() {
        let user = strings(&["camera", "removable-media"]);
        let resolved = replace_default(Some(&user), DEFAULT_PLUGS);
        assert_eq!(resolved, user);
    }

    #[test]
    fn sentinel_expands_in_place() {
        let user = strings(&["camera", "default", "removable-media"]);
        let resolved = replace_default(Some(&user), &["a", "b"]);
        assert_eq!(resolved, strings(&["camera", "a", "b", "removable-media"]));
    }

    #[test]
    fn sentinel_at_start_and_end() {
        let user = strings(&["default", "camera"]);
        assert_eq!(
            replace_default(Some(&user), &["a"]),
            strings(&["a", "camera"])
        );

        let user = strings(&["camera", "default"]);
        assert_eq!(
            replace_default(Some(&user), &["a"]),
            strings(&["camera", "a"])
        );
    }

    #[test]
    fn sentinel_is_not_duplicated() {
        let user = strings(&["default"]);
        let resolved = replace_default(Some(&user), DEFAULT_PLUGS);
        assert_eq!(resolved, strings(DEFAULT_PLUGS));
        assert!(!resolved.iter().any(|entry| entry == DEFAULT_SENTINEL));
    }

    #[test]
    fn only_first_sentinel_expands() {
        let user = strings(&["default", "x", "default"]);
        let resolved = replace_default(Some(&user), &["a"]);
        assert_eq!(resolved, strings(&["a", "x", "default"]));
    }
}
