//! Integration tests for snap staging and manifest assembly.
//!
//! The manifest hook is used to observe fully-built manifests without
//! invoking snapcraft, so these tests run on machines without the tool.

use kodegen_bundler_snap::bundler::platform::linux::snap::{DEFAULT_PLUGS, Snapcraft};
use kodegen_bundler_snap::bundler::{
    Arch, BundleBinary, BundleSettings, Bundler, Error, PackageSettings, Settings,
    SettingsBuilder, SnapManifest, SnapSettings, SnapTarget,
};
use std::path::Path;
use std::sync::{Arc, Mutex};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

async fn make_app_dir(root: &Path) -> std::path::PathBuf {
    let app_dir = root.join("linux-unpacked");
    tokio::fs::create_dir_all(&app_dir).await.expect("app dir");
    tokio::fs::write(app_dir.join("myapp"), b"#!/bin/sh\n")
        .await
        .expect("app binary");
    app_dir
}

fn make_settings(root: &Path, app_dir: &Path, snap: SnapSettings) -> Settings {
    SettingsBuilder::new()
        .app_directory(app_dir)
        .project_out_directory(root.join("out"))
        .project_directory(root)
        .package_settings(PackageSettings {
            product_name: "Mock App".into(),
            version: "1.2.3".into(),
            description: "Mock desktop application.".into(),
            ..Default::default()
        })
        .bundle_settings(BundleSettings {
            category: Some("Utility".into()),
            snap,
            ..Default::default()
        })
        .binaries(vec![BundleBinary::new("myapp".into(), true)])
        .target("x86_64-unknown-linux-gnu".into())
        .build()
        .expect("settings")
}

/// Runs a build with an intercepting hook, returning the captured manifest.
async fn captured_manifest(
    settings: &Settings,
    runner: Snapcraft,
    arch: Arch,
) -> Option<SnapManifest> {
    let captured: Arc<Mutex<Option<SnapManifest>>> = Arc::default();
    let sink = Arc::clone(&captured);

    let target =
        SnapTarget::with_runner(settings, runner).with_hook(move |manifest: &SnapManifest| {
            *sink.lock().expect("hook lock") = Some(manifest.clone());
            true
        });

    let outcome = target
        .build(settings.app_directory(), arch)
        .await
        .expect("build");
    assert!(outcome.is_none(), "handled manifest must not yield an artifact");

    captured.lock().expect("hook lock").take()
}

#[tokio::test]
async fn default_manifest_without_platform_content() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app_dir = make_app_dir(dir.path()).await;
    let settings = make_settings(dir.path(), &app_dir, SnapSettings::default());

    let manifest = captured_manifest(&settings, Snapcraft::Native, Arch::X86_64)
        .await
        .expect("manifest captured");

    assert_eq!(manifest.name, "myapp");
    assert_eq!(manifest.version, "1.2.3");
    assert_eq!(manifest.summary, "Mock App");
    assert_eq!(manifest.confinement, "strict");
    assert_eq!(manifest.grade, "stable");

    assert_eq!(manifest.apps.len(), 1);
    let app = manifest.apps.get("myapp").expect("app entry");
    assert_eq!(app.command, "desktop-launch $SNAP/myapp");
    assert_eq!(app.plugs, strings(DEFAULT_PLUGS));

    assert_eq!(manifest.parts.len(), 1);
    let part = manifest.parts.get("app").expect("app part");
    assert_eq!(part.plugin, "dump");
    assert_eq!(part.source, app_dir.display().to_string());
    assert_eq!(part.after, Some(strings(&["desktop-glib-only"])));
    assert!(manifest.plugs.is_none());

    // Hook fires after staging but before the manifest is written
    let staging = dir.path().join("linux-unpacked-snap");
    assert!(staging.join("setup/gui/myapp.desktop").exists());
    assert!(!staging.join("snapcraft.yaml").exists());
}

#[tokio::test]
async fn platform_content_adds_extra_part_and_platform_plug() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app_dir = make_app_dir(dir.path()).await;
    let settings = make_settings(
        dir.path(),
        &app_dir,
        SnapSettings {
            ubuntu_app_platform_content: Some(toml::Value::String(
                "ubuntu-app-platform1".into(),
            )),
            ..Default::default()
        },
    );

    let manifest = captured_manifest(&settings, Snapcraft::Native, Arch::X86_64)
        .await
        .expect("manifest captured");

    let app = manifest.apps.get("myapp").expect("app entry");
    assert!(app.plugs.contains(&"platform".to_string()));

    assert_eq!(manifest.parts.len(), 2);
    let app_part = manifest.parts.get("app").expect("app part");
    assert_eq!(
        app_part.after,
        Some(strings(&["extra", "desktop-ubuntu-app-platform"]))
    );
    assert_eq!(
        app_part.stage_packages,
        Some(strings(&["libnss3"])),
        "platform mode stages the reduced package list"
    );

    let extra_part = manifest.parts.get("extra").expect("extra part");
    assert_eq!(extra_part.plugin, "dump");
    assert!(extra_part.stage_packages.is_none());
    assert!(extra_part.after.is_none());

    let declarations = manifest.plugs.expect("plug declarations");
    let platform = declarations.get("platform").expect("platform plug");
    assert_eq!(platform.interface, "content");
    assert_eq!(platform.content, "ubuntu-app-platform1");
    assert_eq!(platform.default_provider, "ubuntu-app-platform");

    // The reserved content directory exists and stays empty
    let platform_dir = dir
        .path()
        .join("linux-unpacked-snap/.extra/ubuntu-app-platform");
    assert!(platform_dir.is_dir());
    let mut entries = tokio::fs::read_dir(&platform_dir).await.expect("read dir");
    assert!(entries.next_entry().await.expect("entry").is_none());
}

#[tokio::test]
async fn container_runner_rewrites_part_sources() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app_dir = make_app_dir(dir.path()).await;
    let settings = make_settings(
        dir.path(),
        &app_dir,
        SnapSettings {
            ubuntu_app_platform_content: Some(toml::Value::Boolean(true)),
            ..Default::default()
        },
    );

    let runner = Snapcraft::Container {
        image: "cyrupai/kodegen-snapcraft:test".into(),
    };
    let manifest = captured_manifest(&settings, runner, Arch::AArch64)
        .await
        .expect("manifest captured");

    assert_eq!(manifest.parts["app"].source, "/out/linux-unpacked");
    assert_eq!(
        manifest.parts["extra"].source,
        "/out/linux-unpacked-snap/.extra"
    );
}

#[tokio::test]
async fn user_lists_override_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app_dir = make_app_dir(dir.path()).await;
    let settings = make_settings(
        dir.path(),
        &app_dir,
        SnapSettings {
            plugs: Some(strings(&["camera", "default"])),
            stage_packages: Some(strings(&["libfoo1"])),
            ..Default::default()
        },
    );

    let manifest = captured_manifest(&settings, Snapcraft::Native, Arch::X86_64)
        .await
        .expect("manifest captured");

    let app = manifest.apps.get("myapp").expect("app entry");
    let mut expected = strings(&["camera"]);
    expected.extend(strings(DEFAULT_PLUGS));
    assert_eq!(app.plugs, expected);

    assert_eq!(
        manifest.parts["app"].stage_packages,
        Some(strings(&["libfoo1"])),
        "a list without the sentinel suppresses the defaults"
    );
}

#[tokio::test]
async fn invalid_assumes_fails_before_manifest_write() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app_dir = make_app_dir(dir.path()).await;
    let settings = make_settings(
        dir.path(),
        &app_dir,
        SnapSettings {
            assumes: Some(toml::Value::String("not-a-list".into())),
            ..Default::default()
        },
    );

    let target = SnapTarget::with_runner(&settings, Snapcraft::Native);
    let err = target
        .build(settings.app_directory(), Arch::X86_64)
        .await
        .expect_err("non-list assumes must fail");
    assert!(matches!(err, Error::ValidationError(_)), "got: {err}");

    // No manifest was written, and snapcraft never ran
    let staging = dir.path().join("linux-unpacked-snap");
    assert!(!staging.join("snapcraft.yaml").exists());
    assert!(!dir.path().join("out").join("myapp_1.2.3_amd64.snap").exists());
}

#[tokio::test]
async fn valid_assumes_lands_in_manifest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app_dir = make_app_dir(dir.path()).await;
    let settings = make_settings(
        dir.path(),
        &app_dir,
        SnapSettings {
            assumes: Some(toml::Value::Array(vec![
                toml::Value::String("command-chain".into()),
            ])),
            ..Default::default()
        },
    );

    let manifest = captured_manifest(&settings, Snapcraft::Native, Arch::X86_64)
        .await
        .expect("manifest captured");
    assert_eq!(manifest.assumes, Some(strings(&["command-chain"])));
}

#[tokio::test]
async fn icon_is_staged_and_recorded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app_dir = make_app_dir(dir.path()).await;

    let small_icon = dir.path().join("icon_32x32.png");
    let big_icon = dir.path().join("icon_512x512.png");
    tokio::fs::write(&small_icon, vec![0u8; 64]).await.expect("icon");
    tokio::fs::write(&big_icon, vec![0u8; 4096]).await.expect("icon");

    let settings = SettingsBuilder::new()
        .app_directory(&app_dir)
        .project_out_directory(dir.path().join("out"))
        .project_directory(dir.path())
        .package_settings(PackageSettings {
            product_name: "Mock App".into(),
            version: "1.2.3".into(),
            description: "Mock desktop application.".into(),
            ..Default::default()
        })
        .bundle_settings(BundleSettings {
            icon: Some(vec![small_icon, big_icon]),
            ..Default::default()
        })
        .binaries(vec![BundleBinary::new("myapp".into(), true)])
        .target("x86_64-unknown-linux-gnu".into())
        .build()
        .expect("settings");

    let manifest = captured_manifest(&settings, Snapcraft::Native, Arch::X86_64)
        .await
        .expect("manifest captured");
    assert_eq!(manifest.icon.as_deref(), Some("setup/gui/icon.png"));

    let staged = dir.path().join("linux-unpacked-snap/setup/gui/icon.png");
    let staged_len = tokio::fs::metadata(&staged).await.expect("staged icon").len();
    assert_eq!(staged_len, 4096, "the largest PNG wins");
}

#[tokio::test]
async fn bundler_reports_nothing_for_handled_manifests() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app_dir = make_app_dir(dir.path()).await;
    let settings = make_settings(dir.path(), &app_dir, SnapSettings::default());

    let bundler = Bundler::new(settings);
    let target = SnapTarget::with_runner(bundler.settings(), Snapcraft::Native)
        .with_hook(|_: &SnapManifest| true);

    let artifacts = bundler.bundle_with(&target).await.expect("bundle");
    assert!(artifacts.is_empty());
}

#[test]
fn fixture_metadata_round_trips_through_loader() {
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/Cargo.toml");
    let manifest = kodegen_bundler_snap::metadata::load_manifest(&fixture).expect("load");

    assert_eq!(manifest.metadata.name, "mock-app");
    assert_eq!(manifest.metadata.version, "1.2.3");
    assert_eq!(manifest.binary_name, "mock-app");

    let snap = &manifest.bundle_settings.snap;
    assert_eq!(snap.summary.as_deref(), Some("Mock application"));
    assert_eq!(snap.grade.as_deref(), Some("devel"));
    assert_eq!(
        snap.plugs.as_deref(),
        Some(&strings(&["default", "removable-media"])[..])
    );
    assert_eq!(snap.stage_packages.as_deref(), Some(&strings(&["default"])[..]));
}
