//! Snapcraft invocation strategies.
//!
//! Snapcraft only runs on Linux, so non-Linux hosts delegate to a builder
//! container with the staging tree and output directory mounted in. The
//! strategy is chosen once at construction and the rest of the build asks it
//! how to shape source paths and how to execute the tool.

use crate::bundler::error::{Context, Error, Result};
use std::path::Path;
use std::process::Stdio;
use std::sync::LazyLock;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// Mount point of the artifact output directory inside the builder container.
pub const CONTAINER_OUT_DIR: &str = "/out";

/// Check if snapcraft is available for native snap builds.
///
/// Cached result to avoid repeated subprocess calls during bundling.
pub static HAS_SNAPCRAFT: LazyLock<bool> = LazyLock::new(|| match which::which("snapcraft") {
    Ok(path) => {
        log::debug!("Found snapcraft at: {}", path.display());

        match std::process::Command::new(&path).arg("--version").output() {
            Ok(output) if output.status.success() => {
                let version = String::from_utf8_lossy(&output.stdout);
                log::info!("✓ snapcraft available: {}", version.trim());
                true
            }
            Ok(output) => {
                log::warn!(
                    "snapcraft found at {} but --version check failed (exit code: {:?}). \
                         Stderr: {}",
                    path.display(),
                    output.status.code(),
                    String::from_utf8_lossy(&output.stderr)
                );
                false
            }
            Err(e) => {
                log::warn!(
                    "snapcraft found at {} but failed to execute: {}. \
                         Check file permissions.",
                    path.display(),
                    e
                );
                false
            }
        }
    }
    Err(e) => {
        log::debug!("snapcraft not found in PATH: {}", e);
        false
    }
});

/// Builder container image, tagged with this tool's release.
fn builder_image() -> String {
    format!("cyrupai/kodegen-snapcraft:{}", env!("CARGO_PKG_VERSION"))
}

/// One snapcraft invocation, fully resolved.
pub struct SnapcraftInvocation<'a> {
    /// Root of the consuming project (container mount).
    pub project_dir: &'a Path,
    /// Artifact output directory (container mount; also holds staging trees).
    pub out_dir: &'a Path,
    /// Staging directory holding snapcraft.yaml and staged files.
    pub snap_dir: &'a Path,
    /// Debian-style target architecture string.
    pub arch: &'a str,
    /// Artifact file name.
    pub snap_name: &'a str,
    /// Final artifact path on the host.
    pub result_path: &'a Path,
}

/// How snapcraft is executed for this build.
///
/// Selected once per target via [`Snapcraft::detect`]; call sites never
/// branch on the host platform themselves.
pub enum Snapcraft {
    /// Run snapcraft directly on the host.
    Native,
    /// Run snapcraft inside a builder container.
    Container {
        /// Container image to run.
        image: String,
    },
}

impl Snapcraft {
    /// Selects the invocation strategy for the current host.
    ///
    /// Linux hosts run snapcraft natively; all other hosts build inside the
    /// container image shipped for this release.
    pub fn detect() -> Self {
        if cfg!(target_os = "linux") {
            if !*HAS_SNAPCRAFT {
                log::warn!("snapcraft not found in PATH; the snap build will fail when invoked");
            }
            Snapcraft::Native
        } else {
            Snapcraft::Container {
                image: builder_image(),
            }
        }
    }

    /// Whether this strategy executes inside a container.
    ///
    /// Manifest source paths are rewritten to the container mounts when true.
    pub fn in_container(&self) -> bool {
        matches!(self, Snapcraft::Container { .. })
    }

    /// Executes snapcraft for the given invocation.
    ///
    /// Blocks until the tool exits; its own success/failure signal is the
    /// only completion event, no timeout is imposed.
    pub async fn run(&self, invocation: &SnapcraftInvocation<'_>) -> Result<()> {
        match self {
            Snapcraft::Native => run_native(invocation).await,
            Snapcraft::Container { image } => run_container(image, invocation).await,
        }
    }
}

/// Runs snapcraft directly from the staging directory.
///
/// Standard output is streamed through for visibility; standard error is
/// captured and included in the failure message on non-zero exit.
async fn run_native(invocation: &SnapcraftInvocation<'_>) -> Result<()> {
    let result_path = invocation
        .result_path
        .to_str()
        .context("result path contains invalid UTF-8")?;

    let mut child = Command::new("snapcraft")
        .args(["snap", "--target-arch", invocation.arch, "-o", result_path])
        .current_dir(invocation.snap_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::CommandFailed {
            command: "snapcraft".to_string(),
            error: e,
        })?;

    let stderr = child.stderr.take();

    // Drain stderr while waiting so the pipe cannot fill up and stall the tool
    let (status, stderr_lines) = tokio::join!(child.wait(), async {
        let mut captured_lines = Vec::new();
        if let Some(stderr) = stderr {
            let reader = BufReader::new(stderr);
            let mut lines = reader.lines();
            while let Ok(Some(line)) = lines.next_line().await {
                captured_lines.push(line);
            }
        }
        captured_lines
    });

    let status = status.map_err(Error::IoError)?;
    if !status.success() {
        return Err(Error::ToolFailed {
            tool: "snapcraft".to_string(),
            code: status.code(),
            stderr: stderr_lines.join("\n"),
        });
    }

    Ok(())
}

/// Runs snapcraft inside the builder container.
///
/// Mounts the project directory, the user's config directory, and the output
/// directory, copies the staged tree into the container, and writes the
/// result back through the output mount. Output streams are inherited so the
/// tool's progress stays visible.
async fn run_container(image: &str, invocation: &SnapcraftInvocation<'_>) -> Result<()> {
    let snap_dir_name = invocation
        .snap_dir
        .file_name()
        .and_then(|name| name.to_str())
        .context("staging directory has no usable name")?;

    let home = dirs::home_dir().context("cannot determine home directory")?;

    let script = format!(
        "snapcraft --version && cp -R {out}/{snap_dir_name} /s/ && cd /s && \
         snapcraft snap --target-arch {arch} -o {out}/{snap_name}",
        out = CONTAINER_OUT_DIR,
        arch = invocation.arch,
        snap_name = invocation.snap_name,
    );

    let project_mount = format!("{}:/project", invocation.project_dir.display());
    let config_mount = format!("{}:/root/.kodegen", home.join(".kodegen").display());
    let out_mount = format!("{}:{}", invocation.out_dir.display(), CONTAINER_OUT_DIR);

    let status = Command::new("docker")
        .args([
            "run",
            "--rm",
            "-v",
            project_mount.as_str(),
            "-v",
            config_mount.as_str(),
            "-v",
            out_mount.as_str(),
            image,
            "/bin/bash",
            "-c",
            script.as_str(),
        ])
        .current_dir(invocation.project_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| Error::CommandFailed {
            command: "docker".to_string(),
            error: e,
        })?;

    if !status.success() {
        return Err(Error::ToolFailed {
            tool: "docker".to_string(),
            code: status.code(),
            stderr: String::new(),
        });
    }

    Ok(())
}
