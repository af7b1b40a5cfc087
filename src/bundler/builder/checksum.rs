//! Artifact checksum calculation.
//!
//! Provides SHA256 checksum calculation for bundled artifacts.

use crate::{bail, bundler::Result};
use sha2::{Digest, Sha256};
use tokio::io::AsyncReadExt;

/// Calculates SHA256 checksum of an artifact file.
///
/// Reads the file in 8KB chunks to handle large artifacts efficiently.
///
/// # Arguments
///
/// * `path` - Path to the file to hash
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash (64 characters)
/// * `Err` - If the path is not a file or cannot be read
pub async fn calculate_sha256(path: &std::path::Path) -> Result<String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(crate::bundler::Error::IoError)?;
    if !metadata.is_file() {
        bail!("Path is not a file: {}", path.display());
    }

    let mut file = tokio::fs::File::open(path)
        .await
        .map_err(crate::bundler::Error::IoError)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .map_err(crate::bundler::Error::IoError)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hashes_known_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("artifact.snap");
        tokio::fs::write(&path, b"abc").await.expect("write");

        let checksum = calculate_sha256(&path).await.expect("hash");
        assert_eq!(
            checksum,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[tokio::test]
    async fn missing_file_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(calculate_sha256(&dir.path().join("missing")).await.is_err());
    }
}
