//! CPU architecture types and utilities.

/// CPU architecture for target binaries.
///
/// Represents the architecture a snap is built for. The architecture is
/// detected from the host by default and may be overridden per invocation
/// for cross-builds via snapcraft's `--target-arch`.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_snap::bundler::Arch;
///
/// let arch = Arch::X86_64;
/// assert_eq!(arch.linux_arch_string(), "amd64");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit) - Most common desktop/server architecture
    X86_64,
    /// x86 / i686 (32-bit) - Legacy 32-bit Intel
    X86,
    /// AArch64 / ARM64 (64-bit) - Apple Silicon, modern ARM devices
    AArch64,
    /// ARM with hard-float (32-bit) - Raspberry Pi and embedded ARM
    Armhf,
    /// ARM with soft-float (32-bit) - Older embedded ARM devices
    Armel,
    /// RISC-V (64-bit) - Emerging open architecture
    Riscv64,
}

impl Arch {
    /// Returns the Debian-style architecture string used by snapcraft's
    /// `--target-arch` flag and in snap filenames.
    pub fn linux_arch_string(&self) -> &'static str {
        match self {
            Arch::X86_64 => "amd64",
            Arch::X86 => "i386",
            Arch::AArch64 => "arm64",
            Arch::Armhf => "armhf",
            Arch::Armel => "armel",
            Arch::Riscv64 => "riscv64",
        }
    }

    /// Parses a Debian-style architecture string.
    pub fn from_linux_arch_string(s: &str) -> Option<Self> {
        match s {
            "amd64" => Some(Arch::X86_64),
            "i386" => Some(Arch::X86),
            "arm64" => Some(Arch::AArch64),
            "armhf" => Some(Arch::Armhf),
            "armel" => Some(Arch::Armel),
            "riscv64" => Some(Arch::Riscv64),
            _ => None,
        }
    }

    /// Detects the architecture from a Rust target triple prefix.
    pub fn from_target(target: &str) -> Self {
        if target.starts_with("x86_64") {
            Arch::X86_64
        } else if target.starts_with('i') {
            Arch::X86
        } else if target.starts_with("aarch64") {
            Arch::AArch64
        } else if target.starts_with("arm") && target.ends_with("hf") {
            Arch::Armhf
        } else if target.starts_with("arm") {
            Arch::Armel
        } else if target.starts_with("riscv64") {
            Arch::Riscv64
        } else {
            Arch::X86_64 // fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arch_strings_follow_debian_convention() {
        assert_eq!(Arch::X86_64.linux_arch_string(), "amd64");
        assert_eq!(Arch::X86.linux_arch_string(), "i386");
        assert_eq!(Arch::AArch64.linux_arch_string(), "arm64");
        assert_eq!(Arch::Armhf.linux_arch_string(), "armhf");
    }

    #[test]
    fn arch_string_round_trips() {
        for arch in [
            Arch::X86_64,
            Arch::X86,
            Arch::AArch64,
            Arch::Armhf,
            Arch::Armel,
            Arch::Riscv64,
        ] {
            assert_eq!(
                Arch::from_linux_arch_string(arch.linux_arch_string()),
                Some(arch)
            );
        }
        assert_eq!(Arch::from_linux_arch_string("sparc"), None);
    }

    #[test]
    fn target_triple_detection() {
        assert_eq!(Arch::from_target("x86_64-unknown-linux-gnu"), Arch::X86_64);
        assert_eq!(Arch::from_target("aarch64-apple-darwin"), Arch::AArch64);
        assert_eq!(
            Arch::from_target("armv7-unknown-linux-gnueabihf"),
            Arch::Armhf
        );
        assert_eq!(Arch::from_target("arm-unknown-linux-gnueabi"), Arch::Armel);
    }
}
