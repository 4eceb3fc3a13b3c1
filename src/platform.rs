//! Platform resolution: maps an OS/architecture pair to the prebuilt
//! native library variant.

use crate::error::CodecError;

const DLL: &str = "lagrangecodec.dll";
const DYLIB: &str = "liblagrangecodec.dylib";
const SO: &str = "liblagrangecodec.so";

/// A supported OS+architecture combination and its library file name.
///
/// The tag is one of `windows-x64`, `windows-x86`, `macos-arm64`,
/// `macos-x64`, `linux-arm64`, `linux-x64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPlatform {
    tag: &'static str,
    file_name: &'static str,
}

impl ResolvedPlatform {
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    /// Path of the library binary within the bundled resource layout.
    pub fn resource_path(&self) -> String {
        format!("lib/{}/{}", self.tag, self.file_name)
    }
}

/// Resolves a platform from raw OS and architecture identifiers.
///
/// Matching is case-insensitive substring testing, first match wins.
/// Windows on any arch not containing "64" maps to `windows-x86`; there is
/// no distinct ARM-Windows variant.
pub fn resolve(os: &str, arch: &str) -> Result<ResolvedPlatform, CodecError> {
    let os_l = os.to_lowercase();
    let arch_l = arch.to_lowercase();

    if os_l.contains("win") {
        let tag = if arch_l.contains("64") { "windows-x64" } else { "windows-x86" };
        return Ok(ResolvedPlatform { tag, file_name: DLL });
    }

    if os_l.contains("mac") {
        let tag = if arch_l.contains("aarch64") || arch_l.contains("arm64") {
            "macos-arm64"
        } else {
            "macos-x64"
        };
        return Ok(ResolvedPlatform { tag, file_name: DYLIB });
    }

    if os_l.contains("nux") || os_l.contains("nix") {
        let tag = if arch_l.contains("aarch64") || arch_l.contains("arm64") {
            "linux-arm64"
        } else if arch_l.contains("x86_64") || arch_l.contains("amd64") {
            "linux-x64"
        } else {
            return Err(unsupported(os, arch));
        };
        return Ok(ResolvedPlatform { tag, file_name: SO });
    }

    Err(unsupported(os, arch))
}

/// Resolves the platform this crate was compiled for.
pub fn host() -> Result<ResolvedPlatform, CodecError> {
    resolve(std::env::consts::OS, std::env::consts::ARCH)
}

fn unsupported(os: &str, arch: &str) -> CodecError {
    CodecError::UnsupportedPlatform {
        os: os.to_string(),
        arch: arch.to_string(),
    }
}
