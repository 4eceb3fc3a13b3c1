//! Embedded prebuilt library binaries.
//!
//! With the `embed-libs` feature enabled, the six platform binaries under
//! `lib/<platform>/` at the repository root are embedded at compile time via
//! `include_bytes!`. Call [`register_embedded_libraries`] once at startup to
//! make them available to the loader. The feature is off by default so the
//! crate builds without the binaries present.

use crate::resource::register_library;

static WINDOWS_X64: &[u8] = include_bytes!("../lib/windows-x64/lagrangecodec.dll");
static WINDOWS_X86: &[u8] = include_bytes!("../lib/windows-x86/lagrangecodec.dll");
static MACOS_ARM64: &[u8] = include_bytes!("../lib/macos-arm64/liblagrangecodec.dylib");
static MACOS_X64: &[u8] = include_bytes!("../lib/macos-x64/liblagrangecodec.dylib");
static LINUX_ARM64: &[u8] = include_bytes!("../lib/linux-arm64/liblagrangecodec.so");
static LINUX_X64: &[u8] = include_bytes!("../lib/linux-x64/liblagrangecodec.so");

/// Registers all embedded library binaries.
pub fn register_embedded_libraries() {
    register_library("windows-x64", WINDOWS_X64);
    register_library("windows-x86", WINDOWS_X86);
    register_library("macos-arm64", MACOS_ARM64);
    register_library("macos-x64", MACOS_X64);
    register_library("linux-arm64", LINUX_ARM64);
    register_library("linux-x64", LINUX_X64);
}
