//! Rust bindings for the LagrangeCodec native audio/video codec library.
//!
//! LagrangeCodec ships as a prebuilt shared library per platform, exposing
//! audio PCM conversion, SILK encode/decode, and video first-frame/metadata
//! extraction. This crate selects the right binary for the host, extracts it
//! to a private temporary file, loads it, and wraps its entry points in safe
//! functions that return owned buffers.
//!
//! # Usage
//!
//! ```no_run
//! static LINUX_X64: &[u8] = &[]; // prebuilt liblagrangecodec.so bytes
//!
//! lagrange_codec::register_library("linux-x64", LINUX_X64);
//! let silk = std::fs::read("voice.silk").unwrap();
//! let pcm = lagrange_codec::silk_decode(&silk).unwrap();
//! ```
//!
//! With the `embed-libs` feature, `register_embedded_libraries()` registers
//! all six binaries bundled under `lib/<platform>/` instead.
//!
//! # Loading
//!
//! The resolve/extract/load sequence runs at most once per process; the
//! temporary file is removed on a best-effort basis when the process exits.
//! An unsupported host or a missing binary for a recognized platform is a
//! terminal error ([`CodecError::UnsupportedPlatform`],
//! [`CodecError::ResourceNotFound`]).
//!
//! # Thread safety
//!
//! The loaded library handle is immutable and shared; calls are stateless
//! from the wrapper's perspective and may run concurrently. A native call
//! blocks its thread until the codec operation finishes — callers needing
//! bounded latency should run it on a dedicated worker.

mod codec;
mod error;
#[cfg(feature = "embed-libs")]
mod embed;
mod ffi;
mod loader;
mod platform;
mod resource;

pub use codec::{audio_to_pcm, silk_decode, silk_encode, video_first_frame, video_get_size};
#[cfg(feature = "embed-libs")]
pub use embed::register_embedded_libraries;
pub use error::CodecError;
pub use ffi::VideoInfo;
pub use loader::{CodecLibrary, ExtractedLibrary, extract_to_temp};
pub use platform::{ResolvedPlatform, host, resolve};
pub use resource::{is_registered, list_libraries, register_library};
