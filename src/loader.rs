//! Materializes the native library to a temporary file and binds its exports.
//!
//! The load sequence (resolve platform, extract, bind symbols) runs at most
//! once per process; all callers share one [`CodecLibrary`].

use std::fs;
use std::path::{Path, PathBuf};

use libloading::Library;
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::codec::CodecFns;
use crate::error::CodecError;
use crate::ffi;
use crate::platform::{self, ResolvedPlatform};
use crate::resource;

/// A library binary written out to its own uniquely-named temporary
/// directory. Dropping it removes the directory, best effort.
pub struct ExtractedLibrary {
    path: PathBuf,
    _dir: tempfile::TempDir,
}

impl ExtractedLibrary {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Copies the library bytes into a fresh temporary directory and, on unix,
/// marks the file executable.
pub fn extract_to_temp(
    platform: &ResolvedPlatform,
    data: &[u8],
) -> Result<ExtractedLibrary, CodecError> {
    let dir = tempfile::Builder::new().prefix("lagrange-codec-").tempdir()?;
    let path = dir.path().join(platform.file_name());
    fs::write(&path, data)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // The dynamic loader needs to map the file; owner keeps write access.
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    }

    debug!(path = %path.display(), bytes = data.len(), "extracted native codec library");
    Ok(ExtractedLibrary { path, _dir: dir })
}

/// A loaded LagrangeCodec library: the resolved exports plus the dlopen
/// handle and extracted file that keep them valid.
///
/// Immutable after load and safe to share across threads; each native call
/// is stateless from the wrapper's perspective. Calls block the calling
/// thread for the duration of the codec operation.
pub struct CodecLibrary {
    pub(crate) fns: CodecFns,
    _lib: Library,
    _extracted: ExtractedLibrary,
}

impl CodecLibrary {
    /// Extracts and loads the library for the given platform from the
    /// provided binary, resolving every export up front so a missing symbol
    /// fails here rather than on first call.
    pub fn load(platform: &ResolvedPlatform, data: &[u8]) -> Result<Self, CodecError> {
        let extracted = extract_to_temp(platform, data)?;
        let lib = unsafe { Library::new(extracted.path()) }
            .map_err(|e| CodecError::Load(format!("{}: {e}", extracted.path().display())))?;

        let sym = |e: libloading::Error, name: &str| CodecError::Load(format!("{name}: {e}"));
        let fns = unsafe {
            CodecFns {
                audio_to_pcm: *lib
                    .get::<ffi::AudioCodecFn>(b"audio_to_pcm\0")
                    .map_err(|e| sym(e, "audio_to_pcm"))?,
                silk_decode: *lib
                    .get::<ffi::AudioCodecFn>(b"silk_decode\0")
                    .map_err(|e| sym(e, "silk_decode"))?,
                silk_encode: *lib
                    .get::<ffi::AudioCodecFn>(b"silk_encode\0")
                    .map_err(|e| sym(e, "silk_encode"))?,
                video_first_frame: *lib
                    .get::<ffi::VideoFirstFrameFn>(b"video_first_frame\0")
                    .map_err(|e| sym(e, "video_first_frame"))?,
                video_get_size: *lib
                    .get::<ffi::VideoGetSizeFn>(b"video_get_size\0")
                    .map_err(|e| sym(e, "video_get_size"))?,
            }
        };

        debug!(tag = platform.tag(), "native codec library loaded");
        Ok(Self {
            fns,
            _lib: lib,
            _extracted: extracted,
        })
    }

    /// Returns the process-wide handle, performing the resolve/extract/load
    /// sequence on first access. Concurrent first callers converge on a
    /// single extraction and the same handle.
    pub fn get() -> Result<&'static CodecLibrary, CodecError> {
        static INSTANCE: OnceCell<CodecLibrary> = OnceCell::new();
        INSTANCE.get_or_try_init(|| {
            let platform = platform::host()?;
            let data = resource::lookup(&platform)?;
            Self::load(&platform, data)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use crate::platform::resolve;

    #[test]
    fn extraction_writes_identical_bytes() {
        let platform = resolve("Linux", "x86_64").unwrap();
        let payload = b"\x7fELF not really a library";
        let extracted = extract_to_temp(&platform, payload).unwrap();

        assert!(extracted.path().ends_with("liblagrangecodec.so"));
        assert_eq!(fs::read(extracted.path()).unwrap(), payload);
    }

    #[cfg(unix)]
    #[test]
    fn extraction_sets_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let platform = resolve("Linux", "aarch64").unwrap();
        let extracted = extract_to_temp(&platform, b"bytes").unwrap();
        let mode = fs::metadata(extracted.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn dropping_extracted_library_removes_the_file() {
        let platform = resolve("Linux", "x86_64").unwrap();
        let extracted = extract_to_temp(&platform, b"bytes").unwrap();
        let path = extracted.path().to_path_buf();
        assert!(path.exists());
        drop(extracted);
        assert!(!path.exists());
    }

    #[test]
    fn each_extraction_gets_a_fresh_directory() {
        let platform = resolve("Linux", "x86_64").unwrap();
        let a = extract_to_temp(&platform, b"a").unwrap();
        let b = extract_to_temp(&platform, b"b").unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn concurrent_first_access_extracts_once() {
        static EXTRACTED: OnceCell<ExtractedLibrary> = OnceCell::new();
        static EXTRACTIONS: AtomicUsize = AtomicUsize::new(0);

        let paths: Vec<PathBuf> = std::thread::scope(|s| {
            (0..8)
                .map(|_| {
                    s.spawn(|| {
                        let lib = EXTRACTED
                            .get_or_try_init(|| {
                                EXTRACTIONS.fetch_add(1, Ordering::SeqCst);
                                let platform = resolve("Linux", "x86_64").unwrap();
                                extract_to_temp(&platform, b"shared")
                            })
                            .unwrap();
                        lib.path().to_path_buf()
                    })
                })
                .collect::<Vec<_>>()
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect()
        });

        assert_eq!(EXTRACTIONS.load(Ordering::SeqCst), 1);
        assert!(paths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn loading_garbage_bytes_fails_with_load_error() {
        let platform = crate::platform::host().unwrap();
        match CodecLibrary::load(&platform, b"these are not the bytes of a shared object") {
            Err(CodecError::Load(_)) => {}
            Ok(_) => panic!("loading garbage unexpectedly succeeded"),
            Err(other) => panic!("expected Load error, got {other:?}"),
        }
    }
}
