//! Safe wrappers over the native codec entry points.
//!
//! Native output buffers are transient: they are only valid while the call
//! is on the stack. Every wrapper copies the output into an owned `Vec`
//! before returning, so callers never hold a reference to native memory.
//! Nonzero native status codes are passed through untouched as
//! [`CodecError::Native`].

use std::os::raw::{c_int, c_uchar, c_void};
use std::ptr;
use std::slice;

use crate::error::CodecError;
use crate::ffi::{self, VideoInfo};
use crate::loader::CodecLibrary;

/// The five exports of the native library, resolved at load time.
/// Plain function pointers, so copies stay valid as long as the owning
/// `Library` is alive.
pub(crate) struct CodecFns {
    pub(crate) audio_to_pcm: ffi::AudioCodecFn,
    pub(crate) silk_decode: ffi::AudioCodecFn,
    pub(crate) silk_encode: ffi::AudioCodecFn,
    pub(crate) video_first_frame: ffi::VideoFirstFrameFn,
    pub(crate) video_get_size: ffi::VideoGetSizeFn,
}

/// Trampoline handed to the callback-based entry points. Appends the
/// transient native buffer to the `Vec<u8>` behind `user_data`. Must not
/// unwind into the native caller.
unsafe extern "C" fn collect(user_data: *mut c_void, data: *const c_uchar, len: c_int) {
    if data.is_null() || len <= 0 {
        return;
    }
    let out = unsafe { &mut *(user_data as *mut Vec<u8>) };
    out.extend_from_slice(unsafe { slice::from_raw_parts(data, len as usize) });
}

impl CodecFns {
    fn call_audio(
        &self,
        func: &'static str,
        f: ffi::AudioCodecFn,
        data: &[u8],
    ) -> Result<Vec<u8>, CodecError> {
        if data.is_empty() {
            return Err(CodecError::EmptyData);
        }
        let mut out: Vec<u8> = Vec::new();
        let code = unsafe {
            f(
                data.as_ptr(),
                data.len() as c_int,
                collect,
                &mut out as *mut Vec<u8> as *mut c_void,
            )
        };
        if code != 0 {
            return Err(CodecError::Native { func, code });
        }
        Ok(out)
    }

    pub(crate) fn audio_to_pcm(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        self.call_audio("audio_to_pcm", self.audio_to_pcm, data)
    }

    pub(crate) fn silk_decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        self.call_audio("silk_decode", self.silk_decode, data)
    }

    pub(crate) fn silk_encode(&self, pcm: &[u8]) -> Result<Vec<u8>, CodecError> {
        self.call_audio("silk_encode", self.silk_encode, pcm)
    }

    pub(crate) fn video_first_frame(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        if data.is_empty() {
            return Err(CodecError::EmptyData);
        }
        let mut frame: *const c_uchar = ptr::null();
        let mut size: c_int = 0;
        let code = unsafe {
            (self.video_first_frame)(data.as_ptr(), data.len() as c_int, &mut frame, &mut size)
        };
        if code != 0 {
            return Err(CodecError::Native {
                func: "video_first_frame",
                code,
            });
        }
        if frame.is_null() || size <= 0 {
            return Ok(Vec::new());
        }
        // Copy out before returning; the native buffer dies with this call.
        Ok(unsafe { slice::from_raw_parts(frame, size as usize) }.to_vec())
    }

    pub(crate) fn video_get_size(&self, data: &[u8]) -> Result<VideoInfo, CodecError> {
        if data.is_empty() {
            return Err(CodecError::EmptyData);
        }
        let mut info = VideoInfo::default();
        let code =
            unsafe { (self.video_get_size)(data.as_ptr(), data.len() as c_int, &mut info) };
        if code != 0 {
            return Err(CodecError::Native {
                func: "video_get_size",
                code,
            });
        }
        Ok(info)
    }
}

impl CodecLibrary {
    /// Converts compressed audio (any container the native library accepts)
    /// to raw PCM.
    pub fn audio_to_pcm(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        self.fns.audio_to_pcm(data)
    }

    /// Decodes SILK-encoded audio to PCM.
    pub fn silk_decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        self.fns.silk_decode(data)
    }

    /// Encodes PCM audio to SILK.
    pub fn silk_encode(&self, pcm: &[u8]) -> Result<Vec<u8>, CodecError> {
        self.fns.silk_encode(pcm)
    }

    /// Extracts the first frame of a video container as encoded image bytes.
    pub fn video_first_frame(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        self.fns.video_first_frame(data)
    }

    /// Reads width, height, and duration from a video container.
    pub fn video_get_size(&self, data: &[u8]) -> Result<VideoInfo, CodecError> {
        self.fns.video_get_size(data)
    }
}

// Free-function surface over the process-wide handle.

/// Converts compressed audio to raw PCM using the process-wide library.
pub fn audio_to_pcm(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    CodecLibrary::get()?.audio_to_pcm(data)
}

/// Decodes SILK-encoded audio to PCM using the process-wide library.
pub fn silk_decode(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    CodecLibrary::get()?.silk_decode(data)
}

/// Encodes PCM audio to SILK using the process-wide library.
pub fn silk_encode(pcm: &[u8]) -> Result<Vec<u8>, CodecError> {
    CodecLibrary::get()?.silk_encode(pcm)
}

/// Extracts the first frame of a video using the process-wide library.
pub fn video_first_frame(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    CodecLibrary::get()?.video_first_frame(data)
}

/// Reads video metadata using the process-wide library.
pub fn video_get_size(data: &[u8]) -> Result<VideoInfo, CodecError> {
    CodecLibrary::get()?.video_get_size(data)
}
