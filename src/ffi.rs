//! Raw FFI types for the LagrangeCodec C API.
//!
//! The library is loaded at runtime, so these are function-pointer type
//! aliases rather than an `extern` block. We hand-write them instead of
//! using bindgen for simplicity and control.

use std::os::raw::{c_int, c_uchar, c_void};

/// Output callback for the audio entry points. The native side invokes it
/// with a transient buffer that is only valid for the duration of the call.
pub type AudioCodecCallback =
    unsafe extern "C" fn(user_data: *mut c_void, data: *const c_uchar, len: c_int);

/// Shared signature of `audio_to_pcm`, `silk_decode`, and `silk_encode`.
/// Returns 0 on success, a native-defined nonzero code on failure.
pub type AudioCodecFn = unsafe extern "C" fn(
    data: *const c_uchar,
    len: c_int,
    callback: AudioCodecCallback,
    user_data: *mut c_void,
) -> c_int;

/// `video_first_frame`: writes a pointer to the first-frame image bytes and
/// its length through the out-params. The buffer is native-owned and
/// transient.
pub type VideoFirstFrameFn = unsafe extern "C" fn(
    data: *const c_uchar,
    len: c_int,
    out_frame: *mut *const c_uchar,
    out_size: *mut c_int,
) -> c_int;

/// `video_get_size`: fills a [`VideoInfo`] in place.
pub type VideoGetSizeFn =
    unsafe extern "C" fn(data: *const c_uchar, len: c_int, info: *mut VideoInfo) -> c_int;

/// Video metadata as laid out by the native library: width at offset 0,
/// height at offset 4, duration (milliseconds) at offset 8.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VideoInfo {
    pub width: i32,
    pub height: i32,
    /// Duration in milliseconds.
    pub duration: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, offset_of, size_of};

    #[test]
    fn video_info_layout_matches_native_abi() {
        assert_eq!(size_of::<VideoInfo>(), 16);
        assert_eq!(align_of::<VideoInfo>(), 8);
        assert_eq!(offset_of!(VideoInfo, width), 0);
        assert_eq!(offset_of!(VideoInfo, height), 4);
        assert_eq!(offset_of!(VideoInfo, duration), 8);
    }
}
