//! Library resource registry: prebuilt native binaries keyed by platform tag.
//!
//! The binaries are normally registered at startup from embedded data (see
//! `embed.rs`), but callers may register bytes obtained any other way, e.g.
//! for a platform added after this crate shipped.

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::error::CodecError;
use crate::platform::ResolvedPlatform;

/// A registered prebuilt library binary.
pub struct ResourceInfo {
    pub tag: String,
    pub data: &'static [u8],
}

static REGISTRY: Lazy<Mutex<HashMap<String, ResourceInfo>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// Registers a library binary for the given platform tag.
/// Registering the same tag twice replaces the previous registration.
pub fn register_library(tag: &str, data: &'static [u8]) {
    let mut reg = REGISTRY.lock().unwrap();
    reg.insert(
        tag.to_string(),
        ResourceInfo {
            tag: tag.to_string(),
            data,
        },
    );
}

/// Looks up the registered binary for a resolved platform.
pub(crate) fn lookup(platform: &ResolvedPlatform) -> Result<&'static [u8], CodecError> {
    let reg = REGISTRY.lock().unwrap();
    reg.get(platform.tag())
        .map(|info| info.data)
        .ok_or_else(|| CodecError::ResourceNotFound(platform.resource_path()))
}

/// Returns the tags of all registered library binaries.
pub fn list_libraries() -> Vec<String> {
    let reg = REGISTRY.lock().unwrap();
    reg.values().map(|info| info.tag.clone()).collect()
}

/// Returns true if a binary is registered for the tag.
pub fn is_registered(tag: &str) -> bool {
    let reg = REGISTRY.lock().unwrap();
    reg.contains_key(tag)
}
