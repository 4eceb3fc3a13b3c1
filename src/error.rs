use thiserror::Error;

/// Errors returned by codec operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The host OS/architecture has no prebuilt library variant.
    #[error("codec: unsupported platform: os={os:?} arch={arch:?}")]
    UnsupportedPlatform { os: String, arch: String },

    /// The library binary for a recognized platform is not registered.
    /// Indicates a packaging defect, not a runtime condition.
    #[error("codec: library resource {0:?} not found")]
    ResourceNotFound(String),

    #[error("codec: {0}")]
    Io(#[from] std::io::Error),

    /// dlopen or symbol resolution failed.
    #[error("codec: {0}")]
    Load(String),

    /// Nonzero status from a native entry point, passed through verbatim.
    #[error("codec: {func} failed with status {code}")]
    Native { func: &'static str, code: i32 },

    #[error("codec: empty data")]
    EmptyData,
}
