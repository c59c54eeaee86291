use thiserror::Error;

use crate::controller::Handle;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown instance handle {0:?}")]
    InvalidHandle(Handle),

    #[error("grid instance is not initialized")]
    NotInitialized,

    #[error("region at byte {offset} with {len} elements of {elem_size} bytes is outside linear memory ({size} bytes)")]
    OutOfBounds {
        offset: u32,
        len: u32,
        elem_size: usize,
        size: usize,
    },

    #[error("region was written at generation {region} but memory is at generation {memory}")]
    StaleRegion { region: u32, memory: u32 },

    #[error("element of {size} bytes cannot be stored in 4-byte linear memory")]
    Unaligned { size: usize },

    #[error("invalid grid config: {0}")]
    Config(String),

    #[error("failed to parse grid config: {0}")]
    Json(#[from] serde_json::Error),
}
