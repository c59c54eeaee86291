use hexgrid_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("geometry buffers are inconsistent: {0}")]
    Geometry(String),

    #[error("invalid viewer config: {0}")]
    Config(String),

    #[error("failed to parse json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("surface of {width}x{height} pixels cannot be created")]
    Surface { width: u32, height: u32 },

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("canvas: {0}")]
    Canvas(String),
}
