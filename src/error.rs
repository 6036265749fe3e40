use thiserror::Error;

/// Errors raised when building brush parameters
#[derive(Debug, Error, PartialEq)]
pub enum BrushError {
    #[error("brush size must be a finite number above zero, got {0}")]
    InvalidSize(f32),
}

/// Errors that can occur while exporting the render surface
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to encode surface: {0}")]
    Encode(#[from] image::ImageError),

    #[error("surface has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },
}

/// Errors reported by share hosts
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("nothing has been shared yet")]
    NothingToShare,

    #[error("refusing to share an empty artifact")]
    EmptyArtifact,

    #[error("failed to write artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Errors produced while resolving a path to a page
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no page for path {0:?}")]
    NotFound(String),
}
