use std::path::PathBuf;

use thiserror::Error;

/// Why a generation request was rejected. Every variant is raised before the
/// map is touched.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no {0} given")]
    MissingInput(&'static str),

    #[error("failed to load image {}", .path.display())]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid target size {width}x{height} on layer {layer}")]
    InvalidSize { width: i32, height: i32, layer: i32 },

    #[error("could not find any ground brushes in the catalog; load a brush set first")]
    NoGroundAvailable,

    #[error("unknown generation source `{0}`")]
    UnknownSource(String),
}
