//! Error types for the input boundary and the export paths.
//!
//! Composition and SVG serialization are infallible. Only parameter
//! validation (done by input layers) and file/raster export can fail.

use std::path::PathBuf;

use thiserror::Error;

/// A parameter outside the limits of the input form.
#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("size {0} is outside 200..=500")]
    Size(f64),

    #[error("rotation {0}° is outside -45..=45")]
    Rotation(f64),

    #[error("legend rotation {0}° is outside 0..360")]
    LegendRotation(f64),

    #[error("invalid colour '{0}': expected black, red, blue, green or #rrggbb")]
    Color(String),

    #[error("invalid parameters JSON: {0}")]
    Json(String),
}

/// Errors raised while exporting a scene.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing the output file failed. This is the only way the vector
    /// export can fail.
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The raster canvas cannot be created at this size
    #[error("PNG export failed: cannot rasterize at size {0}")]
    RasterSize(f64),

    /// The rasterizer rejected the SVG document
    #[error("PNG export failed: unsupported SVG input: {0}")]
    RasterParse(String),

    /// PNG encoding of the rendered pixmap failed
    #[error("PNG export failed: encoding error: {0}")]
    RasterEncode(String),
}

impl ExportError {
    /// True for failures of the raster path, as opposed to file I/O.
    pub fn is_raster(&self) -> bool {
        matches!(
            self,
            ExportError::RasterSize(_) | ExportError::RasterParse(_) | ExportError::RasterEncode(_)
        )
    }
}
