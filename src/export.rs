//! File export — writes SVG and PNG renderings of a scene to disk.
//!
//! Files are written through a temporary file and renamed into place, so a
//! failed export never leaves a truncated or half-written file behind. PNG
//! data is fully rendered before any file is touched.

use std::io::Write;
use std::path::Path;

use atomicwrites::{AtomicFile, OverwriteBehavior};
use tracing::info;

use crate::error::ExportError;
use crate::model::StampScene;
use crate::raster::render_scene_to_png;
use crate::renderer::render_svg_document;

/// Write the scene as a standalone SVG document.
pub fn write_svg<P: AsRef<Path>>(path: P, scene: &StampScene) -> Result<(), ExportError> {
    let path = path.as_ref();
    let svg = render_svg_document(scene);
    write_atomic(path, svg.as_bytes())?;
    info!(path = %path.display(), bytes = svg.len(), "wrote SVG");
    Ok(())
}

/// Rasterize the scene and write it as a PNG of `size × size` pixels.
pub fn write_png<P: AsRef<Path>>(path: P, scene: &StampScene) -> Result<(), ExportError> {
    let path = path.as_ref();
    let png = render_scene_to_png(scene)?;
    write_atomic(path, &png)?;
    info!(path = %path.display(), bytes = png.len(), "wrote PNG");
    Ok(())
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<(), ExportError> {
    AtomicFile::new(path, OverwriteBehavior::AllowOverwrite)
        .write(|f| {
            f.write_all(data)?;
            f.flush()
        })
        .map_err(|err| ExportError::Io {
            path: path.to_path_buf(),
            source: match err {
                atomicwrites::Error::Internal(e) | atomicwrites::Error::User(e) => e,
            },
        })
}
