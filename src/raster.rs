//! Raster export — turns the SVG document into a PNG via resvg.
//!
//! This is the one export path that can genuinely fail (unsupported input,
//! impossible canvas size). Failures come back as `ExportError::Raster*` and
//! nothing is written anywhere.

use std::sync::{Arc, OnceLock};

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{fontdb, Options, Tree};
use tracing::{debug, warn};

use crate::error::ExportError;
use crate::model::StampScene;
use crate::renderer::render_svg_document;

/// Rasterize a stamp scene to PNG bytes, `size × size` pixels.
pub fn render_scene_to_png(scene: &StampScene) -> Result<Vec<u8>, ExportError> {
    let svg = render_svg_document(scene);
    rasterize_svg(&svg, scene.size)
}

/// Rasterize an SVG document onto a square transparent canvas of `size`
/// pixels and encode it as PNG.
pub fn rasterize_svg(svg: &str, size: f64) -> Result<Vec<u8>, ExportError> {
    let px = pixel_size(size)?;

    let opt = Options {
        fontdb: system_fonts(),
        ..Options::default()
    };
    let tree = Tree::from_str(svg, &opt).map_err(|e| ExportError::RasterParse(e.to_string()))?;

    let mut pixmap = Pixmap::new(px, px).ok_or(ExportError::RasterSize(size))?;
    let doc = tree.size();
    let transform = Transform::from_scale(px as f32 / doc.width(), px as f32 / doc.height());
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|e| ExportError::RasterEncode(e.to_string()))?;
    debug!(pixels = px, bytes = png.len(), "rasterized stamp");
    Ok(png)
}

/// Canvas edge length in whole pixels.
fn pixel_size(size: f64) -> Result<u32, ExportError> {
    let px = size.round();
    if !px.is_finite() || px < 1.0 || px > u32::MAX as f64 {
        return Err(ExportError::RasterSize(size));
    }
    Ok(px as u32)
}

/// System fonts, loaded once per process.
fn system_fonts() -> Arc<fontdb::Database> {
    static FONTS: OnceLock<Arc<fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            if db.len() == 0 {
                warn!("no system fonts found; stamp text will not appear in PNG output");
            } else {
                debug!(faces = db.len(), "loaded system fonts");
            }
            Arc::new(db)
        })
        .clone()
}
