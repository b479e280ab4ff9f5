//! Scene renderer — serializes a composed StampScene into SVG.
//!
//! The output is a self-contained SVG string with every coordinate already
//! rounded by the layout engine, so identical scenes serialize to identical
//! bytes. Serialization cannot fail.

mod svg_builder;

use crate::constants::XML_DECLARATION;
use crate::model::StampScene;
use svg_builder::SvgBuilder;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render a scene into an `<svg>` element suitable for embedding.
pub fn render_scene_to_svg(scene: &StampScene) -> String {
    let mut svg = SvgBuilder::new(scene.size, scene.size);
    let center = scene.geometry.center;

    let rotated = scene.rotation_degrees != 0.0;
    if rotated {
        svg.begin_rotation(scene.rotation_degrees, center.x, center.y);
    }

    for ring in &scene.rings {
        svg.ring(ring.center.x, ring.center.y, ring.radius, &scene.stroke_color, ring.stroke_width);
    }

    let style = &scene.legend_style;
    for glyph in &scene.legend {
        svg.rotated_glyph(
            glyph.position.x,
            glyph.position.y,
            glyph.rotation_degrees,
            glyph.character,
            glyph.font_size,
            glyph.baseline.as_svg(),
            style.letter_spacing,
            &style.font_family,
            &style.fill,
        );
    }

    for line in &scene.center_lines {
        svg.centered_text(
            line.position.x,
            line.position.y,
            &line.text,
            line.font_size,
            &scene.font_family,
            &scene.stroke_color,
        );
    }

    if rotated {
        svg.end_group();
    }

    svg.build()
}

/// Render a scene into a standalone SVG document (XML declaration included),
/// the form written to `.svg` files and handed to the rasterizer.
pub fn render_svg_document(scene: &StampScene) -> String {
    let mut doc = String::from(XML_DECLARATION);
    doc.push_str(&render_scene_to_svg(scene));
    doc
}
