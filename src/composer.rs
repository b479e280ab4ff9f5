//! Stamp composer — derives ring geometry from the stamp size and assembles
//! rings, the curved legend and the two center lines into one scene.

use crate::arc_text::layout_arc_text;
use crate::constants::*;
use crate::geometry::round2;
use crate::model::*;

impl StampGeometry {
    /// Derive all radii and the base font size from the stamp diameter.
    ///
    /// Small sizes can push `center_radius` to zero or below; the result is
    /// returned as-is.
    pub fn for_size(size: f64) -> Self {
        let half = size / 2.0;
        let outer = half - OUTER_RING_MARGIN;
        let inner = outer - INNER_RING_OFFSET;
        let center = inner - CENTER_RING_OFFSET;
        let legend = (inner + center) / 2.0 - LEGEND_RADIUS_INSET;

        Self {
            center: Point::new(round2(half), round2(half)),
            outer_radius: round2(outer),
            inner_radius: round2(inner),
            center_radius: round2(center),
            legend_radius: round2(legend),
            font_size: round2(size / FONT_SIZE_DIVISOR),
        }
    }
}

/// Compose the complete scene for one stamp. Pure: identical parameters
/// always give an identical scene.
pub fn compose_stamp(params: &StampParameters) -> StampScene {
    let geometry = StampGeometry::for_size(params.size);
    let center = geometry.center;
    // Derived sizes are computed from the unrounded base to avoid compounding
    let base_font = params.size / FONT_SIZE_DIVISOR;

    let rings = vec![
        RingSpec { center, radius: geometry.outer_radius, stroke_width: OUTER_RING_WIDTH },
        RingSpec { center, radius: geometry.inner_radius, stroke_width: INNER_RING_WIDTH },
        RingSpec { center, radius: geometry.center_radius, stroke_width: CENTER_RING_WIDTH },
    ];

    let legend_arc = ArcSpec {
        center,
        radius: geometry.legend_radius,
        start_angle_degrees: LEGEND_START_ANGLE + params.legend_rotation_degrees,
        end_angle_degrees: LEGEND_END_ANGLE + params.legend_rotation_degrees,
        direction: Direction::Forward,
    };
    let legend_style = TextStyle {
        font_size: geometry.font_size,
        letter_spacing: LEGEND_LETTER_SPACING,
        fill: params.stroke_color.clone(),
        font_family: FONT_FAMILY.to_string(),
    };
    let legend = layout_arc_text(&legend_text(&params.company_name), &legend_arc, &legend_style);

    let line_size = round2(base_font * CENTER_TEXT_SCALE);
    let center_line = |text: &str, offset: f64| TextPlacement {
        text: text.to_string(),
        position: Point::new(center.x, round2(params.size / 2.0 + base_font * offset)),
        font_size: line_size,
    };
    let center_lines = vec![
        center_line(&params.company_number, COMPANY_NUMBER_OFFSET),
        center_line(&params.registration_code, REGISTRATION_OFFSET),
    ];

    StampScene {
        size: params.size,
        geometry,
        rotation_degrees: round2(params.overall_rotation_degrees),
        stroke_color: params.stroke_color.clone(),
        font_family: FONT_FAMILY.to_string(),
        rings,
        legend_arc,
        legend_style,
        legend,
        center_lines,
    }
}

/// The company name followed by the fixed ornament glyph.
pub fn legend_text(company_name: &str) -> String {
    let mut text = String::with_capacity(company_name.len() + LEGEND_ORNAMENT.len_utf8());
    text.push_str(company_name);
    text.push(LEGEND_ORNAMENT);
    text
}
