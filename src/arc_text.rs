//! Arc text layout — spreads the characters of a string evenly along a
//! circular arc, each rotated to stand upright on the tangent.
//!
//! Spacing is purely angular: glyph widths are not measured, so very long
//! strings may overlap. Each `char` is placed independently (no grapheme
//! clustering).

use crate::geometry::{polar_to_point, round2};
use crate::model::{ArcSpec, BaselineMode, Direction, GlyphPlacement, TextStyle};

/// Lay out `text` along `arc`, one placement per character, in input order.
///
/// The first character sits on the start angle and the last on the end
/// angle (swapped for [`Direction::Reversed`]). A single character sits on
/// the start angle; empty text yields no placements.
pub fn layout_arc_text(text: &str, arc: &ArcSpec, style: &TextStyle) -> Vec<GlyphPlacement> {
    let chars: Vec<char> = text.chars().collect();
    let step = angle_step(arc, chars.len());
    let font_size = round2(style.font_size);

    chars
        .into_iter()
        .enumerate()
        .map(|(i, character)| {
            let offset = i as f64 * step;
            let (angle, rotation, baseline) = match arc.direction {
                Direction::Forward => {
                    let angle = arc.start_angle_degrees + offset;
                    (angle, angle, BaselineMode::Alphabetic)
                }
                Direction::Reversed => {
                    let angle = arc.end_angle_degrees - offset;
                    (angle, angle + 180.0, BaselineMode::Hanging)
                }
            };
            GlyphPlacement {
                character,
                position: polar_to_point(arc.center, arc.radius, angle),
                rotation_degrees: round2(rotation),
                font_size,
                baseline,
            }
        })
        .collect()
}

/// Angular distance between consecutive glyphs.
pub fn angle_step(arc: &ArcSpec, char_count: usize) -> f64 {
    let gaps = char_count.saturating_sub(1).max(1);
    arc.sweep_degrees() / gaps as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    fn arc(start: f64, end: f64, direction: Direction) -> ArcSpec {
        ArcSpec {
            center: Point::new(100.0, 100.0),
            radius: 50.0,
            start_angle_degrees: start,
            end_angle_degrees: end,
            direction,
        }
    }

    fn style() -> TextStyle {
        TextStyle {
            font_size: 12.3456,
            letter_spacing: 0.0,
            fill: "#000000".into(),
            font_family: "Arial, sans-serif".into(),
        }
    }

    #[test]
    fn step_guards_short_text() {
        let a = arc(0.0, 90.0, Direction::Forward);
        assert_eq!(angle_step(&a, 0), 90.0);
        assert_eq!(angle_step(&a, 1), 90.0);
        assert_eq!(angle_step(&a, 2), 90.0);
        assert_eq!(angle_step(&a, 4), 30.0);
    }

    #[test]
    fn forward_spans_start_to_end() {
        let glyphs = layout_arc_text("ABCD", &arc(0.0, 90.0, Direction::Forward), &style());
        let angles: Vec<f64> = glyphs.iter().map(|g| g.rotation_degrees).collect();
        assert_eq!(angles, vec![0.0, 30.0, 60.0, 90.0]);
        assert_eq!(glyphs[0].position, Point::new(100.0, 50.0));
        assert_eq!(glyphs[3].position, Point::new(150.0, 100.0));
        assert!(glyphs.iter().all(|g| g.baseline == BaselineMode::Alphabetic));
        assert!(glyphs.iter().all(|g| g.font_size == 12.35));
    }

    #[test]
    fn single_character_sits_on_start() {
        let glyphs = layout_arc_text("X", &arc(45.0, 300.0, Direction::Forward), &style());
        assert_eq!(glyphs.len(), 1);
        assert_eq!(glyphs[0].rotation_degrees, 45.0);
        assert_eq!(glyphs[0].position, polar_to_point(Point::new(100.0, 100.0), 50.0, 45.0));
    }

    #[test]
    fn empty_text_is_empty() {
        assert!(layout_arc_text("", &arc(0.0, 360.0, Direction::Forward), &style()).is_empty());
    }

    #[test]
    fn multibyte_characters_count_once() {
        let glyphs = layout_arc_text("Ä★ü", &arc(0.0, 180.0, Direction::Forward), &style());
        let chars: String = glyphs.iter().map(|g| g.character).collect();
        assert_eq!(chars, "Ä★ü");
        assert_eq!(glyphs[1].rotation_degrees, 90.0);
    }
}
