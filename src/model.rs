//! Data model for a company stamp: the parameters a caller supplies and the
//! renderer-agnostic scene the layout engine produces from them.
//!
//! Parameters are immutable per render. Every scene type is plain data and
//! serializes to JSON for FFI data exchange.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ParameterError;

/// A point in SVG user space (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Everything needed to render one stamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StampParameters {
    /// Curved legend text (the ornament glyph is appended by the composer)
    pub company_name: String,
    /// First straight center line
    pub company_number: String,
    /// Second straight center line, e.g. "(285554-A)"
    pub registration_code: String,
    /// Stamp diameter in canvas units; also the raster width and height
    pub size: f64,
    /// Stroke and fill colour for every element
    pub stroke_color: String,
    /// Rigid rotation of the whole stamp around its center
    pub overall_rotation_degrees: f64,
    /// Where the legend starts along the rim, in [0, 360)
    pub legend_rotation_degrees: f64,
}

impl Default for StampParameters {
    fn default() -> Self {
        Self {
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            company_number: DEFAULT_COMPANY_NUMBER.to_string(),
            registration_code: DEFAULT_REGISTRATION_CODE.to_string(),
            size: DEFAULT_SIZE,
            stroke_color: StampColor::Black.hex().to_string(),
            overall_rotation_degrees: 0.0,
            legend_rotation_degrees: 0.0,
        }
    }
}

impl StampParameters {
    /// Check the parameters against the limits of the input form.
    ///
    /// The layout engine itself never calls this: out-of-range values still
    /// produce well-defined (if distorted) geometry. Input layers (CLI, FFI)
    /// call it before composing.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.size.is_finite() || !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ParameterError::Size(self.size));
        }
        if !self.overall_rotation_degrees.is_finite()
            || !(MIN_ROTATION..=MAX_ROTATION).contains(&self.overall_rotation_degrees)
        {
            return Err(ParameterError::Rotation(self.overall_rotation_degrees));
        }
        if !self.legend_rotation_degrees.is_finite()
            || !(0.0..360.0).contains(&self.legend_rotation_degrees)
        {
            return Err(ParameterError::LegendRotation(self.legend_rotation_degrees));
        }
        if !is_hex_color(&self.stroke_color) {
            return Err(ParameterError::Color(self.stroke_color.clone()));
        }
        Ok(())
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Preset stamp inks offered by the input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StampColor {
    Black,
    Red,
    Blue,
    Green,
}

impl StampColor {
    pub const ALL: [StampColor; 4] = [
        StampColor::Black,
        StampColor::Red,
        StampColor::Blue,
        StampColor::Green,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            StampColor::Black => "#000000",
            StampColor::Red => "#ff0000",
            StampColor::Blue => "#0000ff",
            StampColor::Green => "#008000",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StampColor::Black => "black",
            StampColor::Red => "red",
            StampColor::Blue => "blue",
            StampColor::Green => "green",
        }
    }
}

/// Resolve a colour given either as a preset name or as `#rrggbb`.
pub fn parse_color(s: &str) -> Result<String, ParameterError> {
    let s = s.trim();
    if let Some(preset) = StampColor::ALL
        .iter()
        .find(|c| c.name().eq_ignore_ascii_case(s))
    {
        return Ok(preset.hex().to_string());
    }
    if is_hex_color(s) {
        return Ok(s.to_ascii_lowercase());
    }
    Err(ParameterError::Color(s.to_string()))
}

/// Which way characters run along an arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// First character at the start angle, reading clockwise (top arcs)
    #[default]
    Forward,
    /// First character at the end angle, glyphs flipped (bottom arcs)
    Reversed,
}

/// A circular path characters are distributed along.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSpec {
    pub center: Point,
    pub radius: f64,
    /// Degrees clockwise from 12 o'clock
    pub start_angle_degrees: f64,
    /// May exceed the start by 360 or more for a full sweep
    pub end_angle_degrees: f64,
    pub direction: Direction,
}

impl ArcSpec {
    /// Angular span covered by the arc.
    pub fn sweep_degrees(&self) -> f64 {
        self.end_angle_degrees - self.start_angle_degrees
    }
}

/// Font styling shared by every glyph of one piece of arc text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: f64,
    pub letter_spacing: f64,
    pub fill: String,
    pub font_family: String,
}

/// Vertical anchoring of a glyph relative to its placement point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineMode {
    Alphabetic,
    Hanging,
}

impl BaselineMode {
    pub fn as_svg(self) -> &'static str {
        match self {
            BaselineMode::Alphabetic => "alphabetic",
            BaselineMode::Hanging => "hanging",
        }
    }
}

/// One character positioned and rotated on an arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphPlacement {
    pub character: char,
    pub position: Point,
    /// Rotation around `position`, degrees clockwise
    pub rotation_degrees: f64,
    pub font_size: f64,
    pub baseline: BaselineMode,
}

/// A stroked circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSpec {
    pub center: Point,
    pub radius: f64,
    pub stroke_width: f64,
}

/// A straight, horizontally centered line of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPlacement {
    pub text: String,
    /// Anchor point (horizontal middle, alphabetic baseline)
    pub position: Point,
    pub font_size: f64,
}

/// Dimensions derived from the stamp size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StampGeometry {
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub center_radius: f64,
    pub legend_radius: f64,
    pub font_size: f64,
}

/// The complete description of one stamp, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StampScene {
    /// Canvas width and height
    pub size: f64,
    pub geometry: StampGeometry,
    /// Rigid rotation applied around `geometry.center` to everything
    pub rotation_degrees: f64,
    pub stroke_color: String,
    pub font_family: String,
    /// Outer, inner and center ring, in that order
    pub rings: Vec<RingSpec>,
    pub legend_arc: ArcSpec,
    pub legend_style: TextStyle,
    pub legend: Vec<GlyphPlacement>,
    /// Company number, then registration code
    pub center_lines: Vec<TextPlacement>,
}
