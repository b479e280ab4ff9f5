//! Shared constants for stamp layout (all in SVG user units unless noted).
//!
//! The ring offsets are additive, not proportional to the size, so the
//! center text block keeps roughly the same visual size at every stamp size.

// ── Rings ───────────────────────────────────────────────────────────
pub(crate) const OUTER_RING_MARGIN: f64 = 4.0; // gap between canvas edge and outer ring
pub(crate) const INNER_RING_OFFSET: f64 = 8.0; // outer → inner
pub(crate) const CENTER_RING_OFFSET: f64 = 38.0; // inner → center
pub(crate) const LEGEND_RADIUS_INSET: f64 = 5.0; // below the inner/center midpoint
pub(crate) const OUTER_RING_WIDTH: f64 = 3.0;
pub(crate) const INNER_RING_WIDTH: f64 = 2.0;
pub(crate) const CENTER_RING_WIDTH: f64 = 2.0;

// ── Legend ──────────────────────────────────────────────────────────
pub(crate) const FONT_SIZE_DIVISOR: f64 = 18.0;
pub(crate) const LEGEND_START_ANGLE: f64 = 30.0; // leaves a gap at the bottom left
pub(crate) const LEGEND_END_ANGLE: f64 = 360.0;
pub(crate) const LEGEND_LETTER_SPACING: f64 = 0.0;
pub(crate) const LEGEND_ORNAMENT: char = '★';

// ── Center text ─────────────────────────────────────────────────────
pub(crate) const COMPANY_NUMBER_OFFSET: f64 = -0.3; // × font size
pub(crate) const REGISTRATION_OFFSET: f64 = 1.1; // × font size
pub(crate) const CENTER_TEXT_SCALE: f64 = 0.95;

pub(crate) const FONT_FAMILY: &str = "Arial, sans-serif";

// ── Input form limits and defaults ──────────────────────────────────
pub(crate) const MIN_SIZE: f64 = 200.0;
pub(crate) const MAX_SIZE: f64 = 500.0;
pub(crate) const DEFAULT_SIZE: f64 = 300.0;
pub(crate) const MIN_ROTATION: f64 = -45.0;
pub(crate) const MAX_ROTATION: f64 = 45.0;
pub(crate) const DEFAULT_COMPANY_NAME: &str = "A E STAMP MALAYSIA SDN. BHD.";
pub(crate) const DEFAULT_COMPANY_NUMBER: &str = "199301030815";
pub(crate) const DEFAULT_REGISTRATION_CODE: &str = "(285554-A)";

// ── Export ──────────────────────────────────────────────────────────
pub(crate) const XML_DECLARATION: &str = "<?xml version=\"1.0\" standalone=\"no\"?>\r\n";
