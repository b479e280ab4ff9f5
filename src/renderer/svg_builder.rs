//! SVG builder — accumulates SVG elements and produces the final string.

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    width: f64,
    height: f64,
    depth: usize,
}

impl SvgBuilder {
    pub(super) fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            depth: 0,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    fn push(&mut self, element: String) {
        let indent = "  ".repeat(self.depth + 1);
        self.elements.push(format!("{indent}{element}"));
    }

    /// Open a `<g>` rotated by `degrees` around (`cx`, `cy`).
    pub(super) fn begin_rotation(&mut self, degrees: f64, cx: f64, cy: f64) {
        self.push(format!(r#"<g transform="rotate({} {} {})">"#, degrees, cx, cy));
        self.depth += 1;
    }

    pub(super) fn end_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.push("</g>".to_string());
    }

    pub(super) fn ring(&mut self, cx: f64, cy: f64, r: f64, stroke: &str, stroke_width: f64) {
        self.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" stroke="{}" stroke-width="{}" fill="none"/>"#,
            cx,
            cy,
            r,
            escape(stroke),
            stroke_width
        ));
    }

    /// A single character rotated around its own anchor point.
    #[allow(clippy::too_many_arguments)]
    pub(super) fn rotated_glyph(
        &mut self,
        x: f64,
        y: f64,
        rotation: f64,
        content: char,
        size: f64,
        baseline: &str,
        letter_spacing: f64,
        font_family: &str,
        fill: &str,
    ) {
        let mut buf = [0u8; 4];
        let content = content.encode_utf8(&mut buf);
        self.push(format!(
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="{}" transform="rotate({} {} {})" letter-spacing="{}" font-family="{}" fill="{}">{}</text>"#,
            x,
            y,
            size,
            baseline,
            rotation,
            x,
            y,
            letter_spacing,
            escape(font_family),
            escape(fill),
            escape(content)
        ));
    }

    pub(super) fn centered_text(&mut self, x: f64, y: f64, content: &str, size: f64, font_family: &str, fill: &str) {
        self.push(format!(
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle" fill="{}" font-family="{}">{}</text>"#,
            x,
            y,
            size,
            escape(fill),
            escape(font_family),
            escape(content)
        ));
    }
}

/// Escape text for use in element content and double-quoted attributes.
/// Characters XML 1.0 does not allow (most C0 controls, U+FFFE, U+FFFF)
/// are dropped.
pub(super) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..)
}
