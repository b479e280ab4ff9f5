//! Export tests — file output, PNG rasterization and failure isolation.

use stampgen::{
    compose_stamp, load_parameters, model::parse_color, parameters_from_json, render_stamp_to_png,
    render_svg_document, write_png, write_svg, ExportError, ParameterError, StampParameters,
};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

fn png_dimensions(png: &[u8]) -> (u32, u32) {
    // IHDR is the first chunk: width and height follow the 8-byte signature,
    // 4-byte length and 4-byte chunk type
    let w = u32::from_be_bytes(png[16..20].try_into().unwrap());
    let h = u32::from_be_bytes(png[20..24].try_into().unwrap());
    (w, h)
}

// ═══════════════════════════════════════════════════════════════════════
// SVG tests
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn write_svg_matches_rendered_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stamp.svg");
    let scene = compose_stamp(&StampParameters::default());

    write_svg(&path, &scene).expect("SVG export should succeed");

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render_svg_document(&scene));
    assert!(!written.contains("A E STAMP"), "legend is written glyph by glyph");
    assert!(written.contains(">199301030815</text>"));
}

#[test]
fn write_svg_into_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("stamp.svg");
    let scene = compose_stamp(&StampParameters::default());

    let err = write_svg(&path, &scene).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
    assert!(!err.is_raster());
}

// ═══════════════════════════════════════════════════════════════════════
// PNG tests
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn png_has_stamp_dimensions() {
    let png = render_stamp_to_png(&StampParameters::default()).expect("rasterize");
    assert!(png.starts_with(PNG_SIGNATURE));
    assert_eq!(png_dimensions(&png), (300, 300));

    let big = StampParameters { size: 500.0, overall_rotation_degrees: 30.0, ..StampParameters::default() };
    let png = render_stamp_to_png(&big).expect("rasterize");
    assert_eq!(png_dimensions(&png), (500, 500));
}

#[test]
fn write_png_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stamp.png");
    let scene = compose_stamp(&StampParameters { stroke_color: "#ff0000".into(), ..StampParameters::default() });

    write_png(&path, &scene).expect("PNG export should succeed");

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(PNG_SIGNATURE));
}

#[test]
fn failed_raster_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stamp.png");
    let scene = compose_stamp(&StampParameters { size: 0.0, ..StampParameters::default() });

    let err = write_png(&path, &scene).unwrap_err();
    assert!(err.is_raster(), "expected a raster failure, got {err:?}");
    assert!(err.to_string().starts_with("PNG export failed"));
    assert!(!path.exists());
}

#[test]
fn failed_raster_keeps_previous_file_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stamp.png");
    std::fs::write(&path, b"previous").unwrap();
    let scene = compose_stamp(&StampParameters { size: f64::NAN, ..StampParameters::default() });

    assert!(write_png(&path, &scene).unwrap_err().is_raster());
    assert_eq!(std::fs::read(&path).unwrap(), b"previous");
}

// ═══════════════════════════════════════════════════════════════════════
// Parameters tests
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn partial_json_falls_back_to_defaults() {
    let params = parameters_from_json(r#"{"companyName": "ACME", "size": 420}"#).unwrap();
    assert_eq!(params.company_name, "ACME");
    assert_eq!(params.size, 420.0);
    assert_eq!(params.company_number, "199301030815");
    assert_eq!(params.registration_code, "(285554-A)");
    assert_eq!(params.stroke_color, "#000000");
}

#[test]
fn load_parameters_enforces_form_limits() {
    assert!(load_parameters("{}").is_ok());
    assert_eq!(load_parameters(r#"{"size": 100}"#), Err(ParameterError::Size(100.0)));
    assert_eq!(
        load_parameters(r#"{"overallRotationDegrees": 60}"#),
        Err(ParameterError::Rotation(60.0))
    );
    assert_eq!(
        load_parameters(r#"{"legendRotationDegrees": 360}"#),
        Err(ParameterError::LegendRotation(360.0))
    );
    assert_eq!(
        load_parameters(r#"{"strokeColor": "purple"}"#),
        Err(ParameterError::Color("purple".into()))
    );
    assert!(matches!(load_parameters("[1, 2"), Err(ParameterError::Json(_))));
}

#[test]
fn colors_accept_presets_and_hex() {
    assert_eq!(parse_color("Red").unwrap(), "#ff0000");
    assert_eq!(parse_color("green").unwrap(), "#008000");
    assert_eq!(parse_color("#ABCDEF").unwrap(), "#abcdef");
    assert!(parse_color("#abc").is_err());
    assert!(parse_color("").is_err());
}
