//! stampgen — layout engine and exporter for circular company stamps.
//!
//! A stamp is three concentric rings, the company name curved along the rim
//! and two straight center lines (company number and registration code).
//! Composition is a pure function from [`StampParameters`] to [`StampScene`];
//! the scene is then serialized to SVG or rasterized to PNG.
//!
//! # Example
//! ```no_run
//! use stampgen::{compose_stamp, render_scene_to_svg, StampParameters};
//!
//! let params = StampParameters {
//!     company_name: "ACME TRADING SDN. BHD.".into(),
//!     ..StampParameters::default()
//! };
//! let scene = compose_stamp(&params);
//! println!("Legend glyphs: {}", scene.legend.len());
//! let svg = render_scene_to_svg(&scene);
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod arc_text;
pub mod composer;
mod constants;
pub mod error;
pub mod export;
pub mod geometry;
pub mod model;
pub mod raster;
pub mod renderer;

#[cfg(target_os = "android")]
pub mod android;

pub use arc_text::layout_arc_text;
pub use composer::compose_stamp;
pub use error::{ExportError, ParameterError};
pub use export::{write_png, write_svg};
pub use geometry::polar_to_point;
pub use model::*;
pub use raster::{rasterize_svg, render_scene_to_png};
pub use renderer::{render_scene_to_svg, render_svg_document};

/// Parse stamp parameters from JSON. Missing fields take their defaults.
pub fn parameters_from_json(json: &str) -> Result<StampParameters, ParameterError> {
    serde_json::from_str(json).map_err(|e| ParameterError::Json(e.to_string()))
}

/// Parse and validate parameters the way an input form would.
pub fn load_parameters(json: &str) -> Result<StampParameters, ParameterError> {
    let params = parameters_from_json(json)?;
    params.validate()?;
    Ok(params)
}

/// Convert a composed scene to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn scene_to_json(scene: &StampScene) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(scene)
}

/// Compose a stamp and render it directly to a standalone SVG document.
pub fn render_stamp_to_svg(params: &StampParameters) -> String {
    render_svg_document(&compose_stamp(params))
}

/// Compose a stamp and rasterize it to PNG bytes.
pub fn render_stamp_to_png(params: &StampParameters) -> Result<Vec<u8>, ExportError> {
    render_scene_to_png(&compose_stamp(params))
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

unsafe fn params_from_c(params_json: *const c_char) -> Option<StampParameters> {
    if params_json.is_null() {
        return None;
    }
    let json = unsafe { CStr::from_ptr(params_json) }.to_str().ok()?;
    load_parameters(json).ok()
}

/// Render a stamp described by a JSON parameter object and return the SVG
/// document as a C string, or null if the parameters are invalid.
/// The caller must free the returned string with `stampgen_free_string`.
///
/// # Safety
/// `params_json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn stampgen_render_svg(params_json: *const c_char) -> *mut c_char {
    let Some(params) = (unsafe { params_from_c(params_json) }) else {
        return std::ptr::null_mut();
    };
    CString::new(render_stamp_to_svg(&params))
        .map(CString::into_raw)
        .unwrap_or(std::ptr::null_mut())
}

/// Render a stamp to PNG. Returns a buffer of `*out_len` bytes, or null on
/// invalid parameters or raster failure.
/// The caller must free the buffer with `stampgen_free_bytes`.
///
/// # Safety
/// `params_json` must be a valid null-terminated UTF-8 C string and
/// `out_len` must point to writable memory.
#[no_mangle]
pub unsafe extern "C" fn stampgen_render_png(
    params_json: *const c_char,
    out_len: *mut usize,
) -> *mut u8 {
    if out_len.is_null() {
        return std::ptr::null_mut();
    }
    let Some(params) = (unsafe { params_from_c(params_json) }) else {
        return std::ptr::null_mut();
    };
    match render_stamp_to_png(&params) {
        Ok(png) => {
            let boxed = png.into_boxed_slice();
            unsafe { *out_len = boxed.len() };
            Box::into_raw(boxed) as *mut u8
        }
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by stampgen functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a stampgen function, or null.
#[no_mangle]
pub unsafe extern "C" fn stampgen_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}

/// Free a buffer previously returned by `stampgen_render_png`.
///
/// # Safety
/// `ptr` and `len` must come from the same `stampgen_render_png` call, or
/// `ptr` must be null.
#[no_mangle]
pub unsafe extern "C" fn stampgen_free_bytes(ptr: *mut u8, len: usize) {
    if !ptr.is_null() {
        unsafe {
            let _ = Box::from_raw(std::ptr::slice_from_raw_parts_mut(ptr, len));
        }
    }
}
