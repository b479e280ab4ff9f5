//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jbyteArray, jstring};
use jni::JNIEnv;

use crate::{load_parameters, render_stamp_to_png, render_stamp_to_svg, StampParameters};

fn read_parameters(env: &mut JNIEnv, params_json: &JString) -> Option<StampParameters> {
    let json: String = env.get_string(params_json).ok()?.into();
    load_parameters(&json).ok()
}

/// Render a stamp to an SVG document.
///
/// Called from Kotlin as:
///   external fun renderSvg(paramsJson: String): String?
#[no_mangle]
pub extern "system" fn Java_com_stampgen_StampLib_renderSvg(
    mut env: JNIEnv,
    _class: JClass,
    params_json: JString,
) -> jstring {
    let Some(params) = read_parameters(&mut env, &params_json) else {
        return std::ptr::null_mut();
    };

    match env.new_string(render_stamp_to_svg(&params)) {
        Ok(js) => js.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render a stamp to PNG bytes.
///
/// Called from Kotlin as:
///   external fun renderPng(paramsJson: String): ByteArray?
#[no_mangle]
pub extern "system" fn Java_com_stampgen_StampLib_renderPng(
    mut env: JNIEnv,
    _class: JClass,
    params_json: JString,
) -> jbyteArray {
    let Some(params) = read_parameters(&mut env, &params_json) else {
        return std::ptr::null_mut();
    };

    match render_stamp_to_png(&params) {
        Ok(png) => match env.byte_array_from_slice(&png) {
            Ok(arr) => arr.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}
