//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::{render_note, transform};

/// Replace note mentions in a string with diagram references.
///
/// Called from Kotlin as:
///   external fun transform(text: String): String?
#[no_mangle]
pub extern "system" fn Java_com_fingerlib_FingerLib_transform(
    mut env: JNIEnv,
    _class: JClass,
    text: JString,
) -> jstring {
    let text: String = match env.get_string(&text) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match env.new_string(transform(&text)) {
        Ok(js) => js.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render the fingering diagram for a canonical key (e.g. "2re-").
///
/// Called from Kotlin as:
///   external fun renderNote(key: String): String?
#[no_mangle]
pub extern "system" fn Java_com_fingerlib_FingerLib_renderNote(
    mut env: JNIEnv,
    _class: JClass,
    key: JString,
) -> jstring {
    let key: String = match env.get_string(&key) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match render_note(&key) {
        Some(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        None => std::ptr::null_mut(),
    }
}
