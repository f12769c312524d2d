//! fingerlib: note-name recognition and fingering diagrams for a six-hole
//! ocarina.
//!
//! Finds note names in free text (Russian or English solfège syllables and
//! A–H letters, with optional octave `2` and accidental markers), resolves
//! each to a canonical key such as `re-` or `2do`, and replaces it with a
//! Markdown image reference to that key's diagram.
//!
//! # Example
//! ```
//! let out = fingerlib::transform("ля.\nреb, 2до");
//! assert_eq!(out, "![ля](notes/la.svg).\n![реb](notes/re-.svg), ![2до](notes/2do.svg)");
//! ```

pub mod error;
pub mod model;
pub mod normalizer;
pub mod renderer;
pub mod scanner;
pub mod table;

#[cfg(target_os = "android")]
pub mod android;

use std::path::{Path, PathBuf};

pub use error::{Error, TableError};
pub use model::*;
pub use normalizer::{normalize, Rejection};
pub use renderer::{render_entry_svg, render_fingering_svg};
pub use scanner::Scanner;
pub use table::{asset_file_name, table_to_json, FingeringTable, TableSource};

/// Replace note mentions in `text` using the built-in table.
///
/// Never fails: unrecognized spans are left as they are. If the built-in
/// table cannot be loaded nothing is substituted.
pub fn transform(text: &str) -> String {
    match FingeringTable::builtin() {
        Ok(table) => transform_with(table, text),
        Err(e) => {
            log::error!("Built-in fingering table is unusable: {e}");
            text.to_string()
        }
    }
}

/// Replace note mentions in `text` using a caller-supplied table.
pub fn transform_with(table: &FingeringTable, text: &str) -> String {
    Scanner::new(table).transform(text)
}

/// Render every table entry to `<out_dir>/<key>.svg`, creating the directory.
/// Returns the written paths in table order.
pub fn render_all<P: AsRef<Path>>(table: &FingeringTable, out_dir: P) -> Result<Vec<PathBuf>, Error> {
    let out_dir = out_dir.as_ref();
    std::fs::create_dir_all(out_dir).map_err(|e| Error::io(out_dir, e))?;

    let mut written = Vec::with_capacity(table.len());
    for entry in table.entries() {
        let path = out_dir.join(asset_file_name(&entry.key));
        std::fs::write(&path, render_entry_svg(entry)).map_err(|e| Error::io(&path, e))?;
        written.push(path);
    }

    log::info!("Rendered {} diagrams into {}", written.len(), out_dir.display());
    Ok(written)
}

/// Outcome of [`rewrite_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteSummary {
    pub path: PathBuf,
    /// Number of note mentions replaced
    pub replaced: usize,
}

/// Rewrite a UTF-8 text file in place, replacing note mentions.
pub fn rewrite_file<P: AsRef<Path>>(table: &FingeringTable, path: P) -> Result<RewriteSummary, Error> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    let text = String::from_utf8(data).map_err(|_| Error::Utf8 {
        path: path.to_path_buf(),
    })?;

    let (replaced_text, replaced) = Scanner::new(table).transform_counted(&text);
    std::fs::write(path, replaced_text).map_err(|e| Error::io(path, e))?;

    log::info!("Replaced {replaced} note(s) in {}", path.display());
    Ok(RewriteSummary {
        path: path.to_path_buf(),
        replaced,
    })
}

/// Render the built-in diagram for a canonical key such as `"2re-"`.
pub fn render_note(key: &str) -> Option<String> {
    let table = FingeringTable::builtin().ok()?;
    table.get(key).map(render_entry_svg)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI: for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Replace note mentions in a C string. The caller must free the result
/// with `fingerlib_free_string`.
///
/// # Safety
/// `text` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn fingerlib_transform(text: *const c_char) -> *mut c_char {
    if text.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(text) };
    let text = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    CString::new(transform(text)).map_or(std::ptr::null_mut(), CString::into_raw)
}

/// Render the diagram for a canonical key. Returns null for unknown keys.
/// The caller must free the result with `fingerlib_free_string`.
///
/// # Safety
/// `key` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn fingerlib_render_note(key: *const c_char) -> *mut c_char {
    if key.is_null() {
        return std::ptr::null_mut();
    }
    let key = match unsafe { CStr::from_ptr(key) }.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match render_note(key).and_then(|svg| CString::new(svg).ok()) {
        Some(svg) => svg.into_raw(),
        None => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by fingerlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a fingerlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn fingerlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
