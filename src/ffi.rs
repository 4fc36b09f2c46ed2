//! C-ABI FFI bindings for cross-language integration.
//!
//! This module provides a C-compatible API so the desktop host can build
//! editor payloads and renderings without a JSON round trip through a CLI.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::render::{self, StyleConfig, TextFormat};
use crate::{blocks_to_payload_json, parse_text, text_to_payload_json, BuildStyle, JsonFormat};

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct SedocResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `sedoc_free_string`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `sedoc_free_string`.
    pub error: *mut c_char,
}

impl SedocResult {
    fn success(data: String) -> Self {
        Self {
            success: true,
            data: CString::new(data).unwrap_or_default().into_raw(),
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }
}

impl From<crate::Result<String>> for SedocResult {
    fn from(result: crate::Result<String>) -> Self {
        match result {
            Ok(data) => SedocResult::success(data),
            Err(e) => SedocResult::error(e.to_string()),
        }
    }
}

/// Borrow a required string argument.
unsafe fn required<'a>(ptr: *const c_char, name: &str) -> Result<&'a str, SedocResult> {
    if ptr.is_null() {
        return Err(SedocResult::error(format!("{} cannot be null", name)));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| SedocResult::error(format!("Invalid UTF-8 {}", name)))
}

/// Borrow an optional string argument; null means absent.
unsafe fn optional<'a>(ptr: *const c_char, name: &str) -> Result<Option<&'a str>, SedocResult> {
    if ptr.is_null() {
        Ok(None)
    } else {
        required(ptr, name).map(Some)
    }
}

fn json_format(pretty: bool) -> JsonFormat {
    if pretty {
        JsonFormat::Pretty
    } else {
        JsonFormat::Compact
    }
}

fn build_style(json: Option<&str>) -> crate::Result<BuildStyle> {
    json.map_or_else(|| Ok(BuildStyle::default()), BuildStyle::from_json)
}

/// Parse generated text and build the editor payload.
///
/// # Safety
///
/// `text` must be a valid null-terminated UTF-8 string. `style_json` must be
/// null or a valid null-terminated UTF-8 string holding a build style.
/// The returned result must be freed with `sedoc_free_result`.
#[no_mangle]
pub unsafe extern "C" fn sedoc_text_to_payload(
    text: *const c_char,
    style_json: *const c_char,
    pretty: bool,
) -> SedocResult {
    let text = match required(text, "text") {
        Ok(s) => s,
        Err(e) => return e,
    };
    let style_json = match optional(style_json, "style_json") {
        Ok(s) => s,
        Err(e) => return e,
    };

    build_style(style_json)
        .and_then(|style| text_to_payload_json(text, &style, json_format(pretty)))
        .into()
}

/// Build the editor payload from upstream generation output.
///
/// # Safety
///
/// `blocks_json` must be a valid null-terminated UTF-8 string.
/// `images_json` and `style_json` must each be null or a valid
/// null-terminated UTF-8 string.
/// The returned result must be freed with `sedoc_free_result`.
#[no_mangle]
pub unsafe extern "C" fn sedoc_blocks_to_payload(
    blocks_json: *const c_char,
    images_json: *const c_char,
    style_json: *const c_char,
    pretty: bool,
) -> SedocResult {
    let blocks_json = match required(blocks_json, "blocks_json") {
        Ok(s) => s,
        Err(e) => return e,
    };
    let images_json = match optional(images_json, "images_json") {
        Ok(s) => s,
        Err(e) => return e,
    };
    let style_json = match optional(style_json, "style_json") {
        Ok(s) => s,
        Err(e) => return e,
    };

    build_style(style_json)
        .and_then(|style| {
            blocks_to_payload_json(blocks_json, images_json, &style, json_format(pretty))
        })
        .into()
}

/// Render generated text as `text`, `markdown`, `html` or `naver`.
///
/// # Safety
///
/// `text` and `format` must be valid null-terminated UTF-8 strings.
/// `style_json` must be null or a valid null-terminated UTF-8 string.
/// The returned result must be freed with `sedoc_free_result`.
#[no_mangle]
pub unsafe extern "C" fn sedoc_render(
    text: *const c_char,
    format: *const c_char,
    style_json: *const c_char,
) -> SedocResult {
    let text = match required(text, "text") {
        Ok(s) => s,
        Err(e) => return e,
    };
    let format = match required(format, "format") {
        Ok(s) => s,
        Err(e) => return e,
    };
    let style_json = match optional(style_json, "style_json") {
        Ok(s) => s,
        Err(e) => return e,
    };

    render_internal(text, format, style_json).into()
}

fn render_internal(text: &str, format: &str, style_json: Option<&str>) -> crate::Result<String> {
    let format: TextFormat = format.parse()?;
    let style = match style_json {
        Some(json) => StyleConfig::from_json(json)?,
        None => StyleConfig::default(),
    };
    let doc = parse_text(text);
    Ok(render::render(&doc, &style, format))
}

/// Free a result returned by any sedoc function.
///
/// # Safety
///
/// The `result` must have been returned by a sedoc function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn sedoc_free_result(result: SedocResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Free a string allocated by sedoc.
///
/// # Safety
///
/// The `ptr` must have been allocated by sedoc.
/// This function should only be called once per pointer.
#[no_mangle]
pub unsafe extern "C" fn sedoc_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the version of the sedoc library.
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn sedoc_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
