//! Key extraction from photo and directory names.
//!
//! A key is the 4-digit shoot number embedded in a camera file name, e.g.
//! `IMGK1234.jpg` or `IMG_1234_a.jpg`. Keys name the folders photos are
//! sorted into.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::path::Path;

/// File extensions (lowercase, without the dot) treated as JPEG photos.
pub const JPEG_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

static IMGK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)IMGK(\d{4})").expect("valid IMGK pattern"));

static IMG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)IMG_(\d{4})").expect("valid IMG_ pattern"));

static QR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)QR[_-]?(\d{4})").expect("valid QR pattern"));

static TRAILING_KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.*[-_](\d{4})$").expect("valid trailing key pattern"));

/// Returns the file name with only its outermost extension removed.
fn stem(filename: &str) -> &str {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
}

fn first_capture(pattern: &Regex, haystack: &str) -> Option<String> {
    pattern
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extracts the 4-digit key from a photo file name.
///
/// Only the stem is searched, so `a.jpg-0.jpg` is examined as `a.jpg-0`.
/// `IMGK` followed by four digits wins over `IMG_` followed by four digits;
/// both are matched case-insensitively anywhere in the stem.
pub fn extract_key(filename: &str) -> Option<String> {
    let stem = stem(filename);
    first_capture(&IMGK_PATTERN, stem).or_else(|| first_capture(&IMG_PATTERN, stem))
}

/// Extracts the 4-digit key of a QR file name such as `QR_2081.jpg` or
/// `qr-2081.jpeg`.
///
/// Used only to decide whether a file inside a `QR` folder may be relocated.
pub fn qr_key(filename: &str) -> Option<String> {
    first_capture(&QR_PATTERN, stem(filename))
}

/// Extracts a trailing `-NNNN` / `_NNNN` key from a directory name.
pub fn trailing_key(dir_name: &str) -> Option<String> {
    first_capture(&TRAILING_KEY_PATTERN, dir_name)
}

/// Whether the path has a `.jpg` or `.jpeg` extension, ignoring case.
pub fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            JPEG_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
        .unwrap_or(false)
}
