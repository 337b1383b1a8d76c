//! Scan text normalization.

/// Removes every carriage return and line feed.
///
/// Scanners in keyboard-wedge mode terminate each code with Enter, and some
/// send CR LF; neither belongs to the payload.
pub fn normalize_text(text: &str) -> String {
    text.chars().filter(|&c| c != '\r' && c != '\n').collect()
}

/// Decodes raw scan bytes as UTF-8, dropping invalid sequences.
///
/// Unlike `String::from_utf8_lossy` nothing is substituted: malformed bytes
/// simply disappear from the result.
pub fn decode_scan_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
