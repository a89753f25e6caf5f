//! `encodeURI`-compatible percent escaping.
//!
//! Share links put the JSON level in the URL fragment, so everything outside
//! the URI character set (quotes, braces, brackets, spaces, `%`) is escaped
//! as UTF-8 bytes. Structural characters such as `:` `,` `/` `#` stay as is.

use crate::common::DecodeError;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Whether `encodeURI` leaves this byte unescaped.
const fn is_uri_safe(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b';' | b','
                | b'/'
                | b'?'
                | b':'
                | b'@'
                | b'&'
                | b'='
                | b'+'
                | b'$'
                | b'-'
                | b'_'
                | b'.'
                | b'!'
                | b'~'
                | b'*'
                | b'\''
                | b'('
                | b')'
                | b'#'
        )
}

/// Escapes `text` the way `encodeURI` does.
pub fn encode_uri(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for &b in text.as_bytes() {
        if is_uri_safe(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[usize::from(b >> 4)] as char);
            out.push(HEX[usize::from(b & 0x0f)] as char);
        }
    }
    out
}

/// Reverses [`encode_uri`]. Malformed `%` sequences are kept literally.
///
/// # Errors
///
/// Returns [`DecodeError::Escape`] if the unescaped bytes are not UTF-8.
pub fn decode_uri(text: &str) -> Result<String, DecodeError> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(b);
        i += 1;
    }
    String::from_utf8(out).map_err(|_| DecodeError::Escape)
}

const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
