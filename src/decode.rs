// src/decode.rs

//! Tolerant text decoding for spreadsheet exports
//!
//! HCL and inventory CSVs arrive from a mix of tools: some emit UTF-8 with
//! a byte-order mark, some Windows-1252, some plain Latin-1. Decoding tries
//! each in a fixed priority order and never fails: the final Latin-1 stage
//! maps every byte value, so output is always produced.

use encoding_rs::WINDOWS_1252;

/// Decode raw file bytes into text.
///
/// Priority order: UTF-8 with optional signature, UTF-8, Windows-1252,
/// Latin-1. Each later stage is tried only if the earlier one rejects the
/// bytes. Latin-1 is total, so this function is infallible.
pub fn decode_text(raw: &[u8]) -> String {
    // UTF-8, with the signature stripped when present.
    let body = raw.strip_prefix(b"\xef\xbb\xbf").unwrap_or(raw);
    if let Ok(s) = std::str::from_utf8(body) {
        return s.to_string();
    }

    // Windows-1252. The WHATWG mapping is total, but keep the error check
    // so the priority order stays explicit if the codec ever changes.
    let (text, _, had_errors) = WINDOWS_1252.decode(raw);
    if !had_errors {
        return text.into_owned();
    }

    // Latin-1: every byte maps directly to the matching code point.
    raw.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_utf8() {
        assert_eq!(decode_text("Dell PowerEdge R750".as_bytes()), "Dell PowerEdge R750");
    }

    #[test]
    fn test_utf8_with_bom_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("Model,CPU".as_bytes());
        assert_eq!(decode_text(&bytes), "Model,CPU");
    }

    #[test]
    fn test_registered_trademark_utf8() {
        // U+00AE as UTF-8
        assert_eq!(decode_text(&[0xC2, 0xAE]), "\u{ae}");
    }

    #[test]
    fn test_windows_1252_fallback() {
        // 0xAE is not valid UTF-8 on its own; Windows-1252 maps it to U+00AE.
        assert_eq!(decode_text(&[b'X', b'e', b'o', b'n', 0xAE]), "Xeon\u{ae}");
    }

    #[test]
    fn test_never_fails_on_arbitrary_bytes() {
        let junk: Vec<u8> = (0..=255).collect();
        let out = decode_text(&junk);
        assert_eq!(out.chars().count(), 256);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_text(b""), "");
    }
}
