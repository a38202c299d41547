//! Marshaling between script-side values and native buffers
//!
//! Every buffer built here lives for exactly one native call. Element counts
//! are taken from the caller and trusted: only the first `n` values of a
//! sequence are read, and a sequence shorter than `n` is outside the calling
//! contract (the copy indexes past its end and panics, it is never padded).

use std::ffi::CString;

use crate::error::{BindingError, BindingResult};

/// Copies the first `n` values into a contiguous `f32` buffer.
///
/// # Panics
///
/// Panics if `values` holds fewer than `n` elements.
pub fn float_array(n: usize, values: &[f64]) -> Vec<f32> {
    (0..n).map(|i| values[i] as f32).collect()
}

/// Copies the first `n` values into a contiguous `i32` buffer.
///
/// # Panics
///
/// Panics if `values` holds fewer than `n` elements.
pub fn int_array(n: usize, values: &[i32]) -> Vec<i32> {
    (0..n).map(|i| values[i]).collect()
}

/// Element count of a `dimx` by `dimy` grid.
///
/// Saturates on overflow, so no sequence is ever long enough and the copy
/// panics instead of reading a wrapped-around count.
pub fn grid_len(dimx: usize, dimy: usize) -> usize {
    dimx.saturating_mul(dimy)
}

/// Element count of `n` items of `width` values each.
pub fn scaled_len(n: usize, width: usize) -> BindingResult<usize> {
    n.checked_mul(width).ok_or_else(|| {
        BindingError::argument(format!("{} x {} elements overflow the buffer size", n, width))
    })
}

/// Converts an element count to the native `int` width.
pub fn native_count(n: usize) -> i32 {
    n as i32
}

/// Encodes text as zero-terminated ISO-8859-15.
///
/// Characters outside the encoding (and interior NULs, which a C string
/// cannot carry) fail with [`BindingError::Encoding`]; nothing is substituted.
pub fn encode_text(text: &str) -> BindingResult<CString> {
    let mut bytes = Vec::with_capacity(text.len() + 1);
    for (position, character) in text.chars().enumerate() {
        match latin9_byte(character) {
            Some(0) | None => {
                return Err(BindingError::Encoding {
                    character,
                    position,
                })
            }
            Some(byte) => bytes.push(byte),
        }
    }
    // interior NULs were rejected above
    CString::new(bytes).map_err(|e| {
        let position = e.nul_position();
        BindingError::Encoding {
            character: '\0',
            position,
        }
    })
}

/// Decodes ISO-8859-15 bytes returned by a native call.
pub fn decode_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| latin9_char(byte)).collect()
}

// ISO-8859-15 replaces eight ISO-8859-1 code points.
const LATIN9_OVERRIDES: [(u8, char); 8] = [
    (0xA4, '\u{20AC}'),
    (0xA6, '\u{0160}'),
    (0xA8, '\u{0161}'),
    (0xB4, '\u{017D}'),
    (0xB8, '\u{017E}'),
    (0xBC, '\u{0152}'),
    (0xBD, '\u{0153}'),
    (0xBE, '\u{0178}'),
];

fn latin9_byte(character: char) -> Option<u8> {
    if let Some(&(byte, _)) = LATIN9_OVERRIDES.iter().find(|(_, c)| *c == character) {
        return Some(byte);
    }
    let code = u32::from(character);
    if code > 0xFF {
        return None;
    }
    let byte = code as u8;
    if LATIN9_OVERRIDES.iter().any(|(b, _)| *b == byte) {
        // the Latin-1 character at a replaced position
        return None;
    }
    Some(byte)
}

fn latin9_char(byte: u8) -> char {
    LATIN9_OVERRIDES
        .iter()
        .find(|(b, _)| *b == byte)
        .map_or(char::from(byte), |&(_, c)| c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_float_array_exact_values() {
        let buffer = float_array(3, &[1.0, 2.5, -3.25]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer[0].to_bits(), 1.0f32.to_bits());
        assert_eq!(buffer[1].to_bits(), 2.5f32.to_bits());
        assert_eq!(buffer[2].to_bits(), (-3.25f32).to_bits());
    }

    #[test]
    fn test_float_array_reads_only_n() {
        assert_eq!(float_array(2, &[1.0, 2.0, 3.0]), vec![1.0, 2.0]);
        assert!(float_array(0, &[]).is_empty());
    }

    #[test]
    #[should_panic]
    fn test_float_array_short_input_is_not_padded() {
        let _ = float_array(4, &[1.0, 2.0]);
    }

    #[test]
    fn test_float_array_narrows() {
        let buffer = float_array(1, &[0.1]);
        assert_eq!(buffer[0], 0.1f64 as f32);
    }

    #[test]
    fn test_int_array() {
        assert_eq!(int_array(3, &[7, -1, 0, 9]), vec![7, -1, 0]);
    }

    #[test]
    fn test_grid_len() {
        assert_eq!(grid_len(2, 3), 6);
        assert_eq!(grid_len(0, 5), 0);
        assert_eq!(grid_len(usize::MAX, 2), usize::MAX);
    }

    #[test]
    fn test_scaled_len_overflow() {
        assert_eq!(scaled_len(4, 3).unwrap(), 12);
        assert!(matches!(
            scaled_len(usize::MAX / 2, 3),
            Err(BindingError::ArgumentShape(_))
        ));
    }

    #[test]
    fn test_encode_ascii() {
        let encoded = encode_text("x-axis").unwrap();
        assert_eq!(encoded.as_bytes_with_nul(), b"x-axis\0");
    }

    #[test]
    fn test_encode_latin9_specials() {
        let encoded = encode_text("5 € Šž œ").unwrap();
        assert_eq!(
            encoded.as_bytes_with_nul(),
            &[b'5', b' ', 0xA4, b' ', 0xA6, 0xB8, b' ', 0xBD, 0]
        );

        let encoded = encode_text("Grüße °C").unwrap();
        assert_eq!(
            encoded.as_bytes_with_nul(),
            &[b'G', b'r', 0xFC, 0xDF, b'e', b' ', 0xB0, b'C', 0]
        );
    }

    #[test]
    fn test_encode_rejects_replaced_latin1_characters() {
        // U+00A4 CURRENCY SIGN exists in Latin-1 only
        let err = encode_text("a¤").unwrap_err();
        assert!(matches!(
            err,
            BindingError::Encoding {
                character: '¤',
                position: 1
            }
        ));
    }

    #[test]
    fn test_encode_rejects_outside_characters() {
        let err = encode_text("σ = 1").unwrap_err();
        assert!(matches!(
            err,
            BindingError::Encoding {
                character: 'σ',
                position: 0
            }
        ));
        assert!(encode_text("plot ✓").is_err());
    }

    #[test]
    fn test_encode_rejects_interior_nul() {
        assert!(matches!(
            encode_text("a\0b"),
            Err(BindingError::Encoding { position: 1, .. })
        ));
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode_text(&[b'g', b'r', b'3', 0xA4]), "gr3€");
        assert_eq!(decode_text(b""), "");
    }

    proptest! {
        #[test]
        fn float_array_preserves_f32_values(values in prop::collection::vec(-1.0e6f32..1.0e6, 0..64)) {
            let input: Vec<f64> = values.iter().map(|v| f64::from(*v)).collect();
            let buffer = float_array(input.len(), &input);
            prop_assert_eq!(buffer, values);
        }

        #[test]
        fn latin1_subset_roundtrips(text in "[ -~\u{A0}-\u{A3}\u{A5}\u{A7}\u{A9}-\u{B3}\u{B5}-\u{B7}\u{B9}-\u{BB}\u{BF}-\u{FF}]{0,32}") {
            let encoded = encode_text(&text).unwrap();
            prop_assert_eq!(encoded.as_bytes().len(), text.chars().count());
            prop_assert_eq!(decode_text(encoded.as_bytes()), text);
        }
    }
}
