// Hex transport encoding for on-chain `bytes` arguments

use crate::error::CodecError;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Encode bytes as `0x` followed by two lowercase hex digits per byte
pub fn audio_to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(2 + bytes.len() * 2);
    hex.push_str("0x");
    for &byte in bytes {
        hex.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        hex.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }
    hex
}

/// Decode a hex string, with or without a leading `0x`
///
/// Upper- and lower-case digits are accepted. Odd length or a non-hex
/// character is an error rather than a silently truncated buffer.
pub fn hex_to_audio(hex: &str) -> Result<Vec<u8>, CodecError> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex)
        .as_bytes();

    if digits.len() % 2 != 0 {
        return Err(CodecError::InvalidHex {
            reason: format!("odd number of hex digits ({})", digits.len()),
        });
    }

    digits
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| {
            let high = nibble(pair[0]);
            let low = nibble(pair[1]);
            match (high, low) {
                (Some(high), Some(low)) => Ok((high << 4) | low),
                _ => Err(CodecError::InvalidHex {
                    reason: format!("non-hex digit in byte {}", i),
                }),
            }
        })
        .collect()
}

fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
