use base64::{engine::general_purpose::STANDARD, Engine};
use percent_encoding::percent_decode_str;

use crate::Error;

pub trait SigningKey {
    /// Signs `signing_bytes`, returning the raw signature bytes.
    fn sign_bytes(&self, signing_bytes: &[u8]) -> Result<Vec<u8>, Error>;
}

impl<'a, T: SigningKey> SigningKey for &'a T {
    fn sign_bytes(&self, signing_bytes: &[u8]) -> Result<Vec<u8>, Error> {
        T::sign_bytes(*self, signing_bytes)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid signature encoding: {0}")]
pub struct InvalidSignatureEncoding(#[from] base64::DecodeError);

/// Decodes the signature field of a WLS response.
///
/// The field is percent-decoded exactly once, then the protocol's base64
/// variant is mapped back to standard base64 (`-` to `+`, `.` to `/` and `_`
/// to `=`) before decoding.
pub fn decode_signature(encoded: &str) -> Result<Vec<u8>, InvalidSignatureEncoding> {
    let standard: Vec<u8> = percent_decode_str(encoded)
        .map(|b| match b {
            b'-' => b'+',
            b'.' => b'/',
            b'_' => b'=',
            b => b,
        })
        .collect();

    Ok(STANDARD.decode(standard)?)
}

/// Encodes raw signature bytes using the protocol's base64 variant.
pub fn encode_signature(signature: &[u8]) -> String {
    STANDARD
        .encode(signature)
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '.',
            '=' => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_substitutes_variant_characters() {
        // 0xfb 0xff 0xbf encodes to "+/+/" in standard base64.
        assert_eq!(decode_signature("-.-.").unwrap(), vec![0xfb, 0xff, 0xbf]);
        assert_eq!(decode_signature("YQ__").unwrap(), b"a");
    }

    #[test]
    fn encode_uses_variant_alphabet() {
        assert_eq!(encode_signature(&[0xfb, 0xff, 0xbf]), "-.-.");
        assert_eq!(encode_signature(b"a"), "YQ__");
    }

    #[test]
    fn decode_percent_decodes_once() {
        // `%5F` is `_`, i.e. padding.
        assert_eq!(decode_signature("YQ%5F%5F").unwrap(), b"a");

        // `%255F` decodes to the literal `%5F`, which is not base64.
        assert!(decode_signature("YQ%255F%255F").is_err());
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_signature("not base64!").is_err());
        assert!(decode_signature("YQ").is_err());
    }
}
