//! AES-128 adapter for `modecrypt` and helpers for the `aes-modes` CLI.

pub mod aes;

pub use aes::Aes128;

use modecrypt::utils::text_bytes;
use zeroize::Zeroizing;

/// Turns a key or IV argument into bytes.
///
/// With `hex` set the argument is hex-decoded (whitespace ignored), otherwise
/// its UTF-8 bytes are used unchanged.
pub fn decode_secret(arg: &str, hex: bool) -> Result<Zeroizing<Vec<u8>>, hex::FromHexError> {
    if hex {
        let digits: Zeroizing<String> = Zeroizing::new(arg.chars().filter(|c| !c.is_whitespace()).collect());
        Ok(Zeroizing::new(hex::decode(digits.as_str())?))
    } else {
        Ok(Zeroizing::new(text_bytes(arg)))
    }
}
