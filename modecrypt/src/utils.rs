//! Utility functions for cipher modes

use crate::error::{CipherModeError, Result};

/// Normalizes text into key or IV bytes.
///
/// This is the only place text enters the crate: the UTF-8 encoding of
/// `text` is used as-is, with no trimming, hex or base64 decoding.
pub fn text_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// XOR two byte arrays
pub fn xor_blocks(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(CipherModeError::Cipher(
            "Blocks have different lengths for XOR".to_string()
        ));
    }

    Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
}

/// XORs `src` into `dst`, byte by byte, over the shorter of the two.
pub(crate) fn xor_into(dst: &mut [u8], src: &[u8]) {
    dst.iter_mut().zip(src).for_each(|(d, s)| *d ^= s);
}

/// Fails with `InputNotBlockAligned` unless `len` is a whole number of blocks.
pub fn check_aligned(len: usize, block_size: usize) -> Result<()> {
    if block_size == 0 {
        return Err(CipherModeError::InvalidBlockSize);
    }
    if len % block_size != 0 {
        return Err(CipherModeError::InputNotBlockAligned { len, block_size });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_bytes_is_utf8() {
        assert_eq!(text_bytes("0123456789abcdef"), b"0123456789abcdef".to_vec());
        assert_eq!(text_bytes("é"), vec![0xc3, 0xa9]);
        assert!(text_bytes("").is_empty());
    }

    #[test]
    fn test_xor_blocks_length_mismatch() {
        assert!(matches!(
            xor_blocks(&[1, 2, 3], &[1, 2]),
            Err(CipherModeError::Cipher(_))
        ));
        assert_eq!(xor_blocks(&[0xff, 0x0f], &[0x0f, 0x0f]).unwrap(), vec![0xf0, 0x00]);
    }

    #[test]
    fn test_xor_into_uses_shorter_length() {
        let mut dst = [0xaa, 0xaa, 0xaa];
        xor_into(&mut dst, &[0xff]);
        assert_eq!(dst, [0x55, 0xaa, 0xaa]);
    }

    #[test]
    fn test_check_aligned() {
        assert!(check_aligned(0, 16).is_ok());
        assert!(check_aligned(32, 16).is_ok());
        assert_eq!(
            check_aligned(10, 16),
            Err(CipherModeError::InputNotBlockAligned { len: 10, block_size: 16 })
        );
        assert_eq!(check_aligned(8, 0), Err(CipherModeError::InvalidBlockSize));
    }
}
