//! Generic block cipher trait

use crate::error::{CipherModeError, Result};

/// A block cipher the modes of operation run on top of.
///
/// Implementations transform exactly one block per call and must reject
/// buffers whose length differs from [`BlockCipher::block_size`]. The key is
/// passed on every call so a single adapter value can serve many configs.
pub trait BlockCipher {
    /// Encrypts a single block
    fn encrypt(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts a single block
    fn decrypt(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>>;

    /// Returns the block size of the cipher
    fn block_size(&self) -> usize;

    /// Checks that `key` is a size this cipher accepts.
    ///
    /// The default accepts any non-empty key; ciphers with fixed key sizes
    /// should override it.
    fn check_key(&self, key: &[u8]) -> Result<()> {
        if key.is_empty() {
            return Err(CipherModeError::InvalidKeyLength { len: 0 });
        }
        Ok(())
    }
}

/// Checks a single-block buffer against the cipher's block size.
///
/// Adapters call this at the top of `encrypt`/`decrypt`.
pub fn check_block_len(block: &[u8], block_size: usize) -> Result<()> {
    if block.len() != block_size {
        return Err(CipherModeError::Cipher(format!(
            "expected a {}-byte block, got {} bytes",
            block_size,
            block.len()
        )));
    }
    Ok(())
}
