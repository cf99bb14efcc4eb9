//! ECB (Electronic Code Book) mode implementation
//!
//! Every block is transformed independently under the same key, so equal
//! plaintext blocks always give equal ciphertext blocks.

use zeroize::Zeroizing;

use crate::{utils, BlockCipher, Result};

use super::CipherModes;

impl CipherModes {
    /// ECB mode encryption
    pub fn ecb_encrypt<C: BlockCipher + ?Sized>(
        cipher: &C,
        key: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>> {
        let block_size = Self::block_size_of(cipher)?;
        utils::check_aligned(plaintext.len(), block_size)?;

        let mut ciphertext: Vec<u8> = Vec::with_capacity(plaintext.len());

        for chunk in plaintext.chunks(block_size) {
            let encrypted_block = Self::forward(cipher, key, chunk, block_size)?;
            ciphertext.extend_from_slice(&encrypted_block);
        }

        Ok(ciphertext)
    }

    /// ECB mode decryption
    pub fn ecb_decrypt<C: BlockCipher + ?Sized>(
        cipher: &C,
        key: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>> {
        let block_size = Self::block_size_of(cipher)?;
        utils::check_aligned(ciphertext.len(), block_size)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());

        for chunk in ciphertext.chunks(block_size) {
            let decrypted_block = Zeroizing::new(Self::inverse(cipher, key, chunk, block_size)?);
            plaintext.extend_from_slice(&decrypted_block);
        }

        Ok(plaintext)
    }
}
