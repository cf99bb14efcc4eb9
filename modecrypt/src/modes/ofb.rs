//! OFB (Output Feedback) mode implementation

use zeroize::Zeroizing;

use crate::{utils, BlockCipher, Result};

use super::CipherModes;

impl CipherModes {
    /// OFB mode encryption
    ///
    /// In OFB mode, the block cipher is used to generate a pseudorandom keystream
    /// which is then XORed with the plaintext. The keystream never depends on
    /// the data.
    ///
    /// Algorithm:
    /// 1. O_0 = IV
    /// 2. O_i = E(K, O_{i-1}) for i = 1, 2, ..., n
    /// 3. C_i = P_i ⊕ O_i
    pub fn ofb_encrypt<C: BlockCipher + ?Sized>(
        cipher: &C,
        key: &[u8],
        plaintext: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let block_size = Self::block_size_of(cipher)?;
        Self::validate_iv_length(iv, block_size)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut feedback = Zeroizing::new(iv.to_vec());

        for chunk in plaintext.chunks(block_size) {
            feedback = Zeroizing::new(Self::forward(cipher, key, &feedback, block_size)?);

            let start = ciphertext.len();
            ciphertext.extend_from_slice(chunk);
            utils::xor_into(&mut ciphertext[start..], &feedback);
        }

        Ok(ciphertext)
    }

    /// OFB mode decryption
    ///
    /// Since OFB is a stream cipher mode, decryption is identical to encryption.
    pub fn ofb_decrypt<C: BlockCipher + ?Sized>(
        cipher: &C,
        key: &[u8],
        ciphertext: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        Self::ofb_encrypt(cipher, key, ciphertext, iv)
    }
}
