//! CTR (Counter) mode implementation

use zeroize::Zeroizing;

use crate::{utils, BlockCipher, Result};

use super::CipherModes;

impl CipherModes {
    /// CTR mode encryption
    ///
    /// In CTR mode, a counter is used which is incremented for each block.
    /// The encryption of the counter is XORed with the plaintext. The counter
    /// block starts at the IV and is incremented as one big-endian integer
    /// spanning the whole block, wrapping at 2^(8 * block_size).
    ///
    /// Algorithm:
    /// 1. T_1 = IV, T_i = T_{i-1} + 1 mod 2^m
    /// 2. C_i = P_i ⊕ E(K, T_i)
    pub fn ctr_encrypt<C: BlockCipher + ?Sized>(
        cipher: &C,
        key: &[u8],
        plaintext: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let block_size = Self::block_size_of(cipher)?;
        Self::validate_iv_length(iv, block_size)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut counter = iv.to_vec();

        for chunk in plaintext.chunks(block_size) {
            let keystream = Zeroizing::new(Self::forward(cipher, key, &counter, block_size)?);

            // XOR with plaintext (only as many bytes as needed)
            let start = ciphertext.len();
            ciphertext.extend_from_slice(chunk);
            utils::xor_into(&mut ciphertext[start..], &keystream);

            Self::increment_counter(&mut counter);
        }

        Ok(ciphertext)
    }

    /// CTR mode decryption
    ///
    /// Since CTR is a stream cipher mode, decryption is identical to encryption.
    pub fn ctr_decrypt<C: BlockCipher + ?Sized>(
        cipher: &C,
        key: &[u8],
        ciphertext: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        Self::ctr_encrypt(cipher, key, ciphertext, iv)
    }

    /// Adds one to a big-endian counter block, carrying leftwards.
    fn increment_counter(counter: &mut [u8]) {
        for byte in counter.iter_mut().rev() {
            *byte = byte.wrapping_add(1);
            if *byte != 0 {
                break;
            }
        }
    }
}
