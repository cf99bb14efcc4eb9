//! CFB (Cipher Feedback) mode implementation
//!
//! Full-block segments: the shift register is one block wide and is replaced
//! by each complete ciphertext block, as in NIST SP 800-38A CFB-128 for AES.

use zeroize::Zeroizing;

use crate::{utils, BlockCipher, Result};

use super::CipherModes;

impl CipherModes {
    /// CFB mode encryption
    ///
    /// Algorithm:
    /// 1. R_1 = IV
    /// 2. C_i = P_i ⊕ E(K, R_i)
    /// 3. R_{i+1} = C_i
    ///
    /// A trailing partial block uses only the matching keystream prefix.
    pub fn cfb_encrypt<C: BlockCipher + ?Sized>(
        cipher: &C,
        key: &[u8],
        plaintext: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let block_size = Self::block_size_of(cipher)?;
        Self::validate_iv_length(iv, block_size)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut register = iv.to_vec();

        for chunk in plaintext.chunks(block_size) {
            let keystream = Zeroizing::new(Self::forward(cipher, key, &register, block_size)?);
            let start = ciphertext.len();
            ciphertext.extend_from_slice(chunk);
            utils::xor_into(&mut ciphertext[start..], &keystream);

            // feedback is the ciphertext just produced
            if chunk.len() == block_size {
                register.copy_from_slice(&ciphertext[start..]);
            }
        }

        Ok(ciphertext)
    }

    /// CFB mode decryption
    ///
    /// The register is fed with the received ciphertext, not with the
    /// recovered plaintext, so the keystream matches the encrypting side.
    pub fn cfb_decrypt<C: BlockCipher + ?Sized>(
        cipher: &C,
        key: &[u8],
        ciphertext: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let block_size = Self::block_size_of(cipher)?;
        Self::validate_iv_length(iv, block_size)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut register = iv.to_vec();

        for chunk in ciphertext.chunks(block_size) {
            let keystream = Zeroizing::new(Self::forward(cipher, key, &register, block_size)?);
            let start = plaintext.len();
            plaintext.extend_from_slice(chunk);
            utils::xor_into(&mut plaintext[start..], &keystream);

            if chunk.len() == block_size {
                register.copy_from_slice(chunk);
            }
        }

        Ok(plaintext)
    }
}
