//! CBC (Cipher Block Chaining) mode implementation

use zeroize::Zeroizing;

use crate::{utils, BlockCipher, Result};

use super::CipherModes;

impl CipherModes {
    /// CBC mode encryption
    ///
    /// Algorithm:
    /// 1. C_0 = IV
    /// 2. C_i = E(K, P_i ⊕ C_{i-1})
    ///
    /// `plaintext` must already be padded to a multiple of the block size.
    pub fn cbc_encrypt<C: BlockCipher + ?Sized>(
        cipher: &C,
        key: &[u8],
        plaintext: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let block_size = Self::block_size_of(cipher)?;
        Self::validate_iv_length(iv, block_size)?;
        utils::check_aligned(plaintext.len(), block_size)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut previous_block = iv.to_vec();

        for chunk in plaintext.chunks(block_size) {
            let xored = Zeroizing::new(utils::xor_blocks(chunk, &previous_block)?);
            previous_block = Self::forward(cipher, key, &xored, block_size)?;
            ciphertext.extend_from_slice(&previous_block);
        }

        Ok(ciphertext)
    }

    /// CBC mode decryption
    ///
    /// P_i = D(K, C_i) ⊕ C_{i-1}, with C_0 = IV. Padding is left in place.
    pub fn cbc_decrypt<C: BlockCipher + ?Sized>(
        cipher: &C,
        key: &[u8],
        ciphertext: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let block_size = Self::block_size_of(cipher)?;
        Self::validate_iv_length(iv, block_size)?;
        utils::check_aligned(ciphertext.len(), block_size)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut previous_block: &[u8] = iv;

        for chunk in ciphertext.chunks(block_size) {
            let mut block = Zeroizing::new(Self::inverse(cipher, key, chunk, block_size)?);
            utils::xor_into(&mut block, previous_block);
            plaintext.extend_from_slice(&block);
            previous_block = chunk;
        }

        Ok(plaintext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CipherModeError, DummyCipher};

    #[test]
    fn test_cbc_encrypt_decrypt() {
        let cipher = DummyCipher::new(8);
        let key = b"testkey1";
        let plaintext = b"Sixteen byte msg and eight more!";
        let iv = b"initialv";

        let ciphertext = CipherModes::cbc_encrypt(&cipher, key, plaintext, iv).unwrap();
        assert_eq!(ciphertext.len(), plaintext.len());

        let decrypted = CipherModes::cbc_decrypt(&cipher, key, &ciphertext, iv).unwrap();
        assert_eq!(plaintext, &decrypted[..]);
    }

    #[test]
    fn test_cbc_chains_previous_block() {
        let cipher = DummyCipher::new(4);
        let key = [0x0f; 4];
        let iv = [0x01, 0x02, 0x03, 0x04];
        let plaintext = [0x10, 0x20, 0x30, 0x40, 0x10, 0x20, 0x30, 0x40];

        let ciphertext = CipherModes::cbc_encrypt(&cipher, &key, &plaintext, &iv).unwrap();

        // E(x) = x ^ key for the dummy cipher
        let c1: Vec<u8> = (0..4).map(|i| plaintext[i] ^ iv[i] ^ key[i]).collect();
        let c2: Vec<u8> = (0..4).map(|i| plaintext[4 + i] ^ c1[i] ^ key[i]).collect();
        assert_eq!(&ciphertext[..4], &c1[..]);
        assert_eq!(&ciphertext[4..], &c2[..]);
        // identical plaintext blocks diverge under chaining
        assert_ne!(c1, c2);
    }

    #[test]
    fn test_cbc_rejects_misaligned_input() {
        let cipher = DummyCipher::new(16);
        let key = b"test-key-16-byte";
        let iv = b"initialization16";

        let result = CipherModes::cbc_encrypt(&cipher, key, &[0u8; 10], iv);
        assert_eq!(
            result,
            Err(CipherModeError::InputNotBlockAligned { len: 10, block_size: 16 })
        );

        let result = CipherModes::cbc_decrypt(&cipher, key, &[0u8; 17], iv);
        assert!(matches!(result, Err(CipherModeError::InputNotBlockAligned { .. })));
    }

    #[test]
    fn test_cbc_invalid_iv_length() {
        let cipher = DummyCipher::new(8);
        let result = CipherModes::cbc_encrypt(&cipher, b"testkey1", &[0u8; 8], b"short");
        assert_eq!(result, Err(CipherModeError::InvalidIvLength { expected: 8, actual: 5 }));
    }

    #[test]
    fn test_cbc_empty_input() {
        let cipher = DummyCipher::new(8);
        let ciphertext = CipherModes::cbc_encrypt(&cipher, b"testkey1", b"", b"initialv").unwrap();
        assert!(ciphertext.is_empty());
    }
}
