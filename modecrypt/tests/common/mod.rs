//! Shared test cipher for the integration tests.

use modecrypt::cipher::check_block_len;
use modecrypt::{BlockCipher, CipherModeError, Result};

/// Keyed byte shuffle: each output byte depends on a neighbouring input byte,
/// the key and its position. Invertible, not secure.
#[derive(Debug, Clone)]
pub struct ToyCipher {
    block_size: usize,
}

impl ToyCipher {
    pub fn new(block_size: usize) -> Self {
        Self { block_size }
    }
}

impl BlockCipher for ToyCipher {
    fn encrypt(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>> {
        self.check_key(key)?;
        check_block_len(block, self.block_size)?;
        let n = self.block_size;
        Ok((0..n)
            .map(|i| (block[(i + 1) % n] ^ key[i % key.len()]).rotate_left(3).wrapping_add(i as u8))
            .collect())
    }

    fn decrypt(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>> {
        self.check_key(key)?;
        check_block_len(block, self.block_size)?;
        let n = self.block_size;
        let mut out = vec![0u8; n];
        for i in 0..n {
            out[(i + 1) % n] = block[i].wrapping_sub(i as u8).rotate_right(3) ^ key[i % key.len()];
        }
        Ok(out)
    }

    fn block_size(&self) -> usize {
        self.block_size
    }

    fn check_key(&self, key: &[u8]) -> Result<()> {
        match key.len() {
            16 | 24 | 32 => Ok(()),
            len => Err(CipherModeError::InvalidKeyLength { len }),
        }
    }
}

/// Deterministic bytes cycling through every value 0x00..=0xFF.
pub fn pattern(len: usize, seed: u8) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(37).wrapping_add(seed)).collect()
}
