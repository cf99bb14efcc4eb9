//! Cipher modes implementation
//!
//! Each mode lives in its own file as a set of associated functions on
//! [`CipherModes`]. The functions work on raw, already padded bytes; padding
//! is the caller's concern (see [`crate::CipherConfig`]).

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::{CipherModeError, Result};
use crate::BlockCipher;

/// Main struct for cipher modes
pub struct CipherModes;

/// Block cipher mode of operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Cipher Block Chaining
    #[default]
    Cbc,
    /// Electronic Code Book
    Ecb,
    /// Cipher Feedback, full-block segments
    Cfb,
    /// Output Feedback
    Ofb,
    /// Counter
    Ctr,
}

impl Mode {
    /// Every supported mode.
    pub const ALL: [Mode; 5] = [Mode::Cbc, Mode::Ecb, Mode::Cfb, Mode::Ofb, Mode::Ctr];

    /// Canonical lower-case name, also accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Cbc => "cbc",
            Mode::Ecb => "ecb",
            Mode::Cfb => "cfb",
            Mode::Ofb => "ofb",
            Mode::Ctr => "ctr",
        }
    }

    /// Block modes need block-aligned input and therefore padding.
    pub fn requires_padding(&self) -> bool {
        matches!(self, Mode::Cbc | Mode::Ecb)
    }

    /// Every mode except ECB needs an IV of one block.
    pub fn requires_iv(&self) -> bool {
        !matches!(self, Mode::Ecb)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = CipherModeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cbc" => Ok(Mode::Cbc),
            "ecb" => Ok(Mode::Ecb),
            "cfb" => Ok(Mode::Cfb),
            "ofb" => Ok(Mode::Ofb),
            "ctr" => Ok(Mode::Ctr),
            _ => Err(CipherModeError::UnsupportedMode(s.to_string())),
        }
    }
}

impl CipherModes {
    /// Encrypts `data` with `mode`. `iv` is ignored for ECB.
    pub fn encrypt<C: BlockCipher + ?Sized>(
        mode: Mode,
        cipher: &C,
        key: &[u8],
        data: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        trace!(%mode, len = data.len(), "mode encrypt");
        match mode {
            Mode::Cbc => Self::cbc_encrypt(cipher, key, data, iv),
            Mode::Ecb => Self::ecb_encrypt(cipher, key, data),
            Mode::Cfb => Self::cfb_encrypt(cipher, key, data, iv),
            Mode::Ofb => Self::ofb_encrypt(cipher, key, data, iv),
            Mode::Ctr => Self::ctr_encrypt(cipher, key, data, iv),
        }
    }

    /// Decrypts `data` with `mode`. `iv` is ignored for ECB.
    pub fn decrypt<C: BlockCipher + ?Sized>(
        mode: Mode,
        cipher: &C,
        key: &[u8],
        data: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        trace!(%mode, len = data.len(), "mode decrypt");
        match mode {
            Mode::Cbc => Self::cbc_decrypt(cipher, key, data, iv),
            Mode::Ecb => Self::ecb_decrypt(cipher, key, data),
            Mode::Cfb => Self::cfb_decrypt(cipher, key, data, iv),
            Mode::Ofb => Self::ofb_decrypt(cipher, key, data, iv),
            Mode::Ctr => Self::ctr_decrypt(cipher, key, data, iv),
        }
    }

    /// Reads and validates the cipher's block size.
    pub(crate) fn block_size_of<C: BlockCipher + ?Sized>(cipher: &C) -> Result<usize> {
        let block_size = cipher.block_size();
        Self::validate_block_size(block_size)?;
        Ok(block_size)
    }

    /// Runs one forward block operation and checks the adapter's output length.
    pub(crate) fn forward<C: BlockCipher + ?Sized>(
        cipher: &C,
        key: &[u8],
        block: &[u8],
        block_size: usize,
    ) -> Result<Vec<u8>> {
        let out = cipher.encrypt(key, block)?;
        Self::check_output(out, block_size)
    }

    /// Runs one inverse block operation and checks the adapter's output length.
    pub(crate) fn inverse<C: BlockCipher + ?Sized>(
        cipher: &C,
        key: &[u8],
        block: &[u8],
        block_size: usize,
    ) -> Result<Vec<u8>> {
        let out = cipher.decrypt(key, block)?;
        Self::check_output(out, block_size)
    }

    fn check_output(out: Vec<u8>, block_size: usize) -> Result<Vec<u8>> {
        if out.len() != block_size {
            return Err(CipherModeError::Cipher(format!(
                "block cipher returned {} bytes for a {}-byte block",
                out.len(),
                block_size
            )));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse_and_display() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
        assert_eq!("CTR".parse::<Mode>().unwrap(), Mode::Ctr);
        assert_eq!(
            "gcm".parse::<Mode>(),
            Err(CipherModeError::UnsupportedMode("gcm".to_string()))
        );
    }

    #[test]
    fn test_mode_properties() {
        assert_eq!(Mode::default(), Mode::Cbc);
        assert!(Mode::Cbc.requires_padding());
        assert!(Mode::Ecb.requires_padding());
        assert!(!Mode::Cfb.requires_padding());
        assert!(!Mode::Ofb.requires_padding());
        assert!(!Mode::Ctr.requires_padding());
        assert!(!Mode::Ecb.requires_iv());
        assert!(Mode::Ctr.requires_iv());
    }
}
