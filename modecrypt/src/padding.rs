//! Padding schemes for block-aligned modes
//!
//! Every scheme except [`Padding::None`] always appends at least one byte:
//! input that is already block-aligned receives a full extra block. Removal
//! never guesses; malformed PKCS#7/PKCS#5 padding is an error.

use std::fmt;
use std::str::FromStr;

use crate::error::{CipherModeError, Result};

/// Block size PKCS#5 padding is defined for.
pub const PKCS5_BLOCK_SIZE: usize = 8;

/// Padding scheme applied before CBC/ECB encryption and removed after decryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Padding {
    /// No padding; input must already be block-aligned.
    None,
    /// Zero bytes. Lossy when the plaintext itself ends in zero bytes.
    Zero,
    /// PKCS#7 restricted to 8-byte blocks.
    Pkcs5,
    /// PKCS#7: `n` bytes each holding the value `n`.
    #[default]
    Pkcs7,
}

impl Padding {
    /// Every supported scheme.
    pub const ALL: [Padding; 4] = [Padding::None, Padding::Zero, Padding::Pkcs5, Padding::Pkcs7];

    /// Canonical lower-case name, also accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Padding::None => "no",
            Padding::Zero => "zero",
            Padding::Pkcs5 => "pkcs5",
            Padding::Pkcs7 => "pkcs7",
        }
    }

    /// Pads `data` out to a multiple of `block_size`.
    pub fn apply(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        match self {
            Padding::None => Ok(data.to_vec()),
            Padding::Zero => {
                if block_size == 0 {
                    return Err(CipherModeError::InvalidBlockSize);
                }
                let count = pad_count(data.len(), block_size);
                let mut padded = Vec::with_capacity(data.len() + count);
                padded.extend_from_slice(data);
                padded.resize(data.len() + count, 0);
                Ok(padded)
            }
            Padding::Pkcs5 => {
                check_pkcs5(block_size)?;
                pkcs7_pad(data, PKCS5_BLOCK_SIZE)
            }
            Padding::Pkcs7 => pkcs7_pad(data, block_size),
        }
    }

    /// Strips padding previously added by [`Padding::apply`].
    pub fn remove(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        match self {
            Padding::None => Ok(data.to_vec()),
            Padding::Zero => Ok(zero_unpad(data).to_vec()),
            Padding::Pkcs5 => {
                check_pkcs5(block_size)?;
                pkcs7_unpad(data, PKCS5_BLOCK_SIZE).map(<[u8]>::to_vec)
            }
            Padding::Pkcs7 => pkcs7_unpad(data, block_size).map(<[u8]>::to_vec),
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Padding {
    type Err = CipherModeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "no" | "none" => Ok(Padding::None),
            "zero" => Ok(Padding::Zero),
            "pkcs5" => Ok(Padding::Pkcs5),
            "pkcs7" => Ok(Padding::Pkcs7),
            _ => Err(CipherModeError::UnsupportedPadding(s.to_string())),
        }
    }
}

/// Bytes to append; always in `1..=block_size`.
fn pad_count(len: usize, block_size: usize) -> usize {
    block_size - len % block_size
}

fn check_pkcs5(block_size: usize) -> Result<()> {
    if block_size != PKCS5_BLOCK_SIZE {
        return Err(CipherModeError::BlockSizeMismatch {
            padding: "PKCS5",
            block_size,
        });
    }
    Ok(())
}

fn pkcs7_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    // the pad count must fit in one byte
    if block_size == 0 || block_size > u8::MAX as usize {
        return Err(CipherModeError::InvalidBlockSize);
    }
    let count = pad_count(data.len(), block_size);
    let mut padded = Vec::with_capacity(data.len() + count);
    padded.extend_from_slice(data);
    padded.resize(data.len() + count, count as u8);
    Ok(padded)
}

fn pkcs7_unpad(data: &[u8], block_size: usize) -> Result<&[u8]> {
    let Some(&last) = data.last() else {
        return Err(CipherModeError::InvalidPadding);
    };
    let count = last as usize;
    if count == 0 || count > block_size || count > data.len() {
        return Err(CipherModeError::InvalidPadding);
    }

    let (body, pad) = data.split_at(data.len() - count);
    // scan the whole pad before deciding
    let mismatch = pad.iter().fold(0u8, |acc, &b| acc | (b ^ last));
    if mismatch != 0 {
        return Err(CipherModeError::InvalidPadding);
    }
    Ok(body)
}

/// Strips trailing zero bytes; an all-zero buffer yields an empty slice.
fn zero_unpad(data: &[u8]) -> &[u8] {
    let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &data[..end]
}
