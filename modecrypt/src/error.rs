//! Error types for cipher mode operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherModeError {
    #[error("Unsupported cipher mode: {0}")]
    UnsupportedMode(String),

    #[error("Unsupported padding scheme: {0}")]
    UnsupportedPadding(String),

    #[error("Invalid key length: {len} bytes not accepted by the block cipher")]
    InvalidKeyLength { len: usize },

    #[error("Invalid IV length (expected {expected} bytes, got {actual})")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("{padding} padding requires an 8-byte block size, cipher uses {block_size}")]
    BlockSizeMismatch {
        padding: &'static str,
        block_size: usize,
    },

    #[error("Input of {len} bytes is not a multiple of the {block_size}-byte block size")]
    InputNotBlockAligned { len: usize, block_size: usize },

    #[error("Invalid padding")]
    InvalidPadding,

    #[error("Invalid block size (must be > 0)")]
    InvalidBlockSize,

    #[error("Block cipher error: {0}")]
    Cipher(String),
}

pub type Result<T> = std::result::Result<T, CipherModeError>;
