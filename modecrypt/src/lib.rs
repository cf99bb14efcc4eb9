//! # Modecrypt
//!
//! Block cipher modes of operation and padding schemes, generic over any
//! block cipher that implements [`BlockCipher`].
//!
//! ## Supported Modes
//!
//! - **ECB** (Electronic Code Book) - Simple but insecure mode
//! - **CBC** (Cipher Block Chaining) - Widely used, requires IV
//! - **CFB** (Cipher Feedback) - Stream cipher mode, full-block feedback
//! - **OFB** (Output Feedback) - Stream cipher mode
//! - **CTR** (Counter Mode) - Stream cipher mode, parallelizable
//!
//! ## Padding
//!
//! `None`, `Zero`, `PKCS5` and `PKCS7`. Padding only applies to CBC and ECB;
//! the stream modes keep the input length.
//!
//! ## Usage
//!
//! ```rust
//! use modecrypt::{CipherConfig, DummyCipher, Mode, Padding};
//! use modecrypt::utils::text_bytes;
//!
//! // Create a cipher (replace with your AES implementation)
//! let cipher = DummyCipher::new(16);
//!
//! let config = CipherConfig::builder()
//!     .mode(Mode::Cbc)
//!     .padding(Padding::Pkcs7)
//!     .key(&text_bytes("0123456789abcdef"))
//!     .iv(&text_bytes("fedcba9876543210"))
//!     .build();
//!
//! let encrypted = config.encrypt(b"hello world", &cipher)?;
//! assert_eq!(encrypted.len(), 16);
//!
//! let decrypted = config.decrypt(&encrypted, &cipher)?;
//! assert_eq!(decrypted, b"hello world");
//! # Ok::<(), modecrypt::CipherModeError>(())
//! ```

// Public modules
pub mod cipher;
pub mod config;
pub mod error;
pub mod modes;
pub mod padding;
pub mod utils;

// Re-exports for easy access
pub use cipher::BlockCipher;
pub use config::{configure, CipherConfig, CipherConfigBuilder};
pub use error::{CipherModeError, Result};
pub use modes::{CipherModes, Mode};
pub use padding::Padding;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dummy cipher implementation for testing and demonstration
///
/// This is a simple XOR-based "cipher" that should **never** be used in production.
/// It's only provided for testing the cipher modes without requiring a real cipher implementation.
///
/// # Example
///
/// ```rust
/// use modecrypt::{DummyCipher, BlockCipher};
///
/// let cipher = DummyCipher::new(16);
/// assert_eq!(cipher.block_size(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct DummyCipher {
    block_size: usize,
}

impl DummyCipher {
    /// Create a new dummy cipher with the specified block size
    pub fn new(block_size: usize) -> Self {
        Self { block_size }
    }

    fn xor_with_key(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>> {
        self.check_key(key)?;
        cipher::check_block_len(block, self.block_size)?;

        // Create repeating key pattern
        Ok(block
            .iter()
            .zip(key.iter().cycle())
            .map(|(b, k)| b ^ k)
            .collect())
    }
}

impl BlockCipher for DummyCipher {
    /// "Encrypt" a block using simple XOR (for testing only!)
    fn encrypt(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>> {
        self.xor_with_key(key, block)
    }

    /// "Decrypt" a block using simple XOR (identical to encrypt for XOR)
    fn decrypt(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>> {
        self.xor_with_key(key, block)
    }

    /// Return the block size
    fn block_size(&self) -> usize {
        self.block_size
    }
}

/// Convenience functions for common operations
impl CipherModes {
    /// Get version information
    pub fn version() -> &'static str {
        VERSION
    }

    /// List all supported cipher modes
    pub fn supported_modes() -> Vec<&'static str> {
        Mode::ALL.iter().map(Mode::name).collect()
    }

    /// List all supported padding schemes
    pub fn supported_paddings() -> Vec<&'static str> {
        Padding::ALL.iter().map(Padding::name).collect()
    }

    /// Validate block size
    pub fn validate_block_size(block_size: usize) -> Result<()> {
        if block_size == 0 {
            Err(CipherModeError::InvalidBlockSize)
        } else {
            Ok(())
        }
    }

    /// Validate IV length for modes that require it
    pub fn validate_iv_length(iv: &[u8], block_size: usize) -> Result<()> {
        if iv.len() != block_size {
            Err(CipherModeError::InvalidIvLength {
                expected: block_size,
                actual: iv.len(),
            })
        } else {
            Ok(())
        }
    }
}
