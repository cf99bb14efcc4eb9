//! Cipher configuration: mode, padding, key and IV bundled into one value.
//!
//! A [`CipherConfig`] is produced by [`CipherConfigBuilder`] and never changes
//! afterwards, so one value can be shared by reference across threads. Key
//! and IV bytes are wiped when the builder or the config is dropped.

use std::fmt;

use tracing::{debug, instrument};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{CipherModeError, Result};
use crate::modes::{CipherModes, Mode};
use crate::padding::{Padding, PKCS5_BLOCK_SIZE};
use crate::BlockCipher;

/// Builds a config in one call. Validation happens on first use.
pub fn configure(mode: Mode, padding: Padding, key: &[u8], iv: &[u8]) -> CipherConfig {
    CipherConfig::builder()
        .mode(mode)
        .padding(padding)
        .key(key)
        .iv(iv)
        .build()
}

/// Immutable mode/padding/key/IV bundle.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CipherConfig {
    #[zeroize(skip)]
    mode: Mode,
    #[zeroize(skip)]
    padding: Padding,
    key: Vec<u8>,
    iv: Vec<u8>,
}

/// Collects config fields; defaults to CBC with PKCS#7 padding.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct CipherConfigBuilder {
    #[zeroize(skip)]
    mode: Mode,
    #[zeroize(skip)]
    padding: Padding,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl CipherConfigBuilder {
    /// Sets the mode of operation.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the padding scheme. Ignored by CFB, OFB and CTR.
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the key bytes. Use [`crate::utils::text_bytes`] for text keys.
    pub fn key(mut self, key: &[u8]) -> Self {
        self.key.zeroize();
        self.key = key.to_vec();
        self
    }

    /// Sets the IV bytes. Use [`crate::utils::text_bytes`] for text IVs.
    pub fn iv(mut self, iv: &[u8]) -> Self {
        self.iv.zeroize();
        self.iv = iv.to_vec();
        self
    }

    /// Finishes the builder without validating against a cipher.
    ///
    /// Validation still runs before every transformation.
    pub fn build(mut self) -> CipherConfig {
        CipherConfig {
            mode: self.mode,
            padding: self.padding,
            key: std::mem::take(&mut self.key),
            iv: std::mem::take(&mut self.iv),
        }
    }

    /// Finishes the builder and validates the result against `cipher`.
    pub fn build_for<C: BlockCipher + ?Sized>(self, cipher: &C) -> Result<CipherConfig> {
        let config = self.build();
        config.validate(cipher)?;
        Ok(config)
    }
}

impl CipherConfig {
    /// Starts a builder with CBC and PKCS#7 defaults.
    pub fn builder() -> CipherConfigBuilder {
        CipherConfigBuilder::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    /// Checks the config against `cipher` and returns the first violation.
    ///
    /// Order: key size, IV length, PKCS#5 block size. Input alignment for
    /// unpadded block modes is checked per call, since it depends on the data.
    pub fn validate<C: BlockCipher + ?Sized>(&self, cipher: &C) -> Result<()> {
        let block_size = cipher.block_size();
        CipherModes::validate_block_size(block_size)?;

        cipher.check_key(&self.key).map_err(|err| match err {
            CipherModeError::InvalidKeyLength { .. } => err,
            _ => CipherModeError::InvalidKeyLength { len: self.key.len() },
        })?;

        if self.mode.requires_iv() {
            CipherModes::validate_iv_length(&self.iv, block_size)?;
        }

        if self.mode.requires_padding()
            && self.padding == Padding::Pkcs5
            && block_size != PKCS5_BLOCK_SIZE
        {
            return Err(CipherModeError::BlockSizeMismatch {
                padding: "PKCS5",
                block_size,
            });
        }

        Ok(())
    }

    /// Pads (CBC, ECB) and encrypts `plaintext`.
    #[instrument(
        level = "debug",
        skip_all,
        fields(mode = %self.mode, padding = %self.padding, len = plaintext.len())
    )]
    pub fn encrypt<C: BlockCipher + ?Sized>(&self, plaintext: &[u8], cipher: &C) -> Result<Vec<u8>> {
        self.validate(cipher).inspect_err(|err| debug!(%err, "config rejected"))?;
        let block_size = cipher.block_size();

        let ciphertext = if self.mode.requires_padding() {
            let padded = Zeroizing::new(self.padding.apply(plaintext, block_size)?);
            CipherModes::encrypt(self.mode, cipher, &self.key, &padded, &self.iv)?
        } else {
            CipherModes::encrypt(self.mode, cipher, &self.key, plaintext, &self.iv)?
        };

        debug!(out_len = ciphertext.len(), "encrypted");
        Ok(ciphertext)
    }

    /// Decrypts `ciphertext` and strips padding (CBC, ECB).
    #[instrument(
        level = "debug",
        skip_all,
        fields(mode = %self.mode, padding = %self.padding, len = ciphertext.len())
    )]
    pub fn decrypt<C: BlockCipher + ?Sized>(&self, ciphertext: &[u8], cipher: &C) -> Result<Vec<u8>> {
        self.validate(cipher).inspect_err(|err| debug!(%err, "config rejected"))?;
        let block_size = cipher.block_size();

        let plaintext = if self.mode.requires_padding() {
            let padded = Zeroizing::new(CipherModes::decrypt(
                self.mode, cipher, &self.key, ciphertext, &self.iv,
            )?);
            self.padding
                .remove(&padded, block_size)
                .inspect_err(|err| debug!(%err, "padding rejected"))?
        } else {
            CipherModes::decrypt(self.mode, cipher, &self.key, ciphertext, &self.iv)?
        };

        debug!(out_len = plaintext.len(), "decrypted");
        Ok(plaintext)
    }
}

impl fmt::Debug for CipherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherConfig")
            .field("mode", &self.mode)
            .field("padding", &self.padding)
            .field("key", &format_args!("<{} bytes>", self.key.len()))
            .field("iv", &format_args!("<{} bytes>", self.iv.len()))
            .finish()
    }
}
