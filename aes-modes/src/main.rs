//! AES-128 file encryption in any supported mode of operation.
//!
//! Reads raw bytes from the input file and writes raw bytes to the output
//! file. Set `RUST_LOG=debug` to trace the engine's decisions on stderr.

use std::fs;

use aes_modes::{decode_secret, Aes128};
use clap::{Parser, ValueEnum};
use modecrypt::{CipherConfig, CipherModeError, Mode, Padding};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the AES-128 modes program.
#[derive(Parser, Debug)]
#[command(name = "aes-modes", version, about = "AES-128 with CBC/ECB/CFB/OFB/CTR and padding")]
struct Cli {
    /// Path to the input file.
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Path to the output file.
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Key for the cipher.
    #[arg(short, long, help = "Key: 16 characters of text, or 32 hex digits with --hex")]
    key: String,

    /// Initialization vector, unused by ECB.
    #[arg(short, long, help = "IV: 16 characters of text, or 32 hex digits with --hex")]
    iv: Option<String>,

    /// Treat key and IV as hexadecimal.
    #[arg(long)]
    hex: bool,

    /// Whether to encrypt or decrypt.
    #[arg(short, long, help = "Operation (encrypt/decrypt)")]
    action: Operation,

    /// Mode of operation.
    #[arg(short, long, default_value = "cbc", value_parser = parse_mode, help = "Mode (cbc/ecb/cfb/ofb/ctr)")]
    mode: Mode,

    /// Padding scheme for CBC and ECB.
    #[arg(short, long, default_value = "pkcs7", value_parser = parse_padding, help = "Padding (no/zero/pkcs5/pkcs7)")]
    padding: Padding,
}

/// Enum representing the operation to perform.
#[derive(Clone, Debug, ValueEnum)]
enum Operation {
    /// Encrypt the input file.
    Encrypt,
    /// Decrypt the input file.
    Decrypt,
}

fn parse_mode(s: &str) -> Result<Mode, CipherModeError> {
    s.parse()
}

fn parse_padding(s: &str) -> Result<Padding, CipherModeError> {
    s.parse()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let key = decode_secret(&cli.key, cli.hex)?;
    let iv = match &cli.iv {
        Some(iv) => decode_secret(iv, cli.hex)?,
        None => Default::default(),
    };

    let cipher = Aes128::new();
    let config = CipherConfig::builder()
        .mode(cli.mode)
        .padding(cli.padding)
        .key(&key)
        .iv(&iv)
        .build_for(&cipher)?;

    let input = fs::read(&cli.file)?;

    let result = match cli.action {
        Operation::Encrypt => config.encrypt(&input, &cipher)?,
        Operation::Decrypt => config.decrypt(&input, &cipher)?,
    };

    fs::write(&cli.output, &result)?;

    info!(
        mode = %cli.mode,
        padding = %cli.padding,
        input_len = input.len(),
        output_len = result.len(),
        "done"
    );
    println!("Operation completed successfully! Output saved to: {}", cli.output);

    Ok(())
}
