//! aes command

use super::Context;
use anyhow::Result;
use clap::{Args, Subcommand};
use gn_cli::Status;
use gn_crypto::{Aes128, Padding};
use serde_json::json;

#[derive(Subcommand)]
pub enum AesAction {
    /// Encrypt UTF-8 text and print base64 ciphertext
    Encrypt(CipherArgs),
    /// Decrypt base64 ciphertext and print the plaintext
    Decrypt(CipherArgs),
}

#[derive(Args)]
pub struct CipherArgs {
    /// 16-byte key (UTF-8 text, or hex with --hex-key)
    #[arg(short, long)]
    key: String,

    /// 16-byte initialization vector (UTF-8 text, or hex with --hex-key)
    #[arg(long)]
    iv: String,

    /// Treat --key and --iv as hex
    #[arg(long)]
    hex_key: bool,

    /// Disable PKCS#7 padding; input must be block aligned
    #[arg(long)]
    no_padding: bool,

    /// Plaintext to encrypt or base64 ciphertext to decrypt
    input: String,
}

impl CipherArgs {
    fn cipher(&self) -> Result<Aes128> {
        let key = self.material("--key", &self.key)?;
        let iv = self.material("--iv", &self.iv)?;
        let padding = if self.no_padding { Padding::None } else { Padding::Pkcs7 };
        Ok(Aes128::new(&key, &iv)?.with_padding(padding))
    }

    fn material(&self, flag: &str, value: &str) -> Result<Vec<u8>> {
        if !self.hex_key {
            return Ok(value.as_bytes().to_vec());
        }
        hex::decode(value).map_err(|e| {
            gn_core::Error::validation(format!("{flag} is not valid hex: {e}"))
                .with_suggestion("Pass 32 hex digits, or drop --hex-key to use the text as-is")
                .into()
        })
    }
}

pub fn run(ctx: &Context, action: AesAction) -> Result<()> {
    match action {
        AesAction::Encrypt(args) => {
            let sealed = args.cipher()?.encrypt_to_base64(args.input.as_bytes())?;
            ctx.emit(&json!({ "ciphertext": sealed }), &sealed)
        }
        AesAction::Decrypt(args) => {
            let plain = args.cipher()?.decrypt_base64(&args.input)?;
            let (text, encoding) = match String::from_utf8(plain) {
                Ok(text) => (text, "utf8"),
                Err(e) => {
                    if !ctx.quiet && !ctx.json {
                        Status::warning("Plaintext is not UTF-8, printing hex");
                    }
                    (hex::encode(e.into_bytes()), "hex")
                }
            };
            ctx.emit(&json!({ "plaintext": text, "encoding": encoding }), &text)
        }
    }
}
