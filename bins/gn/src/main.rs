//! gn - command-line front end for the GNFoundation toolkit
//!
//! Digests, AES-128 sealing, colour conversion, string helpers, query
//! strings, JSON files and the persistent defaults store.

use clap::{ArgAction, Parser, Subcommand};
use gn_cli::Status;
use gn_color::ColorError;
use gn_core::config::Config;
use gn_core::error::{exit_codes, ErrorReport};
use gn_crypto::CryptoError;
use gn_telemetry::{LogFormat, TelemetryConfig};
use gn_text::TextError;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::{aes, color, defaults, json, md5, query, text, Context};

/// Command-line front end for the GNFoundation toolkit
#[derive(Parser)]
#[command(name = "gn")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to gn-foundation.toml lookup)
    #[arg(short, long, global = true, env = "GN_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only print results and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// MD5 digest of text, a file or stdin
    Md5 {
        /// Text to digest (reads stdin when neither text nor --file is given)
        text: Option<String>,

        /// Digest a file instead
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Compare against an expected hex digest instead of printing it
        #[arg(long)]
        verify: Option<String>,
    },

    /// AES-128-CBC encryption with base64 ciphertext
    Aes {
        #[command(subcommand)]
        action: aes::AesAction,
    },

    /// Parse, convert and mix colours
    Color {
        #[command(subcommand)]
        action: color::ColorAction,
    },

    /// String helpers
    Text {
        #[command(subcommand)]
        action: text::TextAction,
    },

    /// Percent-encode a JSON object as a query string
    Query {
        /// JSON object, e.g. '{"page":2,"q":"a b"}'
        params: String,
    },

    /// Pretty-print a JSON object file
    Json {
        /// File to read
        path: PathBuf,
    },

    /// Persistent key/value defaults
    Defaults {
        /// Suite to use instead of the configured one
        #[arg(long, global = true)]
        suite: Option<String>,

        #[command(subcommand)]
        action: defaults::DefaultsAction,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        gn_cli::set_color(false);
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            Status::error(&e.to_string());
            return exit_code(e.exit_code());
        }
    };

    let telemetry = TelemetryConfig::from(&config.schema.logging)
        .with_verbosity(cli.verbose, cli.quiet)
        .with_format(if cli.json { LogFormat::Json } else { LogFormat::Compact });
    if let Err(e) = gn_telemetry::init_with_config(telemetry) {
        Status::warning(&format!("Logging disabled: {e:#}"));
    }

    let ctx = Context::new(config, cli.json, cli.quiet);

    let result = match cli.command {
        Commands::Md5 { text, file, verify } => {
            md5::run(&ctx, text.as_deref(), file.as_deref(), verify.as_deref())
        }
        Commands::Aes { action } => aes::run(&ctx, action),
        Commands::Color { action } => color::run(&ctx, action),
        Commands::Text { action } => text::run(&ctx, action),
        Commands::Query { params } => query::run(&ctx, &params),
        Commands::Json { path } => json::run(&ctx, &path),
        Commands::Defaults { suite, action } => defaults::run(&ctx, suite, action),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => exit_code(report(&ctx, &e)),
    }
}

/// Print `err` and pick the process exit code for it.
///
/// With `--json` every coded error is written to stderr as one
/// [`ErrorReport`] line.
fn report(ctx: &Context, err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<gn_core::Error>() {
        emit_error(ctx, ErrorReport::from(e), &e.to_string());
        return e.exit_code();
    }

    if let Some(e) = err.downcast_ref::<CryptoError>() {
        let message = e.localized_description(ctx.language());
        emit_error(ctx, ErrorReport::new(e.code() as u32, "Crypto", &message), &message);
        return exit_codes::CRYPTO_ERROR;
    }

    let text = format!("{err:#}");
    if let Some(e) = err.downcast_ref::<ColorError>() {
        emit_error(ctx, ErrorReport::new(e.code() as u32, "Color", e.to_string()), &text);
        return exit_codes::VALIDATION_ERROR;
    }
    if let Some(e) = err.downcast_ref::<TextError>() {
        emit_error(ctx, ErrorReport::new(e.code() as u32, "Text", e.to_string()), &text);
        return exit_codes::VALIDATION_ERROR;
    }

    emit_error(ctx, ErrorReport::new(0, "General", &text), &text);
    exit_codes::FAILURE
}

fn emit_error(ctx: &Context, report: ErrorReport, text: &str) {
    if ctx.json {
        match serde_json::to_string(&report) {
            Ok(line) => eprintln!("{line}"),
            Err(_) => Status::error(text),
        }
    } else {
        Status::error(text);
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
