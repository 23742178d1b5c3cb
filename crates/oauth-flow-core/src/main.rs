//! OAuth Flow Validator - Entry Point
//!
//! Command-line harness around the validators: checks request payloads,
//! generates and verifies PKCE pairs, and prints discovery metadata.
//! Results go to stdout as JSON, logs go to stderr.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use oauth_flow_core::{
    OAuthValidator, ValidationResult, ValidatorConfig,
    metadata::{AuthorizationServerMetadata, ProtectedResourceMetadata},
    models::{RawRequestFields, raw_fields_from_json, raw_fields_from_query},
    pkce, validators,
};

#[derive(Parser, Debug)]
#[command(name = "oauth-flow-core")]
#[command(about = "Validate OAuth 2.1 requests and PKCE proofs")]
#[command(version)]
struct Cli {
    /// JSON validator configuration file (defaults come from OAUTH_* variables)
    #[arg(long, global = true, env = "OAUTH_VALIDATOR_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate authorization endpoint parameters
    Authorize {
        /// JSON object or urlencoded parameters; `-` or omitted reads stdin
        input: Option<String>,
    },
    /// Validate token endpoint parameters
    Token {
        /// JSON object or urlencoded parameters; `-` or omitted reads stdin
        input: Option<String>,
    },
    /// Validate a dynamic client registration body
    Register {
        /// JSON object; `-` or omitted reads stdin
        input: Option<String>,
    },
    /// Normalize a requested scope string
    Scope {
        /// Space separated scopes
        scope: Option<String>,
    },
    /// Generate a PKCE code verifier and its S256 challenge
    PkceGenerate,
    /// Verify a code verifier against a code challenge
    PkceVerify {
        #[arg(long)]
        verifier: String,

        #[arg(long)]
        challenge: String,

        #[arg(long, default_value = pkce::S256_METHOD)]
        method: String,
    },
    /// Print discovery metadata documents
    Metadata {
        /// Authorization server issuer URL
        #[arg(long, env = "BASE_URL")]
        issuer: String,

        /// Protected resource URL (defaults to the issuer)
        #[arg(long)]
        resource: Option<String>,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ValidatorConfig> {
    match path {
        Some(path) => ValidatorConfig::from_json_file(path),
        None => ValidatorConfig::from_env(),
    }
}

/// Read request fields from an argument or stdin.
///
/// Input starting with `{` is parsed as JSON, anything else as urlencoded.
fn read_fields(input: Option<String>) -> anyhow::Result<RawRequestFields> {
    let raw = match input {
        Some(input) if input != "-" => input,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
            buf
        }
    };

    let raw = raw.trim();
    if raw.starts_with('{') {
        let value: serde_json::Value =
            serde_json::from_str(raw).context("input is not valid JSON")?;
        Ok(raw_fields_from_json(&value))
    } else {
        Ok(raw_fields_from_query(raw))
    }
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn emit_report<T: Serialize>(result: &ValidationResult<T>) -> anyhow::Result<ExitCode> {
    print_json(&validators::report(result))?;
    Ok(if result.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let validator = OAuthValidator::new(load_config(cli.config.as_ref())?);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Starting OAuth flow validator");

    match cli.command {
        Command::Authorize { input } => {
            emit_report(&validator.authorization_request(&read_fields(input)?))
        }
        Command::Token { input } => emit_report(&validator.token_request(&read_fields(input)?)),
        Command::Register { input } => {
            emit_report(&validator.client_registration_request(&read_fields(input)?))
        }
        Command::Scope { scope } => {
            print_json(&json!({ "scope": validator.scope(scope.as_deref()) }))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::PkceGenerate => {
            let code_verifier = pkce::generate_code_verifier();
            let code_challenge = pkce::generate_code_challenge(&code_verifier);
            print_json(&json!({
                "code_verifier": code_verifier,
                "code_challenge": code_challenge,
                "code_challenge_method": pkce::S256_METHOD,
            }))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::PkceVerify { verifier, challenge, method } => {
            let valid = pkce::validate_pkce(&verifier, &challenge, &method);
            print_json(&json!({ "valid": valid }))?;
            Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::Metadata { issuer, resource } => {
            let resource = resource.unwrap_or_else(|| issuer.clone());
            print_json(&json!({
                "oauth-authorization-server":
                    AuthorizationServerMetadata::new(&issuer, validator.config()),
                "oauth-protected-resource":
                    ProtectedResourceMetadata::new(&resource, &issuer, validator.config()),
            }))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
