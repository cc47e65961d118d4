//! rsodata - parse OData `$select` / `$expand` query strings.
//!
//! Prints the parsed query as JSON on stdout. Exits with status 1 when the
//! query is invalid (the JSON then carries the `error` object).
//!
//! # Usage
//!
//! ```text
//! rsodata '?$select=name&$expand=primarycontactid($select=fullname)'
//! echo '?$expand=Foo,Bar' | rsodata
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |
//! | `ODATA_PRETTY` | `true` | Pretty-print the JSON output |
//! | `ODATA_MAX_EXPAND_DEPTH` | *(unset)* | Reject sub-queries nested deeper than this |

use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use rsodata_core::ODataConfig;
use rsodata_model::{ExpandMap, ODataQuery};
use rsodata_parser::{ParserOptions, QueryParams, parse_query_with};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
/// Logs go to stderr so stdout stays valid JSON.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

/// Take the query string from the first argument, or read it from stdin.
fn read_query() -> Result<String> {
    if let Some(arg) = std::env::args().nth(1) {
        return Ok(arg);
    }
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read query string from stdin")?;
    Ok(input.trim_end_matches(['\r', '\n']).to_owned())
}

fn render(query: &ODataQuery, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(query)
    } else {
        serde_json::to_string(query)
    };
    json.context("failed to serialize parsed query")
}

fn run() -> Result<ExitCode> {
    let config = ODataConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config.log_level)?;

    let raw = read_query()?;
    let params = QueryParams::parse(&raw);
    let query = parse_query_with(&params, &ParserOptions::from(&config));

    let output = render(&query, config.pretty)?;
    writeln!(io::stdout().lock(), "{output}").context("failed to write output")?;

    if let Some(error) = &query.error {
        warn!(code = %error.code, message = %error.message, "invalid query");
        return Ok(ExitCode::FAILURE);
    }
    info!(
        select = query.select.as_ref().map_or(0, Vec::len),
        expand = query.expand.as_ref().map_or(0, ExpandMap::len),
        "parsed query"
    );
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("rsodata: {e:#}");
            ExitCode::FAILURE
        }
    }
}
