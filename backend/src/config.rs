//! Command line and environment configuration.

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use shared::VersionInfo;

use crate::storage::connection::DEFAULT_DATABASE_URL;

#[derive(Parser, Debug)]
#[command(name = "household-ledger", about = "Household finance ledger server.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API server.
    Serve(ServeArgs),
    /// Print version, revision and build information.
    Version,
}

#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "LEDGER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "LEDGER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite database URL (created if missing)
    #[arg(long, env = "LEDGER_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Per-request deadline in seconds
    #[arg(long, env = "LEDGER_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Log output format
    #[arg(long, env = "LEDGER_LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Origin allowed to call the API from a browser
    #[arg(long, env = "LEDGER_CORS_ORIGIN", default_value = "http://localhost:3000")]
    pub cors_origin: String,
}

impl ServeArgs {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

/// Version of this build; revision and build id are captured at compile time.
pub fn version_info() -> VersionInfo {
    VersionInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        revision: option_env!("LEDGER_REVISION").unwrap_or("unknown").to_string(),
        build: option_env!("LEDGER_BUILD").unwrap_or("unknown").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_serve(args: &[&str]) -> ServeArgs {
        let cli = Cli::try_parse_from(args).expect("arguments should parse");
        match cli.command {
            Command::Serve(args) => args,
            other => panic!("expected serve, got {:?}", other),
        }
    }

    #[test]
    fn test_serve_flags() {
        let args = parse_serve(&[
            "household-ledger",
            "serve",
            "--port",
            "9090",
            "--database-url",
            "sqlite:/tmp/test.db",
            "--request-timeout-secs",
            "3",
            "--log-format",
            "json",
        ]);

        assert_eq!(args.port, 9090);
        assert_eq!(args.database_url, "sqlite:/tmp/test.db");
        assert_eq!(args.request_timeout(), Duration::from_secs(3));
        assert_eq!(args.log_format, LogFormat::Json);
    }

    #[test]
    fn test_version_subcommand() {
        let cli = Cli::try_parse_from(["household-ledger", "version"]).unwrap();
        assert!(matches!(cli.command, Command::Version));

        let info = version_info();
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Cli::try_parse_from(["household-ledger", "serve", "--port", "http"]).is_err());
        assert!(Cli::try_parse_from(["household-ledger", "serve", "--log-format", "xml"]).is_err());
        assert!(Cli::try_parse_from(["household-ledger"]).is_err());
    }
}
