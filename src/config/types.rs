//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::{debug, warn};

use crate::check::ListingMode;
use crate::config::constants::{
    DEFAULT_QUERY_TIMEOUT_SECS, DEFAULT_RETRIES, DEFAULT_WORKERS, MAX_WORKERS,
};
use crate::config::servers::DEFAULT_SERVERS;
use crate::error_handling::ConfigError;
use crate::threshold::Thresholds;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// All options except `host` have defaults; `Config::default()` can be used
/// to build one programmatically.
///
/// # Examples
///
/// ```bash
/// # Check against the built-in blacklists
/// check_rbl -H mail.example.org
///
/// # Two specific lists, warn on one listing, critical on two
/// check_rbl -H 192.0.2.1 -s zen.spamhaus.org -s bl.spamcop.net -w 0 -c 1
///
/// # Whitelist mode
/// check_rbl -H mail.example.org --whitelist -s list.dnswl.org
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "check_rbl",
    version,
    about = "Checks whether a host is listed on DNS-based blacklists (or missing from whitelists)."
)]
pub struct Config {
    /// Host name or IPv4 address to check
    #[arg(short = 'H', long)]
    pub host: String,

    /// List server domain (repeatable, comma-separated values allowed)
    #[arg(short = 's', long = "server", value_delimiter = ',')]
    pub servers: Vec<String>,

    /// File with one list server domain per line ('#' starts a comment)
    #[arg(long)]
    pub servers_file: Option<PathBuf>,

    /// Treat the servers as whitelists: flag the host when it is NOT listed
    #[arg(long)]
    pub whitelist: bool,

    /// Warning when the host is listed on more than this many servers
    #[arg(short = 'w', long, default_value_t = 0)]
    pub warning: usize,

    /// Critical when the host is listed on more than this many servers
    #[arg(short = 'c', long, default_value_t = 0)]
    pub critical: usize,

    /// Per-query timeout in seconds
    #[arg(long, default_value_t = DEFAULT_QUERY_TIMEOUT_SECS)]
    pub query_timeout: u64,

    /// Number of retries for timed-out or failed queries
    #[arg(long, default_value_t = DEFAULT_RETRIES)]
    pub retry: usize,

    /// Maximum number of queries in flight at once
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Print the result as JSON instead of a plugin status line
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print debugging diagnostics
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: String::new(),
            servers: Vec::new(),
            servers_file: None,
            whitelist: false,
            warning: 0,
            critical: 0,
            query_timeout: DEFAULT_QUERY_TIMEOUT_SECS,
            retry: DEFAULT_RETRIES,
            workers: DEFAULT_WORKERS,
            json: false,
            verbose: 0,
            debug: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks option combinations that clap cannot express.
    ///
    /// Called before any network activity; every error here ends the run as
    /// UNKNOWN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        Thresholds::new(self.warning, self.critical)?;
        if self.workers == 0 || self.workers > MAX_WORKERS {
            return Err(ConfigError::Workers {
                got: self.workers,
                max: MAX_WORKERS,
            });
        }
        if self.query_timeout == 0 {
            return Err(ConfigError::ZeroQueryTimeout);
        }
        Ok(())
    }

    /// Log level after applying `--debug` and `-v` on top of `--log-level`.
    pub fn effective_log_level(&self) -> log::LevelFilter {
        let requested = match (self.debug, self.verbose) {
            (true, _) => LogLevel::Debug,
            (false, 0) => self.log_level,
            (false, 1) => LogLevel::Info,
            (false, 2) => LogLevel::Debug,
            (false, _) => LogLevel::Trace,
        };
        log::LevelFilter::from(requested.max(self.log_level))
    }

    /// Blacklist or whitelist semantics for this run.
    pub fn listing_mode(&self) -> ListingMode {
        if self.whitelist {
            ListingMode::Whitelist
        } else {
            ListingMode::Blacklist
        }
    }

    /// Resolves the list servers to query.
    ///
    /// Servers given with `--server` and `--servers-file` replace the built-in
    /// set entirely. Names are trimmed, a trailing root dot is dropped and
    /// duplicates are removed keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ServersFile` if the file cannot be read and
    /// `ConfigError::NoServers` if the user supplied servers but none survive
    /// normalization.
    pub fn list_servers(&self) -> Result<Vec<String>, ConfigError> {
        let mut supplied: Vec<String> = self.servers.clone();
        if let Some(path) = &self.servers_file {
            let contents =
                std::fs::read_to_string(path).map_err(|source| ConfigError::ServersFile {
                    path: path.clone(),
                    source,
                })?;
            supplied.extend(
                contents
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.starts_with('#'))
                    .map(str::to_string),
            );
        }

        let user_supplied = !self.servers.is_empty() || self.servers_file.is_some();
        if !user_supplied {
            debug!("Using {} built-in list servers", DEFAULT_SERVERS.len());
            return Ok(DEFAULT_SERVERS.iter().map(|s| s.to_string()).collect());
        }

        let mut seen = HashSet::new();
        let mut servers = Vec::with_capacity(supplied.len());
        for raw in supplied {
            let name = raw.trim().trim_end_matches('.');
            if name.is_empty() {
                continue;
            }
            if seen.insert(name.to_ascii_lowercase()) {
                servers.push(name.to_string());
            } else {
                warn!("Ignoring duplicate list server {name}");
            }
        }

        if servers.is_empty() {
            return Err(ConfigError::NoServers);
        }
        Ok(servers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_for(host: &str) -> Config {
        Config {
            host: host.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Trace);
    }

    #[test]
    fn test_effective_log_level() {
        let mut config = config_for("example.org");
        assert_eq!(config.effective_log_level(), log::LevelFilter::Warn);

        config.verbose = 1;
        assert_eq!(config.effective_log_level(), log::LevelFilter::Info);

        config.verbose = 3;
        assert_eq!(config.effective_log_level(), log::LevelFilter::Trace);

        config.verbose = 0;
        config.debug = true;
        assert_eq!(config.effective_log_level(), log::LevelFilter::Debug);

        // An explicit --log-level is never lowered by -v
        config.debug = false;
        config.verbose = 1;
        config.log_level = LogLevel::Trace;
        assert_eq!(config.effective_log_level(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_validate_rejects_critical_below_warning() {
        let config = Config {
            warning: 2,
            critical: 1,
            ..config_for("example.org")
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdOrder {
                warning: 2,
                critical: 1
            })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_workers_and_timeout() {
        let config = Config {
            workers: 0,
            ..config_for("example.org")
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Workers { got: 0, .. })
        ));

        let config = Config {
            workers: MAX_WORKERS + 1,
            ..config_for("example.org")
        };
        assert!(config.validate().is_err());

        let config = Config {
            query_timeout: 0,
            ..config_for("example.org")
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroQueryTimeout)
        ));
    }

    #[test]
    fn test_validate_rejects_blank_host() {
        assert!(matches!(
            config_for("   ").validate(),
            Err(ConfigError::EmptyHost)
        ));
        assert!(config_for("example.org").validate().is_ok());
    }

    #[test]
    fn test_listing_mode() {
        let mut config = config_for("example.org");
        assert_eq!(config.listing_mode(), ListingMode::Blacklist);
        config.whitelist = true;
        assert_eq!(config.listing_mode(), ListingMode::Whitelist);
    }

    #[test]
    fn test_list_servers_defaults_when_none_supplied() {
        let servers = config_for("example.org").list_servers().unwrap();
        assert_eq!(servers.len(), DEFAULT_SERVERS.len());
        assert_eq!(servers[0], DEFAULT_SERVERS[0]);
    }

    #[test]
    fn test_list_servers_user_supplied_replaces_defaults() {
        let config = Config {
            servers: vec![
                "bl.example.net.".to_string(),
                " dnsbl.example.com ".to_string(),
                "BL.example.net".to_string(),
            ],
            ..config_for("example.org")
        };
        let servers = config.list_servers().unwrap();
        assert_eq!(servers, vec!["bl.example.net", "dnsbl.example.com"]);
    }

    #[test]
    fn test_list_servers_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# local lists").unwrap();
        writeln!(file, "bl.one.example").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "bl.two.example").unwrap();

        let config = Config {
            servers: vec!["bl.zero.example".to_string()],
            servers_file: Some(file.path().to_path_buf()),
            ..config_for("example.org")
        };
        let servers = config.list_servers().unwrap();
        assert_eq!(
            servers,
            vec!["bl.zero.example", "bl.one.example", "bl.two.example"]
        );
    }

    #[test]
    fn test_list_servers_empty_file_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config {
            servers_file: Some(file.path().to_path_buf()),
            ..config_for("example.org")
        };
        assert!(matches!(config.list_servers(), Err(ConfigError::NoServers)));
    }

    #[test]
    fn test_list_servers_missing_file() {
        let config = Config {
            servers_file: Some(PathBuf::from("/nonexistent/rbl/servers.txt")),
            ..config_for("example.org")
        };
        assert!(matches!(
            config.list_servers(),
            Err(ConfigError::ServersFile { .. })
        ));
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.query_timeout, DEFAULT_QUERY_TIMEOUT_SECS);
        assert_eq!(config.workers, DEFAULT_WORKERS);
        assert_eq!(config.retry, 0);
        assert_eq!(config.warning, 0);
        assert_eq!(config.critical, 0);
        assert!(!config.whitelist);
        assert!(config.servers.is_empty());
    }
}
