//! Configuration loading from TOML files.

use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub bankroll: BankrollConfig,
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database path, or `:memory:` for an ephemeral store.
    pub path: String,
}

/// Flat-stake accounting used by the bankroll ROI convention.
///
/// These back the published track record, so they are configuration, not
/// code: changing them rescales `bankroll_roi` but never touches the
/// unit-denominated ledger.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BankrollConfig {
    /// Dollar value of one unit under flat staking.
    pub flat_stake_dollars: Decimal,
    /// Nominal starting bankroll the dashboard measures against.
    pub starting_bankroll_dollars: Decimal,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Stats cache time-to-live in seconds.
    pub stats_ttl_secs: u64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.database.path.is_empty() {
            return Err(ConfigError::MissingField {
                field: "database.path",
            }
            .into());
        }
        if self.bankroll.flat_stake_dollars <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "bankroll.flat_stake_dollars",
                reason: "must be positive".into(),
            }
            .into());
        }
        if self.bankroll.starting_bankroll_dollars <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "bankroll.starting_bankroll_dollars",
                reason: "must be positive".into(),
            }
            .into());
        }
        if self.cache.stats_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.stats_ttl_secs",
                reason: "must be non-zero".into(),
            }
            .into());
        }
        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            bankroll: BankrollConfig::default(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "betledger.db".into(),
        }
    }
}

impl Default for BankrollConfig {
    fn default() -> Self {
        Self {
            flat_stake_dollars: dec!(10),
            starting_bankroll_dollars: dec!(500),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stats_ttl_secs: 300,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bankroll.flat_stake_dollars, dec!(10));
        assert_eq!(config.bankroll.starting_bankroll_dollars, dec!(500));
        assert_eq!(config.cache.stats_ttl_secs, 300);
    }

    #[test]
    fn parse_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [database]
            path = ":memory:"

            [bankroll]
            flat_stake_dollars = "25"
            "#,
        )
        .unwrap();

        assert_eq!(config.database.path, ":memory:");
        assert_eq!(config.bankroll.flat_stake_dollars, dec!(25));
        assert_eq!(config.bankroll.starting_bankroll_dollars, dec!(500));
    }

    #[test]
    fn zero_ttl_rejected() {
        let config: Config = toml::from_str("[cache]\nstats_ttl_secs = 0\n").unwrap();
        assert!(config.validate().is_err());
    }
}
