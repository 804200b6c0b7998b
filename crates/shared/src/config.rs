//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Reporting period defaults.
    #[serde(default)]
    pub period: PeriodConfig,
    /// VAT configuration.
    #[serde(default)]
    pub vat: VatConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_database_url() -> String {
    "sqlite://data/compta.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    1
}

fn default_min_connections() -> u32 {
    1
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
        }
    }
}

/// Period used when no period has been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PeriodConfig {
    /// Month name, as shown to the user.
    #[serde(default = "default_month")]
    pub default_month: String,
    /// Four-digit year.
    #[serde(default = "default_year")]
    pub default_year: String,
}

fn default_month() -> String {
    "Janvier".to_string()
}

fn default_year() -> String {
    "2023".to_string()
}

impl Default for PeriodConfig {
    fn default() -> Self {
        Self {
            default_month: default_month(),
            default_year: default_year(),
        }
    }
}

/// VAT configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct VatConfig {
    /// Rates offered to the user, in `X.XX%` form. The first one is preselected.
    #[serde(default = "default_vat_rates")]
    pub rates: Vec<String>,
}

fn default_vat_rates() -> Vec<String> {
    ["5.50%", "10.00%", "20.00%", "0.00%"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

impl Default for VatConfig {
    fn default() -> Self {
        Self {
            rates: default_vat_rates(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "compta=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `COMPTA__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("COMPTA")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("vat.rates"),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let config = AppConfig::default();
        assert_eq!(config.period.default_month, "Janvier");
        assert_eq!(config.period.default_year, "2023");
        assert_eq!(
            config.vat.rates,
            vec!["5.50%", "10.00%", "20.00%", "0.00%"]
        );
        assert_eq!(config.database.max_connections, 1);
        assert_eq!(config.logging.filter, "compta=info");
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars_unset(
            [
                "COMPTA__PERIOD__DEFAULT_MONTH",
                "COMPTA__PERIOD__DEFAULT_YEAR",
                "COMPTA__DATABASE__URL",
                "COMPTA__VAT__RATES",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.period, PeriodConfig::default());
                assert_eq!(config.database.url, "sqlite://data/compta.db?mode=rwc");
            },
        );
    }

    #[test]
    fn test_load_reads_environment_overrides() {
        temp_env::with_vars(
            [
                ("COMPTA__PERIOD__DEFAULT_MONTH", Some("Mars")),
                ("COMPTA__PERIOD__DEFAULT_YEAR", Some("2024")),
                ("COMPTA__DATABASE__URL", Some("sqlite::memory:")),
                ("COMPTA__VAT__RATES", Some("20.00%,0.00%")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.period.default_month, "Mars");
                assert_eq!(config.period.default_year, "2024");
                assert_eq!(config.database.url, "sqlite::memory:");
                assert_eq!(config.vat.rates, vec!["20.00%", "0.00%"]);
            },
        );
    }
}
