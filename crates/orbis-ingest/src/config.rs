//! Store and source configuration loaded from environment variables.

use orbis_core::{ClickHouseStoreConfig, DEFAULT_TABLE};

use crate::source::DEFAULT_SOURCE_URL;

/// Settings needed to run a sync: where the dataset lives and where it goes.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// ClickHouse connection and table.
    pub clickhouse: ClickHouseStoreConfig,

    /// Dataset endpoint URL.
    pub source_url: String,
}

impl IngestConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CLICKHOUSE_URL`: ClickHouse URL (default: "http://localhost:8123")
    /// - `CLICKHOUSE_DATABASE`: Database name (default: "default")
    /// - `CLICKHOUSE_USER` / `CLICKHOUSE_PASSWORD`: Credentials (default: none)
    /// - `ORBIS_TABLE`: Table name (default: "countries")
    /// - `ORBIS_SOURCE_URL`: Dataset endpoint (default: REST Countries v3.1)
    pub fn from_env() -> anyhow::Result<Self> {
        let url =
            std::env::var("CLICKHOUSE_URL").unwrap_or_else(|_| "http://localhost:8123".to_string());

        let database =
            std::env::var("CLICKHOUSE_DATABASE").unwrap_or_else(|_| "default".to_string());

        let user = non_empty_var("CLICKHOUSE_USER");
        let password = non_empty_var("CLICKHOUSE_PASSWORD");

        let table = std::env::var("ORBIS_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string());
        if table.is_empty() || !table.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            anyhow::bail!("ORBIS_TABLE must be a plain identifier, got {table:?}");
        }

        let source_url =
            std::env::var("ORBIS_SOURCE_URL").unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string());

        tracing::info!(
            clickhouse_url = %url,
            database = %database,
            table = %table,
            source_url = %source_url,
            "ingest configuration loaded"
        );

        Ok(Self {
            clickhouse: ClickHouseStoreConfig {
                url,
                database,
                user,
                password,
                table,
            },
            source_url,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "CLICKHOUSE_URL",
        "CLICKHOUSE_DATABASE",
        "CLICKHOUSE_USER",
        "CLICKHOUSE_PASSWORD",
        "ORBIS_TABLE",
        "ORBIS_SOURCE_URL",
    ];

    /// Helper to run config tests with isolated env vars.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = IngestConfig::from_env().unwrap();
            assert_eq!(config.clickhouse.url, "http://localhost:8123");
            assert_eq!(config.clickhouse.database, "default");
            assert_eq!(config.clickhouse.table, "countries");
            assert!(config.clickhouse.user.is_none());
            assert!(config.clickhouse.password.is_none());
            assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("CLICKHOUSE_URL", "http://ch:8123"),
                ("CLICKHOUSE_DATABASE", "geo"),
                ("CLICKHOUSE_USER", "myuser"),
                ("CLICKHOUSE_PASSWORD", "mypassword"),
                ("ORBIS_TABLE", "countries_v2"),
                ("ORBIS_SOURCE_URL", "http://mirror.local/all"),
            ],
            || {
                let config = IngestConfig::from_env().unwrap();
                assert_eq!(config.clickhouse.url, "http://ch:8123");
                assert_eq!(config.clickhouse.database, "geo");
                assert_eq!(config.clickhouse.user.as_deref(), Some("myuser"));
                assert_eq!(config.clickhouse.password.as_deref(), Some("mypassword"));
                assert_eq!(config.clickhouse.table, "countries_v2");
                assert_eq!(config.source_url, "http://mirror.local/all");
            },
        );
    }

    #[test]
    fn config_empty_credentials_ignored() {
        with_env_vars(&[("CLICKHOUSE_USER", ""), ("CLICKHOUSE_PASSWORD", "")], || {
            let config = IngestConfig::from_env().unwrap();
            assert!(config.clickhouse.user.is_none());
            assert!(config.clickhouse.password.is_none());
        });
    }

    #[test]
    fn config_rejects_unsafe_table_name() {
        with_env_vars(&[("ORBIS_TABLE", "countries; DROP TABLE x")], || {
            assert!(IngestConfig::from_env().is_err());
        });
    }
}
