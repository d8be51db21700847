//! ClickHouse-backed country store.
//!
//! Talks to ClickHouse over its HTTP interface using the `clickhouse` crate.
//! The table uses a plain `MergeTree` ordered by `name`; there is no unique
//! constraint, so duplicates are only prevented by callers checking
//! [`CountryStore::exists`] first.

use async_trait::async_trait;
use clickhouse::{Client, Row};
use serde::Deserialize;

use super::CountryStore;
use crate::model::{Country, PopulationStats};
use crate::{DEFAULT_TABLE, Error, Result};

/// Connection settings for [`ClickHouseStore`].
#[derive(Debug, Clone)]
pub struct ClickHouseStoreConfig {
    /// ClickHouse server URL (e.g., "http://localhost:8123")
    pub url: String,

    /// Database name
    pub database: String,

    /// Optional credentials
    pub user: Option<String>,
    pub password: Option<String>,

    /// Table name for country records
    pub table: String,
}

impl Default for ClickHouseStoreConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8123".to_string(),
            database: "default".to_string(),
            user: None,
            password: None,
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

/// Sum and mean of the population column.
#[derive(Debug, Row, Deserialize)]
struct PopulationTotals {
    total: u64,
    average: f64,
}

#[derive(Debug, Row, Deserialize)]
struct NameRow {
    name: String,
}

/// Country store over a shared ClickHouse client.
///
/// The client is cheap to clone and pools its HTTP connections, so one
/// instance is created at startup and shared by every request.
pub struct ClickHouseStore {
    client: Client,
    config: ClickHouseStoreConfig,
}

impl ClickHouseStore {
    /// Create a store for the given connection settings.
    ///
    /// No network traffic happens until [`CountryStore::initialize`].
    pub fn new(config: ClickHouseStoreConfig) -> Self {
        let mut client = Client::default()
            .with_url(&config.url)
            .with_database(&config.database);
        if let Some(user) = &config.user {
            client = client.with_user(user);
        }
        if let Some(password) = &config.password {
            client = client.with_password(password);
        }

        tracing::info!(
            url = %config.url,
            database = %config.database,
            table = %config.table,
            "ClickHouse store configured"
        );

        Self { client, config }
    }

    pub fn table(&self) -> &str {
        &self.config.table
    }

    fn create_table_sql(&self) -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                name String,
                capital Array(String),
                population UInt64,
                region String,
                flag_url String
            ) ENGINE = MergeTree ORDER BY name",
            self.config.table
        )
    }

    // Both sides of the comparison go through the same ClickHouse functions,
    // so the key a row is stored under and the key it is looked up by agree.
    fn exists_sql(&self) -> String {
        format!(
            "SELECT count() FROM {} WHERE lowerUTF8(trimBoth(name)) = lowerUTF8(trimBoth(?))",
            self.config.table
        )
    }

    fn select_by_name_sql(&self) -> String {
        format!(
            "SELECT name, capital, population, region, flag_url FROM {} \
             WHERE lowerUTF8(trimBoth(name)) = lowerUTF8(trimBoth(?)) \
             LIMIT 1",
            self.config.table
        )
    }

    fn select_all_sql(&self) -> String {
        format!(
            "SELECT name, capital, population, region, flag_url FROM {} ORDER BY name",
            self.config.table
        )
    }

    fn totals_sql(&self) -> String {
        format!(
            "SELECT sum(population) AS total, avg(population) AS average FROM {}",
            self.config.table
        )
    }

    fn most_populated_sql(&self) -> String {
        format!(
            "SELECT name FROM {} ORDER BY population DESC LIMIT 1",
            self.config.table
        )
    }
}

#[async_trait]
impl CountryStore for ClickHouseStore {
    fn name(&self) -> &'static str {
        "clickhouse"
    }

    async fn initialize(&self) -> Result<()> {
        let ping: u8 = self
            .client
            .query("SELECT 1")
            .fetch_one()
            .await
            .map_err(|e| Error::Connection(format!("{}: {}", self.config.url, e)))?;
        if ping != 1 {
            return Err(Error::Connection(format!(
                "{}: unexpected ping response {}",
                self.config.url, ping
            )));
        }

        self.client.query(&self.create_table_sql()).execute().await?;

        tracing::info!(table = %self.config.table, "ClickHouse schema ready");
        Ok(())
    }

    async fn exists(&self, name: &str) -> Result<bool> {
        let count: u64 = self
            .client
            .query(&self.exists_sql())
            .bind(name)
            .fetch_one()
            .await?;
        Ok(count > 0)
    }

    async fn insert(&self, country: &Country) -> Result<()> {
        let mut insert = self.client.insert::<Country>(&self.config.table)?;
        insert.write(country).await?;
        insert.end().await?;
        Ok(())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Country>> {
        let country = self
            .client
            .query(&self.select_by_name_sql())
            .bind(name)
            .fetch_optional::<Country>()
            .await?;
        Ok(country)
    }

    async fn list_all(&self) -> Result<Vec<Country>> {
        let countries = self
            .client
            .query(&self.select_all_sql())
            .fetch_all::<Country>()
            .await?;
        Ok(countries)
    }

    async fn aggregate_stats(&self) -> Result<Option<PopulationStats>> {
        let totals: PopulationTotals = self
            .client
            .query(&self.totals_sql())
            .fetch_one()
            .await?;

        // avg() over zero rows is NaN; the name query tells us whether rows exist.
        let most_populated: Option<NameRow> = self
            .client
            .query(&self.most_populated_sql())
            .fetch_optional()
            .await?;

        Ok(most_populated.map(|row| PopulationStats {
            total_population: totals.total,
            average_population: totals.average,
            most_populated: row.name,
        }))
    }

    async fn count(&self) -> Result<u64> {
        let query = format!("SELECT count() FROM {}", self.config.table);
        let count: u64 = self.client.query(&query).fetch_one().await?;
        Ok(count)
    }
}
