//! In-memory country store.

use async_trait::async_trait;
use parking_lot::RwLock;

use super::CountryStore;
use crate::model::{Country, PopulationStats, normalize_name};
use crate::Result;

/// Country store backed by a vector in process memory.
///
/// Mirrors the ClickHouse store's observable behavior: rows are appended
/// without a uniqueness check, lookups ignore case, and listings are sorted
/// by name at read time.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<Country>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with rows, bypassing the existence check.
    pub fn with_rows(rows: impl IntoIterator<Item = Country>) -> Self {
        Self {
            rows: RwLock::new(rows.into_iter().collect()),
        }
    }

    /// Snapshot of the rows in insertion order.
    pub fn rows(&self) -> Vec<Country> {
        self.rows.read().clone()
    }
}

#[async_trait]
impl CountryStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn exists(&self, name: &str) -> Result<bool> {
        let key = normalize_name(name);
        Ok(self.rows.read().iter().any(|c| c.key() == key))
    }

    async fn insert(&self, country: &Country) -> Result<()> {
        self.rows.write().push(country.clone());
        Ok(())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Country>> {
        let key = normalize_name(name);
        Ok(self.rows.read().iter().find(|c| c.key() == key).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Country>> {
        let mut rows = self.rows();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn aggregate_stats(&self) -> Result<Option<PopulationStats>> {
        let rows = self.rows.read();
        let Some(top) = rows.iter().max_by_key(|c| c.population) else {
            return Ok(None);
        };

        let total_population: u64 = rows.iter().map(|c| c.population).sum();
        let average_population = total_population as f64 / rows.len() as f64;

        Ok(Some(PopulationStats {
            total_population,
            average_population,
            most_populated: top.name.clone(),
        }))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.rows.read().len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, population: u64) -> Country {
        Country {
            name: name.to_string(),
            capital: vec![],
            population,
            region: String::new(),
            flag_url: String::new(),
        }
    }

    #[tokio::test]
    async fn test_exists_ignores_case() {
        let store = MemoryStore::new();
        store.insert(&country("France", 1)).await.unwrap();

        assert!(store.exists("france").await.unwrap());
        assert!(store.exists("France").await.unwrap());
        assert!(store.exists("FRANCE").await.unwrap());
        assert!(!store.exists("Germany").await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_with_unusual_whitespace() {
        let store = MemoryStore::new();
        store.insert(&country("Foo\u{a0}", 1)).await.unwrap();

        // The stored name is found again by itself, so a re-sync skips it.
        assert!(store.exists("Foo\u{a0}").await.unwrap());
        assert!(store.exists(" foo\u{a0} ").await.unwrap());
        assert!(!store.exists("Foo").await.unwrap());
    }

    #[tokio::test]
    async fn test_insert_does_not_deduplicate() {
        let store = MemoryStore::new();
        store.insert(&country("Chad", 1)).await.unwrap();
        store.insert(&country("chad", 1)).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_get_by_name() {
        let store = MemoryStore::with_rows([country("Peru", 33)]);

        let found = store.get_by_name("PERU").await.unwrap();
        assert_eq!(found.map(|c| c.name), Some("Peru".to_string()));
        assert!(store.get_by_name("Atlantis").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_require_by_name() {
        let store = MemoryStore::with_rows([country("Peru", 33)]);

        assert_eq!(store.require_by_name("peru").await.unwrap().population, 33);
        let err = store.require_by_name("Atlantis").await.unwrap_err();
        assert!(matches!(err, crate::Error::NotFound(ref name) if name == "Atlantis"));
    }

    #[tokio::test]
    async fn test_list_all_sorted_by_name() {
        let store = MemoryStore::new();
        for name in ["Zambia", "Andorra", "Canada"] {
            store.insert(&country(name, 1)).await.unwrap();
        }

        let names: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Andorra", "Canada", "Zambia"]);
    }

    #[tokio::test]
    async fn test_aggregate_stats() {
        let store =
            MemoryStore::with_rows([country("A", 10), country("C", 30), country("B", 20)]);

        let stats = store.aggregate_stats().await.unwrap().unwrap();
        assert_eq!(stats.total_population, 60);
        assert!((stats.average_population - 20.0).abs() < f64::EPSILON);
        assert_eq!(stats.most_populated, "C");
    }

    #[tokio::test]
    async fn test_aggregate_stats_empty() {
        let store = MemoryStore::new();
        assert!(store.aggregate_stats().await.unwrap().is_none());
    }
}
