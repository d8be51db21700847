//! Country record model.
//!
//! The dataset source nests some fields (`name.common`, `flags.png`) that are
//! flat columns in storage. [`SourceCountry`] mirrors the wire shape and
//! [`Country`] is the storage row; the `From` conversion between them is total.

use clickhouse::Row;
use serde::{Deserialize, Deserializer, Serialize};

/// A country as stored in the `countries` table.
///
/// Field names match the column names, so this struct is written and read
/// directly by the ClickHouse client.
#[derive(Debug, Clone, PartialEq, Eq, Row, Serialize, Deserialize)]
pub struct Country {
    /// Common name. The natural key, compared case-insensitively.
    pub name: String,
    /// Capital cities, in source order. Empty for countries without one.
    pub capital: Vec<String>,
    pub population: u64,
    pub region: String,
    /// URL of the PNG flag image.
    pub flag_url: String,
}

impl Country {
    /// Case-insensitive key for this record.
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }
}

/// A country record as returned by the dataset endpoint.
///
/// Every field may be missing or `null`; both decode to the empty value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceCountry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: SourceName,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capital: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub population: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: SourceFlags,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceName {
    #[serde(default, deserialize_with = "null_as_default")]
    pub common: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceFlags {
    #[serde(default, deserialize_with = "null_as_default")]
    pub png: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<SourceCountry> for Country {
    fn from(source: SourceCountry) -> Self {
        Self {
            name: source.name.common,
            capital: source.capital,
            population: source.population,
            region: source.region,
            flag_url: source.flags.png,
        }
    }
}

/// Aggregate population statistics over every stored country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationStats {
    pub total_population: u64,
    pub average_population: f64,
    /// Name of the country with the largest population. Ties resolve to
    /// whichever row the store returns first.
    pub most_populated: String,
}

/// Normalize a country name for case-insensitive comparison.
///
/// Strips surrounding ASCII spaces and lowercases, the same key ClickHouse
/// computes with `lowerUTF8(trimBoth(..))`. Other whitespace is part of the
/// name.
pub fn normalize_name(name: &str) -> String {
    name.trim_matches(' ').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_full_record() {
        let json = r#"{
            "name": {"common": "France", "official": "French Republic"},
            "capital": ["Paris"],
            "population": 67391582,
            "region": "Europe",
            "flags": {"png": "https://flagcdn.com/w320/fr.png", "svg": "https://flagcdn.com/fr.svg"}
        }"#;
        let source: SourceCountry = serde_json::from_str(json).unwrap();
        let country = Country::from(source);

        assert_eq!(country.name, "France");
        assert_eq!(country.capital, vec!["Paris".to_string()]);
        assert_eq!(country.population, 67_391_582);
        assert_eq!(country.region, "Europe");
        assert_eq!(country.flag_url, "https://flagcdn.com/w320/fr.png");
    }

    #[test]
    fn test_translate_missing_optional_fields() {
        let json = r#"{"name": {"common": "Antarctica"}, "population": 1000}"#;
        let source: SourceCountry = serde_json::from_str(json).unwrap();
        let country = Country::from(source);

        assert_eq!(country.name, "Antarctica");
        assert!(country.capital.is_empty());
        assert_eq!(country.region, "");
        assert_eq!(country.flag_url, "");
        assert_eq!(country.population, 1000);
    }

    #[test]
    fn test_translate_flags_without_png() {
        let json = r#"{"name": {"common": "Nowhere"}, "flags": {"svg": "x.svg"}}"#;
        let source: SourceCountry = serde_json::from_str(json).unwrap();
        let country = Country::from(source);
        assert_eq!(country.flag_url, "");
        assert_eq!(country.population, 0);
    }

    #[test]
    fn test_translate_empty_object() {
        let source: SourceCountry = serde_json::from_str("{}").unwrap();
        let country = Country::from(source);
        assert_eq!(country.name, "");
        assert!(country.capital.is_empty());
    }

    #[test]
    fn test_translate_null_fields() {
        let json = r#"{
            "name": {"common": null},
            "capital": null,
            "population": null,
            "region": null,
            "flags": {"png": null}
        }"#;
        let source: SourceCountry = serde_json::from_str(json).unwrap();
        let country = Country::from(source);
        assert_eq!(country.name, "");
        assert!(country.capital.is_empty());
        assert_eq!(country.population, 0);
        assert_eq!(country.region, "");
        assert_eq!(country.flag_url, "");
    }

    #[test]
    fn test_translate_null_nested_objects() {
        let json = r#"[
            {"name": null, "flags": null, "population": 7},
            {"name": {"common": "Chad"}, "region": "Africa"}
        ]"#;
        let sources: Vec<SourceCountry> = serde_json::from_str(json).unwrap();
        let countries: Vec<Country> = sources.into_iter().map(Country::from).collect();
        assert_eq!(countries[0].name, "");
        assert_eq!(countries[0].flag_url, "");
        assert_eq!(countries[0].population, 7);
        assert_eq!(countries[1].name, "Chad");
        assert_eq!(countries[1].region, "Africa");
    }

    #[test]
    fn test_multiple_capitals_keep_order() {
        let json = r#"{"name": {"common": "South Africa"}, "capital": ["Pretoria", "Bloemfontein", "Cape Town"]}"#;
        let source: SourceCountry = serde_json::from_str(json).unwrap();
        let country = Country::from(source);
        assert_eq!(
            country.capital,
            vec!["Pretoria", "Bloemfontein", "Cape Town"]
        );
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("FRANCE"), "france");
        assert_eq!(normalize_name("  France "), "france");
        assert_eq!(normalize_name("Åland Islands"), "åland islands");
        // Only ASCII spaces are stripped, matching ClickHouse trimBoth.
        assert_eq!(normalize_name("Foo\u{a0}"), "foo\u{a0}");
        assert_eq!(normalize_name("\tFoo "), "\tfoo");
    }

    #[test]
    fn test_country_key() {
        let country = Country {
            name: "Côte d'Ivoire".to_string(),
            capital: vec![],
            population: 0,
            region: String::new(),
            flag_url: String::new(),
        };
        assert_eq!(country.key(), "côte d'ivoire");
    }
}
