//! `restaurants.json` persistence.
//!
//! The file holds a JSON array of listings, raw before the first
//! enrichment run and enriched afterwards. Writes always replace the
//! whole file.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use menumind_core::{Error, Result};
use menumind_enrich::{EnrichedListing, RawListing};

/// File-backed listing collection.
pub struct ListingStore {
    path: PathBuf,
}

impl ListingStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection as raw listings. Derived fields, if present, are
    /// ignored. A missing file yields an empty collection.
    pub fn load_raw(&self) -> Result<Vec<RawListing>> {
        if !self.path.exists() {
            warn!("Restaurant data not found at {}", self.path.display());
            return Ok(Vec::new());
        }
        self.read_json()
    }

    /// Load the enriched collection. Fails with `NotFound` when the file does
    /// not exist.
    pub fn load_enriched(&self) -> Result<Vec<EnrichedListing>> {
        if !self.path.exists() {
            return Err(Error::NotFound(format!(
                "restaurant data at {}",
                self.path.display()
            )));
        }
        self.read_json().map_err(|e| match e {
            Error::Json(e) => Error::Storage(format!(
                "{} is not enriched (run `menumind enrich` first): {}",
                self.path.display(),
                e
            )),
            other => other,
        })
    }

    /// Replace the whole collection. Written to a sibling temp file first and
    /// renamed into place.
    pub fn save(&self, listings: &[EnrichedListing]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(listings)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        info!("Saved {} restaurants to {}", listings.len(), self.path.display());
        Ok(())
    }

    /// Look up one enriched listing by place_id.
    pub fn find(&self, place_id: &str) -> Result<EnrichedListing> {
        self.load_enriched()?
            .into_iter()
            .find(|l| l.listing.place_id == place_id)
            .ok_or_else(|| Error::NotFound(format!("restaurant {}", place_id)))
    }

    /// Distinct non-empty city names, sorted.
    pub fn cities(&self) -> Result<Vec<String>> {
        Ok(distinct_cities(&self.load_enriched()?))
    }

    fn read_json<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Distinct non-empty city names across `listings`, sorted.
pub fn distinct_cities(listings: &[EnrichedListing]) -> Vec<String> {
    let mut cities: Vec<String> = listings
        .iter()
        .map(|l| l.listing.city.clone())
        .filter(|c| !c.is_empty())
        .collect();
    cities.sort();
    cities.dedup();
    cities
}

#[cfg(test)]
mod tests {
    use super::*;
    use menumind_enrich::EnrichmentPipeline;

    fn test_store() -> (ListingStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = ListingStore::new(dir.path().join("restaurants.json"));
        (store, dir)
    }

    fn raw(id: &str, city: &str) -> RawListing {
        RawListing {
            place_id: id.into(),
            name: format!("Place {}", id),
            city: city.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_file() {
        let (store, _dir) = test_store();
        assert!(store.load_raw().unwrap().is_empty());
        assert!(matches!(store.load_enriched(), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let (store, _dir) = test_store();
        let report = EnrichmentPipeline::run(vec![raw("A", "Columbus"), raw("B", "Akron")]);
        store.save(&report.listings).unwrap();

        let loaded = store.load_enriched().unwrap();
        assert_eq!(loaded, report.listings);
        assert!(!store.path().with_extension("json.tmp").exists());

        // Raw view of the same file.
        let raw_view = store.load_raw().unwrap();
        assert_eq!(raw_view.len(), 2);
        assert_eq!(raw_view[0].place_id, "A");
    }

    #[test]
    fn test_save_replaces_everything() {
        let (store, _dir) = test_store();
        let first = EnrichmentPipeline::run(vec![raw("A", "Columbus"), raw("B", "Akron")]);
        store.save(&first.listings).unwrap();
        let second = EnrichmentPipeline::run(vec![raw("C", "Dayton")]);
        store.save(&second.listings).unwrap();

        let loaded = store.load_enriched().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].listing.place_id, "C");
    }

    #[test]
    fn test_raw_file_is_not_enriched() {
        let (store, _dir) = test_store();
        std::fs::write(store.path(), r#"[{"place_id": "A", "name": "Raw"}]"#).unwrap();
        assert_eq!(store.load_raw().unwrap()[0].name, "Raw");
        assert!(matches!(store.load_enriched(), Err(Error::Storage(_))));
    }

    #[test]
    fn test_malformed_record_keeps_batch() {
        let (store, _dir) = test_store();
        std::fs::write(
            store.path(),
            r#"[{"place_id": "A", "price_level": 2},
                {"place_id": "B", "price_level": 2.5, "rating": "n/a"},
                {"place_id": "C", "price_level": 4.0}]"#,
        )
        .unwrap();

        let raw = store.load_raw().unwrap();
        let levels: Vec<i64> = raw.iter().map(|l| l.price_level).collect();
        assert_eq!(levels, vec![2, 0, 4]);

        let report = EnrichmentPipeline::run(raw);
        let displays: Vec<&str> = report.listings.iter().map(|l| l.price_display.as_str()).collect();
        assert_eq!(displays, vec!["$$", "Unknown", "$$$$"]);
    }

    #[test]
    fn test_find_and_cities() {
        let (store, _dir) = test_store();
        let report = EnrichmentPipeline::run(vec![
            raw("A", "Columbus"),
            raw("B", "Akron"),
            raw("C", "Columbus"),
            raw("D", ""),
        ]);
        store.save(&report.listings).unwrap();

        assert_eq!(store.find("B").unwrap().listing.name, "Place B");
        assert!(matches!(store.find("Z"), Err(Error::NotFound(_))));
        assert_eq!(store.cities().unwrap(), vec!["Akron", "Columbus"]);
    }
}
