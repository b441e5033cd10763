// SPDX-License-Identifier: MPL-2.0
//! Item catalog: the read-only data collaborator that supplies listings.
//!
//! A catalog is a TOML document with an `[[items]]` table per listing.
//! Items are immutable for the lifetime of a card; the storefront clones
//! one item into each card instance at startup. A sample catalog is
//! embedded so the app has content without any command-line argument.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Embedded sample catalog used when no path is given on the CLI.
const SAMPLE_CATALOG: &str = include_str!("../assets/catalog/sample.toml");

/// A full catalog of listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub items: Vec<Item>,
}

/// One listing, as supplied by the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    pub id: String,
    pub category: String,
    pub condition: String,
    pub description: String,
    pub price: f64,
    /// Image sources in display order; paths or URLs. May be empty, in
    /// which case the card renders a placeholder pane.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ordered key/value pairs shown in the modal's details section.
    #[serde(default)]
    pub details: Vec<Detail>,
    pub seller: Seller,
    #[serde(default)]
    pub seller_reviews: Vec<Review>,
    #[serde(default)]
    pub recommended: Vec<Recommendation>,
    /// Path the Buy button navigates to.
    #[serde(default = "default_buy_destination")]
    pub buy_destination: String,
    /// Compact listings use the press-hold card variant instead of the
    /// tap-to-open one.
    #[serde(default)]
    pub compact: bool,
}

/// One details-section entry. A list of pairs rather than a map so the
/// catalog's ordering survives deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Detail {
    pub key: String,
    pub value: String,
}

/// The listing's seller.
#[derive(Debug, Clone, Deserialize)]
pub struct Seller {
    pub id: String,
    pub username: String,
    pub listed_at: DateTime<Utc>,
}

/// A seller review shown in the modal's reviews section.
#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    pub reviewer: String,
    /// Star rating out of five.
    pub rating: u8,
    pub comment: String,
}

/// An entry in the modal's recommended-items section.
#[derive(Debug, Clone, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub description: String,
    pub price: f64,
}

fn default_buy_destination() -> String {
    "/".to_string()
}

/// Loads a catalog from a TOML file on disk.
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::Catalog(e.to_string()))
}

/// Loads the embedded sample catalog.
pub fn load_sample() -> Result<Catalog> {
    toml::from_str(SAMPLE_CATALOG).map_err(|e| Error::Catalog(e.to_string()))
}

/// Coarse buckets for the "listed … ago" label on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elapsed {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

impl Elapsed {
    /// Buckets the time elapsed since `listed_at` as of `now`.
    ///
    /// Timestamps in the future (clock skew between catalog author and
    /// viewer) bucket as `JustNow`.
    #[must_use]
    pub fn since(listed_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let elapsed = now.signed_duration_since(listed_at);
        let minutes = elapsed.num_minutes();
        if minutes < 1 {
            Elapsed::JustNow
        } else if minutes < 60 {
            Elapsed::Minutes(minutes)
        } else if elapsed.num_hours() < 24 {
            Elapsed::Hours(elapsed.num_hours())
        } else {
            Elapsed::Days(elapsed.num_days())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn sample_catalog_parses() {
        let catalog = load_sample().expect("sample catalog must parse");
        assert!(!catalog.items.is_empty());

        let first = &catalog.items[0];
        assert!(!first.images.is_empty());
        assert!(!first.seller.username.is_empty());
        assert!(first.price > 0.0);
    }

    #[test]
    fn load_from_path_reads_a_catalog_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("catalog.toml");
        let mut file = fs::File::create(&path).expect("failed to create catalog file");
        file.write_all(SAMPLE_CATALOG.as_bytes())
            .expect("failed to write catalog file");

        let catalog = load_from_path(&path).expect("catalog must load");
        assert_eq!(catalog.items.len(), load_sample().unwrap().items.len());
    }

    #[test]
    fn load_from_path_reports_invalid_toml() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("catalog.toml");
        fs::write(&path, "items = 3").expect("failed to write file");

        match load_from_path(&path) {
            Err(Error::Catalog(_)) => {}
            other => panic!("expected catalog error, got {:?}", other),
        }
    }

    #[test]
    fn missing_buy_destination_defaults_to_root() {
        let catalog: Catalog = toml::from_str(
            r#"
            [[items]]
            id = "x"
            category = "Solar Panels"
            condition = "Used"
            description = "A panel"
            price = 100.0

            [items.seller]
            id = "s"
            username = "amira"
            listed_at = "2024-11-02T08:30:00Z"
            "#,
        )
        .expect("minimal item must parse");

        assert_eq!(catalog.items[0].buy_destination, "/");
        assert!(catalog.items[0].images.is_empty());
        assert!(!catalog.items[0].compact);
    }

    #[test]
    fn elapsed_buckets_listing_age() {
        let listed = Utc.with_ymd_and_hms(2024, 11, 2, 8, 0, 0).unwrap();

        let now = listed + chrono::Duration::seconds(30);
        assert_eq!(Elapsed::since(listed, now), Elapsed::JustNow);

        let now = listed + chrono::Duration::minutes(45);
        assert_eq!(Elapsed::since(listed, now), Elapsed::Minutes(45));

        let now = listed + chrono::Duration::hours(3);
        assert_eq!(Elapsed::since(listed, now), Elapsed::Hours(3));

        let now = listed + chrono::Duration::days(12);
        assert_eq!(Elapsed::since(listed, now), Elapsed::Days(12));
    }

    #[test]
    fn elapsed_treats_future_timestamps_as_just_now() {
        let listed = Utc.with_ymd_and_hms(2024, 11, 2, 8, 0, 0).unwrap();
        let now = listed - chrono::Duration::hours(1);
        assert_eq!(Elapsed::since(listed, now), Elapsed::JustNow);
    }
}
