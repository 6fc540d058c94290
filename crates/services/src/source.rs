use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::SourceError;

/// One record of the remote asset listing, as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingRecord {
    pub image: String,
    pub label: String,
}

impl ListingRecord {
    #[must_use]
    pub fn new(image: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            label: label.into(),
        }
    }
}

const ELIGIBLE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// True when the referenced asset is an image the quiz can show.
/// The listing server applies the same extension filter.
#[must_use]
pub fn is_eligible_asset(reference: &str) -> bool {
    let Some((_, ext)) = reference.rsplit_once('.') else {
        return false;
    };
    ELIGIBLE_EXTENSIONS
        .iter()
        .any(|eligible| ext.eq_ignore_ascii_case(eligible))
}

/// Source of raw quiz listing records.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetch the raw listing.
    async fn fetch_listing(&self) -> Result<Vec<ListingRecord>, SourceError>;
}

/// Listing source backed by the remote listing endpoint.
pub struct HttpItemSource {
    client: Client,
    base_url: String,
}

impl HttpItemSource {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ItemSource for HttpItemSource {
    async fn fetch_listing(&self) -> Result<Vec<ListingRecord>, SourceError> {
        let url = format!("{}/api/images", self.base_url.trim_end_matches('/'));
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::HttpStatus(response.status()));
        }

        // An empty listing arrives as `null` rather than `[]`.
        let listing: Option<Vec<ListingRecord>> = response.json().await?;
        Ok(listing.unwrap_or_default())
    }
}

/// In-memory listing source for tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct FixedItemSource {
    records: Vec<ListingRecord>,
}

impl FixedItemSource {
    #[must_use]
    pub fn new(records: Vec<ListingRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl ItemSource for FixedItemSource {
    async fn fetch_listing(&self) -> Result<Vec<ListingRecord>, SourceError> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_decodes_from_the_wire_format() {
        let body = r#"[
            {"image": "images/jackettt.jpeg", "label": "usable"},
            {"image": "images/damageddd.jpg", "label": "not usable"}
        ]"#;
        let listing: Vec<ListingRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(
            listing,
            vec![
                ListingRecord::new("images/jackettt.jpeg", "usable"),
                ListingRecord::new("images/damageddd.jpg", "not usable"),
            ]
        );
    }

    #[test]
    fn null_listing_decodes_as_empty() {
        let listing: Option<Vec<ListingRecord>> = serde_json::from_str("null").unwrap();
        assert_eq!(listing.unwrap_or_default(), Vec::new());
    }

    #[test]
    fn eligibility_covers_image_extensions_only() {
        assert!(is_eligible_asset("images/shirt.jpg"));
        assert!(is_eligible_asset("images/shirt.JPEG"));
        assert!(is_eligible_asset("images/shirt.png"));
        assert!(!is_eligible_asset("images/notes.txt"));
        assert!(!is_eligible_asset("images/clip.gif"));
        assert!(!is_eligible_asset("no-extension"));
    }

    #[tokio::test]
    async fn fixed_source_returns_its_records() {
        let records = vec![ListingRecord::new("images/a.jpg", "usable")];
        let source = FixedItemSource::new(records.clone());
        assert_eq!(source.fetch_listing().await.unwrap(), records);
    }
}
