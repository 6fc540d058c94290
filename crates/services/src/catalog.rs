use quiz_core::model::Label;

use crate::error::CatalogError;

/// Canonical label vocabulary plus normalization of raw listing labels.
///
/// Listings carry free-form label text; the quiz core only ever sees
/// labels from this catalog. Normalization is case-insensitive on the
/// trimmed input. A catalog may designate one of its labels as the
/// fallback for unrecognized input; without one the catalog is strict
/// and unrecognized records are skipped upstream.
#[derive(Debug, Clone)]
pub struct LabelCatalog {
    labels: Vec<Label>,
    fallback: Option<Label>,
}

impl LabelCatalog {
    /// Create a strict catalog from the canonical labels, in
    /// presentation order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::TooFewLabels` for fewer than two labels
    /// and `CatalogError::DuplicateLabel` on repeats.
    pub fn new(
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, CatalogError> {
        let mut canonical: Vec<Label> = Vec::new();
        for raw in labels {
            let label = Label::new(raw)?;
            if canonical.contains(&label) {
                return Err(CatalogError::DuplicateLabel(label.as_str().to_string()));
            }
            canonical.push(label);
        }
        if canonical.len() < 2 {
            return Err(CatalogError::TooFewLabels);
        }
        Ok(Self {
            labels: canonical,
            fallback: None,
        })
    }

    /// Collapse every unrecognized raw label onto `fallback` instead of
    /// skipping the record.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownFallback` if the fallback is not
    /// one of the canonical labels.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Result<Self, CatalogError> {
        let fallback = Label::new(fallback)?;
        if !self.labels.contains(&fallback) {
            return Err(CatalogError::UnknownFallback(
                fallback.as_str().to_string(),
            ));
        }
        self.fallback = Some(fallback);
        Ok(self)
    }

    /// Stock two-choice catalog for clothing-usability listings: raw
    /// labels that don't say "usable" all count as "Not usable".
    ///
    /// # Panics
    ///
    /// Never panics; the stock labels are statically valid.
    #[must_use]
    pub fn usability() -> Self {
        Self::new(["Usable", "Not usable"])
            .and_then(|catalog| catalog.with_fallback("Not usable"))
            .expect("stock catalog should be valid")
    }

    /// Normalize a raw listing label onto the canonical set.
    ///
    /// Returns the matching canonical label, the fallback when one is
    /// configured, or `None` in strict mode.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> Option<Label> {
        let trimmed = raw.trim();
        self.labels
            .iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(trimmed))
            .cloned()
            .or_else(|| self.fallback.clone())
    }

    /// Canonical labels in presentation order.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}
