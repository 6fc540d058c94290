use crate::model::{AssetRef, Label};

/// One asset/correct-label pair eligible to be asked. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizItem {
    asset: AssetRef,
    correct_label: Label,
}

impl QuizItem {
    #[must_use]
    pub fn new(asset: AssetRef, correct_label: Label) -> Self {
        Self {
            asset,
            correct_label,
        }
    }

    #[must_use]
    pub fn asset(&self) -> &AssetRef {
        &self.asset
    }

    #[must_use]
    pub fn correct_label(&self) -> &Label {
        &self.correct_label
    }
}
