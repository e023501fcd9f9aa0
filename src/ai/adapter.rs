use std::sync::Arc;

use crate::domain::{Category, ClassificationError};

use super::ZeroShotClassifier;

pub const CANDIDATE_LABELS: [&str; 4] = [
    "relevant discussion",
    "promotional or spam",
    "appreciation or praise",
    "complaint or criticism",
];

pub fn category_for_label(label: &str) -> Option<Category> {
    match label {
        "relevant discussion" => Some(Category::Relevant),
        "promotional or spam" => Some(Category::Spam),
        "appreciation or praise" => Some(Category::Appreciation),
        "complaint or criticism" => Some(Category::Grievance),
        _ => None,
    }
}

/// Maps the oracle's top-ranked label onto a [`Category`].
#[derive(Clone)]
pub struct ClassifierAdapter {
    oracle: Arc<dyn ZeroShotClassifier>,
}

impl ClassifierAdapter {
    pub fn new(oracle: Arc<dyn ZeroShotClassifier>) -> Self {
        Self { oracle }
    }

    pub async fn classify(&self, comment: &str) -> Result<Category, ClassificationError> {
        let output = self.oracle.classify(comment, &CANDIDATE_LABELS).await?;
        let label = output.top_label().ok_or(ClassificationError::EmptyResult)?;
        tracing::debug!(
            target: "classifier",
            label,
            score = output.scores.first().copied().unwrap_or_default(),
            "zero-shot verdict"
        );
        category_for_label(label)
            .ok_or_else(|| ClassificationError::UnrecognizedLabel(label.to_string()))
    }
}
