pub mod adapter;
pub mod client;
pub mod gate;
pub mod inference;

use async_trait::async_trait;

use crate::domain::ClassificationError;

pub use adapter::ClassifierAdapter;
pub use client::InferenceClient;
pub use gate::GatedClassifier;

/// Labels ranked by descending score.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroShotOutput {
    pub labels: Vec<String>,
    pub scores: Vec<f32>,
}

impl ZeroShotOutput {
    pub fn top_label(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }
}

#[async_trait]
pub trait ZeroShotClassifier: Send + Sync {
    /// Scores `text` against mutually exclusive `candidate_labels`.
    async fn classify(
        &self,
        text: &str,
        candidate_labels: &[&str],
    ) -> Result<ZeroShotOutput, ClassificationError>;
}
