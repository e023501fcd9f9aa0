use crate::{
    ai::ClassifierAdapter,
    domain::{Category, ClassificationError, ClassifiedBuckets},
};

use super::heuristics::SpamSignals;

const PROGRESS_EVERY: usize = 10;

pub struct ClassificationPipeline {
    adapter: ClassifierAdapter,
}

impl ClassificationPipeline {
    pub fn new(adapter: ClassifierAdapter) -> Self {
        Self { adapter }
    }

    /// Heuristic first; the model is only consulted when fewer than two spam
    /// signals fire.
    pub async fn classify_one(&self, comment: &str) -> Result<Category, ClassificationError> {
        let signals = SpamSignals::detect(comment);
        if signals.is_spam() {
            tracing::debug!(target: "pipeline", signals = signals.count(), "heuristic spam");
            return Ok(Category::Spam);
        }
        self.adapter.classify(comment).await
    }

    /// Classifies comments one at a time in the given order.
    ///
    /// A comment whose classification fails is logged and left out of every
    /// bucket, so the bucket total can be smaller than `comments.len()`.
    pub async fn run(&self, comments: Vec<String>) -> ClassifiedBuckets {
        let total = comments.len();
        let mut buckets = ClassifiedBuckets::default();
        let mut skipped = 0usize;

        for (index, comment) in comments.into_iter().enumerate() {
            match self.classify_one(&comment).await {
                Ok(category) => buckets.push(category, comment),
                Err(err) => {
                    skipped += 1;
                    tracing::error!(
                        target: "pipeline",
                        index,
                        error = %err,
                        "failed to classify comment; skipping"
                    );
                    continue;
                }
            }
            if index % PROGRESS_EVERY == 0 {
                tracing::info!(target: "pipeline", processed = index + 1, total, "classification progress");
            }
        }

        for category in Category::ALL {
            tracing::info!(
                target: "pipeline",
                category = %category,
                count = buckets.get(category).len(),
                "bucket total"
            );
        }
        if skipped > 0 {
            tracing::warn!(target: "pipeline", skipped, total, "some comments were dropped");
        }
        buckets
    }
}
