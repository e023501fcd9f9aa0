use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::domain::ClassificationError;

use super::{ZeroShotClassifier, ZeroShotOutput};

/// Bounds the number of oracle calls in flight across all requests.
///
/// With one permit every call is serialized; more permits let independent
/// requests share the oracle concurrently.
pub struct GatedClassifier {
    inner: Arc<dyn ZeroShotClassifier>,
    permits: Semaphore,
}

impl GatedClassifier {
    pub fn new(inner: Arc<dyn ZeroShotClassifier>, max_in_flight: usize) -> Self {
        Self {
            inner,
            permits: Semaphore::new(max_in_flight.max(1)),
        }
    }
}

#[async_trait]
impl ZeroShotClassifier for GatedClassifier {
    async fn classify(
        &self,
        text: &str,
        candidate_labels: &[&str],
    ) -> Result<ZeroShotOutput, ClassificationError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|err| ClassificationError::Other(err.to_string()))?;
        self.inner.classify(text, candidate_labels).await
    }
}
