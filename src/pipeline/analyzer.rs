use std::sync::Arc;

use crate::{
    domain::{AnalyzeError, ClassifiedBuckets},
    youtube::{extract_video_id, fetch_comments, CommentSource},
};

use super::ClassificationPipeline;

/// URL in, buckets out: the whole unit of work behind `POST /analyze`.
pub struct CommentAnalyzer {
    source: Arc<dyn CommentSource>,
    pipeline: ClassificationPipeline,
    comment_limit: usize,
}

impl CommentAnalyzer {
    pub fn new(
        source: Arc<dyn CommentSource>,
        pipeline: ClassificationPipeline,
        comment_limit: usize,
    ) -> Self {
        Self {
            source,
            pipeline,
            comment_limit,
        }
    }

    pub async fn analyze(&self, video_url: &str) -> Result<ClassifiedBuckets, AnalyzeError> {
        if video_url.is_empty() {
            return Err(AnalyzeError::MissingUrl);
        }

        let video_id = extract_video_id(video_url)?;
        tracing::info!(target: "pipeline", video_id = %video_id, "processing video");

        let comments = fetch_comments(self.source.as_ref(), &video_id, self.comment_limit).await?;
        if comments.is_empty() {
            return Err(AnalyzeError::NoComments);
        }

        let fetched = comments.len();
        let buckets = self.pipeline.run(comments).await;
        tracing::info!(
            target: "pipeline",
            video_id = %video_id,
            fetched,
            classified = buckets.total(),
            "analysis complete"
        );
        Ok(buckets)
    }
}
