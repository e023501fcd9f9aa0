use crate::domain::{FetchError, VideoId};

use super::CommentSource;

/// Collects top-level comment texts page by page.
///
/// The limit is checked before each request, so the last page can push the
/// total past `limit`; the result is returned untruncated. A failing page
/// ends pagination with whatever was already collected, and so does an
/// empty continuation token. Only a failure
/// before anything was collected is reported as an error.
pub async fn fetch_comments(
    source: &dyn CommentSource,
    video_id: &VideoId,
    limit: usize,
) -> Result<Vec<String>, FetchError> {
    let mut comments: Vec<String> = Vec::new();
    let mut page_token: Option<String> = None;
    let mut pages = 0usize;

    while comments.len() < limit {
        let page = match source.fetch_page(video_id, page_token.as_deref()).await {
            Ok(page) => page,
            Err(err) if comments.is_empty() => {
                tracing::error!(target: "youtube", video_id = %video_id, error = %err, "comment fetch failed before anything was collected");
                return Err(err);
            }
            Err(err) => {
                tracing::warn!(
                    target: "youtube",
                    video_id = %video_id,
                    collected = comments.len(),
                    error = %err,
                    "comment page failed; keeping partial results"
                );
                break;
            }
        };
        pages += 1;

        tracing::info!(target: "youtube", video_id = %video_id, page = pages, items = page.texts.len(), "fetched comment page");
        for (index, text) in page.texts.into_iter().enumerate() {
            match text {
                Some(text) if !text.trim().is_empty() => comments.push(text),
                Some(_) => {}
                None => {
                    tracing::warn!(target: "youtube", page = pages, index, "comment thread missing display text");
                }
            }
        }

        match page.next_page_token.filter(|token| !token.is_empty()) {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    tracing::info!(target: "youtube", video_id = %video_id, total = comments.len(), pages, "comment collection finished");
    Ok(comments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{testing::StubSource, youtube::CommentPage};

    fn page(prefix: &str, count: usize, next: Option<&str>) -> CommentPage {
        CommentPage {
            texts: (0..count)
                .map(|i| Some(format!("{prefix} comment {i}")))
                .collect(),
            next_page_token: next.map(str::to_string),
        }
    }

    fn video() -> VideoId {
        VideoId::new("abc123")
    }

    #[tokio::test]
    async fn stops_after_crossing_the_limit_without_truncating() {
        let source = StubSource::scripted(vec![
            Ok(page("p1", 40, Some("t1"))),
            Ok(page("p2", 40, Some("t2"))),
            Ok(page("p3", 40, Some("t3"))),
            Ok(page("p4", 40, Some("t4"))),
        ]);

        let comments = fetch_comments(&source, &video(), 100).await.unwrap();

        assert_eq!(comments.len(), 120);
        assert_eq!(source.requests(), 3);
        assert_eq!(
            source.tokens(),
            vec![None, Some("t1".to_string()), Some("t2".to_string())]
        );
        assert_eq!(comments[0], "p1 comment 0");
        assert_eq!(comments[119], "p3 comment 39");
    }

    #[tokio::test]
    async fn stops_when_no_token_remains() {
        let source = StubSource::scripted(vec![
            Ok(page("p1", 10, Some("t1"))),
            Ok(page("p2", 5, None)),
        ]);

        let comments = fetch_comments(&source, &video(), 100).await.unwrap();

        assert_eq!(comments.len(), 15);
        assert_eq!(source.requests(), 2);
    }

    #[tokio::test]
    async fn skips_missing_and_blank_items() {
        let source = StubSource::scripted(vec![Ok(CommentPage {
            texts: vec![
                Some("first".into()),
                None,
                Some("   ".into()),
                Some("second".into()),
            ],
            next_page_token: None,
        })]);

        let comments = fetch_comments(&source, &video(), 100).await.unwrap();

        assert_eq!(comments, vec!["first".to_string(), "second".to_string()]);
    }

    #[tokio::test]
    async fn empty_continuation_token_ends_paging() {
        let source = StubSource::scripted(vec![Ok(page("p1", 10, Some("")))]);

        let comments = fetch_comments(&source, &video(), 100).await.unwrap();

        assert_eq!(comments.len(), 10);
        assert_eq!(source.requests(), 1);
    }

    #[tokio::test]
    async fn later_page_failure_keeps_partial_results() {
        let source = StubSource::scripted(vec![
            Ok(page("p1", 30, Some("t1"))),
            Err("quota exceeded".into()),
        ]);

        let comments = fetch_comments(&source, &video(), 100).await.unwrap();

        assert_eq!(comments.len(), 30);
    }

    #[tokio::test]
    async fn first_page_failure_is_an_error() {
        let source = StubSource::scripted(vec![Err("commentsDisabled".into())]);

        let err = fetch_comments(&source, &video(), 100).await.unwrap_err();

        assert!(err.to_string().contains("commentsDisabled"));
    }

    #[tokio::test]
    async fn empty_video_yields_no_comments() {
        let source = StubSource::scripted(vec![Ok(page("p1", 0, None))]);

        let comments = fetch_comments(&source, &video(), 100).await.unwrap();

        assert!(comments.is_empty());
    }
}
