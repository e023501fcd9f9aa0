//! In-process collaborators for tests: no network, no model.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use crate::{
    ai::{ZeroShotClassifier, ZeroShotOutput},
    domain::{ClassificationError, FetchError, VideoId},
    youtube::{CommentPage, CommentSource},
};

/// Answers with a fixed top label, or per-comment overrides, and counts calls.
pub struct StubOracle {
    default_label: String,
    overrides: Vec<(String, Result<String, String>)>,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl StubOracle {
    pub fn answering(label: &str) -> Self {
        Self {
            default_label: label.to_string(),
            overrides: Vec::new(),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Comments containing `needle` get `label` instead of the default.
    pub fn with_label_for(mut self, needle: &str, label: &str) -> Self {
        self.overrides.push((needle.to_string(), Ok(label.to_string())));
        self
    }

    /// Comments containing `needle` make the oracle fail.
    pub fn failing_for(mut self, needle: &str) -> Self {
        self.overrides
            .push((needle.to_string(), Err(format!("model crashed on {needle}"))));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ZeroShotClassifier for StubOracle {
    async fn classify(
        &self,
        text: &str,
        candidate_labels: &[&str],
    ) -> Result<ZeroShotOutput, ClassificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(text.to_string());

        let answer = self
            .overrides
            .iter()
            .find(|(needle, _)| text.contains(needle.as_str()))
            .map(|(_, answer)| answer.clone())
            .unwrap_or_else(|| Ok(self.default_label.clone()));

        let top = answer.map_err(ClassificationError::Other)?;
        let mut labels = vec![top.clone()];
        labels.extend(
            candidate_labels
                .iter()
                .filter(|label| **label != top)
                .map(|label| label.to_string()),
        );
        let scores = (0..labels.len())
            .map(|i| if i == 0 { 0.7 } else { 0.1 })
            .collect();
        Ok(ZeroShotOutput { labels, scores })
    }
}

enum Pages {
    Chunked { comments: Vec<String>, page_size: usize },
    Scripted(Vec<Result<CommentPage, String>>),
    Failing(String),
}

/// Serves comment pages, either split from a flat list with chained offset
/// tokens or replayed from a script, and records every token it was asked for.
pub struct StubSource {
    pages: Pages,
    requests: AtomicUsize,
    tokens: Mutex<Vec<Option<String>>>,
}

impl StubSource {
    fn serving(pages: Pages) -> Self {
        Self {
            pages,
            requests: AtomicUsize::new(0),
            tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn with_comments<I, S>(comments: I, page_size: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::serving(Pages::Chunked {
            comments: comments.into_iter().map(Into::into).collect(),
            page_size: page_size.max(1),
        })
    }

    /// Replays `pages` in order; `Err` entries fail that request. Asking for
    /// more pages than scripted panics.
    pub fn scripted(pages: Vec<Result<CommentPage, String>>) -> Self {
        Self::serving(Pages::Scripted(pages))
    }

    pub fn empty() -> Self {
        Self::with_comments(Vec::<String>::new(), 100)
    }

    pub fn failing(message: &str) -> Self {
        Self::serving(Pages::Failing(message.to_string()))
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn tokens(&self) -> Vec<Option<String>> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommentSource for StubSource {
    async fn fetch_page(
        &self,
        _video_id: &VideoId,
        page_token: Option<&str>,
    ) -> Result<CommentPage, FetchError> {
        let call = self.requests.fetch_add(1, Ordering::SeqCst);
        self.tokens
            .lock()
            .unwrap()
            .push(page_token.map(str::to_string));

        match &self.pages {
            Pages::Failing(message) => Err(FetchError::Other(message.clone())),
            Pages::Scripted(pages) => match pages.get(call) {
                Some(Ok(page)) => Ok(page.clone()),
                Some(Err(message)) => Err(FetchError::Other(message.clone())),
                None => panic!("unexpected page request #{call}"),
            },
            Pages::Chunked {
                comments,
                page_size,
            } => {
                let start: usize = page_token
                    .map(|token| token.parse().unwrap_or(0))
                    .unwrap_or(0);
                let end = (start + page_size).min(comments.len());
                let texts = comments[start.min(end)..end]
                    .iter()
                    .cloned()
                    .map(Some)
                    .collect();
                let next_page_token = (end < comments.len()).then(|| end.to_string());
                Ok(CommentPage {
                    texts,
                    next_page_token,
                })
            }
        }
    }
}
