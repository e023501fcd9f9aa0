pub mod client;
pub mod fetcher;
pub mod types;
pub mod video_url;

use async_trait::async_trait;

use crate::domain::{FetchError, VideoId};

pub use client::YouTubeClient;
pub use fetcher::fetch_comments;
pub use types::CommentPage;
pub use video_url::extract_video_id;

/// `maxResults` requested per page; the API's ceiling.
pub const PAGE_SIZE: usize = 100;

/// One page of top-level comment threads for a video.
#[async_trait]
pub trait CommentSource: Send + Sync {
    async fn fetch_page(
        &self,
        video_id: &VideoId,
        page_token: Option<&str>,
    ) -> Result<CommentPage, FetchError>;
}
