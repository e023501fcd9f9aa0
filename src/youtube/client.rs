use async_trait::async_trait;
use reqwest::{Client, Response};
use url::Url;

use crate::{
    config::YouTubeConfig,
    domain::{FetchError, VideoId},
};

use super::{
    types::{ApiErrorResponse, CommentPage, CommentThreadListResponse},
    CommentSource, PAGE_SIZE,
};

#[derive(Clone)]
pub struct YouTubeClient {
    http: Client,
    endpoint: Url,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(http: Client, config: &YouTubeConfig) -> anyhow::Result<Self> {
        let base = config.base_url.trim_end_matches('/');
        let endpoint = Url::parse(&format!("{base}/commentThreads"))?;
        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    fn page_url(&self, video_id: &VideoId, page_token: Option<&str>) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("part", "snippet")
                .append_pair("videoId", video_id.as_str())
                .append_pair("maxResults", &PAGE_SIZE.to_string())
                .append_pair("textFormat", "plainText")
                .append_pair("key", &self.api_key);
            if let Some(token) = page_token {
                query.append_pair("pageToken", token);
            }
        }
        url
    }
}

#[async_trait]
impl CommentSource for YouTubeClient {
    async fn fetch_page(
        &self,
        video_id: &VideoId,
        page_token: Option<&str>,
    ) -> Result<CommentPage, FetchError> {
        let response = self
            .http
            .get(self.page_url(video_id, page_token))
            .send()
            .await?;
        let body = check_status(response).await?.text().await?;
        let page: CommentThreadListResponse = serde_json::from_str(&body)
            .map_err(|err| FetchError::Other(format!("malformed comment page: {err}")))?;
        Ok(page.into())
    }
}

async fn check_status(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorResponse>(&body)
        .map(|err| err.error.message)
        .unwrap_or(body);
    Err(FetchError::Api {
        status: status.as_u16(),
        message,
    })
}
