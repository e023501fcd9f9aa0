use async_trait::async_trait;
use reqwest::Client;

use crate::{config::ClassifierConfig, domain::ClassificationError};

use super::{
    inference::{build_request, parse_response, InferenceErrorResponse},
    ZeroShotClassifier, ZeroShotOutput,
};

/// Zero-shot classification over a hosted inference endpoint.
#[derive(Clone)]
pub struct InferenceClient {
    http: Client,
    endpoint: String,
    api_token: Option<String>,
}

impl InferenceClient {
    pub fn new(http: Client, config: &ClassifierConfig) -> Self {
        let endpoint = format!(
            "{}/{}",
            config.api_url.trim_end_matches('/'),
            config.model.trim_start_matches('/')
        );
        Self {
            http,
            endpoint,
            api_token: config.api_token.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ZeroShotClassifier for InferenceClient {
    async fn classify(
        &self,
        text: &str,
        candidate_labels: &[&str],
    ) -> Result<ZeroShotOutput, ClassificationError> {
        let request = build_request(text, candidate_labels);
        let mut builder = self.http.post(&self.endpoint).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<InferenceErrorResponse>(&body)
                .map(|err| err.error)
                .unwrap_or(body);
            return Err(ClassificationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        parse_response(&body)
    }
}
