use serde::{Deserialize, Serialize};

use crate::domain::ClassificationError;

use super::ZeroShotOutput;

pub fn build_request<'a>(text: &'a str, candidate_labels: &'a [&'a str]) -> ZeroShotRequest<'a> {
    ZeroShotRequest {
        inputs: text,
        parameters: ZeroShotParameters {
            candidate_labels,
            multi_label: false,
        },
    }
}

pub fn parse_response(body: &str) -> Result<ZeroShotOutput, ClassificationError> {
    let response: ZeroShotResponse = serde_json::from_str(body)?;
    let output = match response {
        ZeroShotResponse::Ranked { labels, scores } => {
            if labels.len() != scores.len() {
                return Err(ClassificationError::Other(format!(
                    "classifier returned {} labels but {} scores",
                    labels.len(),
                    scores.len()
                )));
            }
            ZeroShotOutput { labels, scores }
        }
        ZeroShotResponse::Scored(mut entries) => {
            entries.sort_by(|a, b| b.score.total_cmp(&a.score));
            let (labels, scores) = entries.into_iter().map(|e| (e.label, e.score)).unzip();
            ZeroShotOutput { labels, scores }
        }
    };

    if output.labels.is_empty() {
        return Err(ClassificationError::EmptyResult);
    }
    Ok(output)
}

#[derive(Debug, Serialize)]
pub struct ZeroShotRequest<'a> {
    pub inputs: &'a str,
    pub parameters: ZeroShotParameters<'a>,
}

#[derive(Debug, Serialize)]
pub struct ZeroShotParameters<'a> {
    pub candidate_labels: &'a [&'a str],
    pub multi_label: bool,
}

/// The endpoint answers either with the pipeline's ranked object or with a
/// flat list of label/score pairs.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ZeroShotResponse {
    Ranked { labels: Vec<String>, scores: Vec<f32> },
    Scored(Vec<LabelScore>),
}

#[derive(Debug, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f32,
}

#[derive(Debug, Deserialize)]
pub struct InferenceErrorResponse {
    pub error: String,
}
