pub mod error;
pub mod structs;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;

use error::DetectionError;
use structs::{EmotionPredictRequest, EmotionPredictResponse};
use crate::env_keys::{DEFAULT_EMOTION_MODEL_ID, DEFAULT_EMOTION_PREDICT_URL, EMOTION_MODEL_ID, EMOTION_PREDICT_URL};
use super::common_structs::{EmotionResult, EmotionScores};

const MODEL_ID_HEADER: HeaderName = HeaderName::from_static("grpc-metadata-mm-model-id");


/// Client for the remote EmotionPredict service.
#[derive(Debug, Clone)]
pub struct EmotionService {
    client: Client,
    endpoint: String,
    headers: HeaderMap,
}

impl EmotionService {
    pub fn new() -> Self {
        let endpoint = std::env::var(EMOTION_PREDICT_URL).unwrap_or(DEFAULT_EMOTION_PREDICT_URL.to_owned());
        let model_id = std::env::var(EMOTION_MODEL_ID).unwrap_or(DEFAULT_EMOTION_MODEL_ID.to_owned());
        Self::with_endpoint(&endpoint, &model_id)
    }

    pub fn with_endpoint(endpoint: &str, model_id: &str) -> Self {
        let mut headers = HeaderMap::new();
        let model_id = HeaderValue::from_str(model_id).unwrap_or_else(|_| {
            tracing::warn!(model_id, "model id is not a valid header value, using default");
            HeaderValue::from_static(DEFAULT_EMOTION_MODEL_ID)
        });
        headers.insert(MODEL_ID_HEADER, model_id);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Self {
            client: Client::new(),
            endpoint: endpoint.to_owned(),
            headers,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs one analysis and collapses every failure into
    /// [`EmotionResult::invalid`].
    pub async fn detect_emotion(&self, text: &str) -> EmotionResult {
        match self.analyze(text).await {
            Ok(scores) => {
                let result = EmotionResult::from(scores);
                tracing::debug!(?result, "emotion detected");
                result
            },
            Err(DetectionError::BlankInput) => {
                tracing::info!("blank text, skipping emotion predict call");
                EmotionResult::invalid()
            },
            Err(error) => {
                tracing::warn!(%error, "emotion detection failed");
                EmotionResult::invalid()
            },
        }
    }

    /// Scores `text`, keeping the reason when no scores can be produced.
    pub async fn analyze(&self, text: &str) -> Result<EmotionScores, DetectionError> {
        if text.trim().is_empty() {
            return Err(DetectionError::BlankInput);
        }

        let request = EmotionPredictRequest::new(text);
        tracing::debug!(endpoint = %self.endpoint, "sending emotion predict request");

        let response = self.client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .body(serde_json::to_string(&request)?)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%status, "emotion predict response received");
        if !status.is_success() {
            return Err(DetectionError::Status(status));
        }

        let body_string = response.text().await?;
        let scores = EmotionPredictResponse::from_body(&body_string)?.into_scores()?;

        if scores.is_all_zero() {
            return Err(DetectionError::NoEmotionDetected);
        }

        Ok(scores)
    }
}
