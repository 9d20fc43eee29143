use serde::{Deserialize, Serialize};

use super::error::DetectionError;
use crate::service::common_structs::EmotionScores;


#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EmotionPredictRequest {
    pub raw_document: RawDocument,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub text: String,
}

impl EmotionPredictRequest {
    pub fn new(text: &str) -> Self {
        Self {
            raw_document: RawDocument { text: text.to_owned() },
        }
    }
}


#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EmotionPredictResponse {
    #[serde(rename = "emotionPredictions")]
    pub emotion_predictions: Vec<EmotionPrediction>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EmotionPrediction {
    pub emotion: PredictedEmotion,
}

// other keys the service may send are ignored
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PredictedEmotion {
    #[serde(default)]
    pub anger: Option<f64>,
    #[serde(default)]
    pub disgust: Option<f64>,
    #[serde(default)]
    pub fear: Option<f64>,
    #[serde(default)]
    pub joy: Option<f64>,
    #[serde(default)]
    pub sadness: Option<f64>,
}

impl From<PredictedEmotion> for EmotionScores {
    fn from(emotion: PredictedEmotion) -> Self {
        Self {
            anger: emotion.anger.unwrap_or(0.0),
            disgust: emotion.disgust.unwrap_or(0.0),
            fear: emotion.fear.unwrap_or(0.0),
            joy: emotion.joy.unwrap_or(0.0),
            sadness: emotion.sadness.unwrap_or(0.0),
        }
    }
}

impl EmotionPredictResponse {
    pub fn from_body(body: &str) -> Result<Self, DetectionError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Scores of the first prediction.
    pub fn into_scores(self) -> Result<EmotionScores, DetectionError> {
        let prediction = self
            .emotion_predictions
            .into_iter()
            .next()
            .ok_or(DetectionError::MissingPrediction)?;
        Ok(prediction.emotion.into())
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_body_shape() {
        let request = EmotionPredictRequest::new("I love this new technology.");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"raw_document": {"text": "I love this new technology."}})
        );
    }

    #[test]
    fn decodes_first_prediction_and_ignores_extra_keys() {
        let body = json!({
            "emotionPredictions": [
                {
                    "emotion": {"anger": 0.1, "disgust": 0.2, "fear": 0.3, "joy": 0.4, "sadness": 0.5, "surprise": 0.9},
                    "target": "",
                    "emotionMentions": []
                },
                {
                    "emotion": {"anger": 0.9, "disgust": 0.0, "fear": 0.0, "joy": 0.0, "sadness": 0.0}
                }
            ],
            "producerId": {"name": "Ensemble Aggregated Emotion Workflow", "version": "0.0.1"}
        })
        .to_string();

        let scores = EmotionPredictResponse::from_body(&body).unwrap().into_scores().unwrap();
        assert_eq!(
            scores,
            EmotionScores { anger: 0.1, disgust: 0.2, fear: 0.3, joy: 0.4, sadness: 0.5 }
        );
    }

    #[test]
    fn missing_and_null_scores_default_to_zero() {
        let body = json!({"emotionPredictions": [{"emotion": {"joy": 0.7, "fear": null}}]}).to_string();
        let scores = EmotionPredictResponse::from_body(&body).unwrap().into_scores().unwrap();
        assert_eq!(scores, EmotionScores { joy: 0.7, ..Default::default() });
    }

    #[test]
    fn empty_predictions_is_missing_prediction() {
        let body = json!({"emotionPredictions": []}).to_string();
        let result = EmotionPredictResponse::from_body(&body).unwrap().into_scores();
        assert!(matches!(result, Err(DetectionError::MissingPrediction)));
    }

    #[test]
    fn wrong_shape_is_parse_error() {
        for body in [
            "not json at all",
            "{}",
            r#"{"emotionPredictions": [{}]}"#,
            r#"{"emotionPredictions": [{"emotion": {"joy": "high"}}]}"#,
        ] {
            let result = EmotionPredictResponse::from_body(body);
            assert!(matches!(result, Err(DetectionError::Parse(_))), "body: {}", body);
        }
    }
}
