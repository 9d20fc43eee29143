use std::fmt;

use serde::{Deserialize, Serialize};


/// The five tracked emotion categories.
///
/// The declaration order is the tie-break order used when picking the
/// dominant emotion.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


/// Scores of a successful analysis. Missing scores have already been
/// defaulted to zero.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    pub fn score(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    pub fn is_all_zero(&self) -> bool {
        Emotion::ALL.iter().all(|emotion| self.score(*emotion) == 0.0)
    }

    /// Highest scoring emotion. On ties the earliest in [`Emotion::ALL`] wins.
    pub fn dominant_emotion(&self) -> Emotion {
        let mut dominant = Emotion::ALL[0];
        for emotion in Emotion::ALL.into_iter().skip(1) {
            if self.score(emotion) > self.score(dominant) {
                dominant = emotion;
            }
        }
        dominant
    }
}


/// Per-call summary handed to the front door.
///
/// `dominant_emotion` is `None` exactly when every score is `None`, which is
/// the only failure signal this type carries.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct EmotionResult {
    pub anger: Option<f64>,
    pub disgust: Option<f64>,
    pub fear: Option<f64>,
    pub joy: Option<f64>,
    pub sadness: Option<f64>,
    pub dominant_emotion: Option<Emotion>,
}

impl EmotionResult {
    pub fn invalid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.dominant_emotion.is_some()
    }
}

impl From<EmotionScores> for EmotionResult {
    fn from(scores: EmotionScores) -> Self {
        Self {
            anger: Some(scores.anger),
            disgust: Some(scores.disgust),
            fear: Some(scores.fear),
            joy: Some(scores.joy),
            sadness: Some(scores.sadness),
            dominant_emotion: Some(scores.dominant_emotion()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn scores(anger: f64, disgust: f64, fear: f64, joy: f64, sadness: f64) -> EmotionScores {
        EmotionScores { anger, disgust, fear, joy, sadness }
    }

    #[test]
    fn dominant_is_highest_score() {
        assert_eq!(scores(0.01, 0.01, 0.01, 0.95, 0.01).dominant_emotion(), Emotion::Joy);
        assert_eq!(scores(0.2, 0.1, 0.7, 0.3, 0.69).dominant_emotion(), Emotion::Fear);
        assert_eq!(scores(0.0, 0.0, 0.0, 0.0, 0.4).dominant_emotion(), Emotion::Sadness);
    }

    #[test]
    fn dominant_tie_keeps_earliest_emotion() {
        assert_eq!(scores(0.5, 0.5, 0.1, 0.1, 0.1).dominant_emotion(), Emotion::Anger);
        assert_eq!(scores(0.1, 0.2, 0.1, 0.6, 0.6).dominant_emotion(), Emotion::Joy);
        assert_eq!(scores(0.3, 0.3, 0.3, 0.3, 0.3).dominant_emotion(), Emotion::Anger);
    }

    #[test]
    fn all_zero_detection() {
        assert!(EmotionScores::default().is_all_zero());
        assert!(!scores(0.0, 0.0, 0.0, 0.0, 0.001).is_all_zero());
        assert!(!scores(-0.1, 0.0, 0.0, 0.0, 0.0).is_all_zero());
    }

    #[test]
    fn result_from_scores_is_fully_populated() {
        let result = EmotionResult::from(scores(0.1, 0.2, 0.3, 0.9, 0.4));
        assert!(result.is_valid());
        assert_eq!(result.anger, Some(0.1));
        assert_eq!(result.joy, Some(0.9));
        assert_eq!(result.sadness, Some(0.4));
        assert_eq!(result.dominant_emotion, Some(Emotion::Joy));
    }

    #[test]
    fn invalid_result_is_all_null() {
        let result = EmotionResult::invalid();
        assert!(!result.is_valid());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({
                "anger": null,
                "disgust": null,
                "fear": null,
                "joy": null,
                "sadness": null,
                "dominant_emotion": null
            })
        );
    }

    #[test]
    fn emotion_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Emotion::Sadness).unwrap(), "\"sadness\"");
        assert_eq!(Emotion::Disgust.to_string(), "disgust");
    }
}
