use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use lambda_http::tracing;

use emotion_detection::service::common_structs::EmotionResult;
use emotion_detection::service::CommonService;

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input! Please provide text for analysis.";
pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";

const TEXT_TO_ANALYZE: &str = "textToAnalyze";

const INDEX_HTML: &str = include_str!("../templates/index.html");


#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmotionDetectorParams {
    pub text_to_analyze: Option<String>,
}

// repeated keys are allowed, the first `textToAnalyze` wins
impl From<Vec<(String, String)>> for EmotionDetectorParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let text_to_analyze = pairs
            .into_iter()
            .find(|(key, _)| key == TEXT_TO_ANALYZE)
            .map(|(_, value)| value);
        Self { text_to_analyze }
    }
}


fn build_text_response(status: StatusCode, message: String) -> Response {
    let mut text_header = HeaderMap::new();
    text_header.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
    (status, text_header, message).into_response()
}

fn build_error_response(message: &str) -> Response {
    build_text_response(StatusCode::BAD_REQUEST, message.to_owned())
}

fn build_success_response(message: String) -> Response {
    build_text_response(StatusCode::OK, message)
}


/// Shortest round-trip form with a `.0` on whole numbers and a signed,
/// two digit exponent outside `[1e-4, 1e16)`, e.g. `0.95`, `0.0`, `1.2e-05`.
///
/// Scores arrive as `f64`, so an integer literal in the response (`0`)
/// prints as `0.0`.
pub fn format_score(score: f64) -> String {
    let debug = format!("{:?}", score);
    let Some((mantissa, exponent)) = debug.split_once('e') else {
        return debug;
    };
    match exponent.parse::<i32>() {
        Ok(exponent) => {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        },
        Err(_) => debug,
    }
}

/// Human readable summary, `None` when the result carries no dominant emotion.
pub fn format_emotion_result(result: &EmotionResult) -> Option<String> {
    let dominant_emotion = result.dominant_emotion?;
    Some(format!(
        "For the given statement, the system response is 'anger': {}, 'disgust': {}, 'fear': {}, 'joy': {}, and 'sadness': {}. The dominant emotion is {}.",
        format_score(result.anger.unwrap_or(0.0)),
        format_score(result.disgust.unwrap_or(0.0)),
        format_score(result.fear.unwrap_or(0.0)),
        format_score(result.joy.unwrap_or(0.0)),
        format_score(result.sadness.unwrap_or(0.0)),
        dominant_emotion
    ))
}


pub async fn emotion_detector(
    State(service): State<CommonService>,
    Query(pairs): Query<Vec<(String, String)>>
) -> Response {

    let params = EmotionDetectorParams::from(pairs);
    let Some(text_to_analyze) = params.text_to_analyze.filter(|text| !text.is_empty()) else {
        tracing::info!("emotionDetector called without textToAnalyze");
        return build_error_response(INVALID_INPUT_MESSAGE);
    };

    let result = service.emotion.detect_emotion(&text_to_analyze).await;

    match format_emotion_result(&result) {
        Some(response_string) => build_success_response(response_string),
        None => {
            tracing::info!("no dominant emotion for submitted text");
            build_error_response(INVALID_TEXT_MESSAGE)
        },
    }
}

pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}
