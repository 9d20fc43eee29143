pub static EMOTION_PREDICT_URL: &str = "EMOTION_PREDICT_URL";
pub static EMOTION_MODEL_ID: &str = "EMOTION_MODEL_ID";

pub static SERVER_HOST: &str = "SERVER_HOST";
pub static SERVER_PORT: &str = "SERVER_PORT";

// set by the Lambda runtime, absent when running locally
pub static AWS_LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";


pub const DEFAULT_EMOTION_PREDICT_URL: &str = "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";
pub const DEFAULT_EMOTION_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 5000;
