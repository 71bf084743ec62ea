//! Detect-intent response shapes.

use serde::{Deserialize, Serialize};

use super::audio::OutputAudioConfig;
use super::context::Context;
use super::intent::Intent;
use super::message::Message;

/// Body of a `:detectIntent` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectIntentResponse {
    /// Unique identifier of the response; useful for locating a response
    /// in the training example set or for reporting issues.
    pub response_id: String,

    /// The selected result of the query or event processing.
    pub query_result: QueryResult,

    /// Base64-encoded audio, generated from the default platform text
    /// responses of the query result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_audio: Option<String>,

    /// The config used by the speech synthesizer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_audio_config: Option<OutputAudioConfig>,
}

/// The result of a conversational query or event processing.
///
/// Also embedded verbatim in webhook requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// The query text: the input copy, the speech recognition result, or
    /// the spell-corrected input.
    pub query_text: String,

    /// Language that was triggered during intent detection.
    pub language_code: String,

    /// Speech recognition confidence in `[0.0, 1.0]`; 0.0 is a sentinel
    /// for "not set".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_recognition_confidence: Option<f32>,

    /// Action name from the matched intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Extracted parameters. Arbitrary JSON object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,

    /// False while the matched intent still has required parameters with
    /// no collected value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_required_params_present: Option<bool>,

    /// Legacy single-text fulfillment; `fulfillment_messages` is preferred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_text: Option<String>,

    /// Rich messages to present to the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_messages: Option<Vec<Message>>,

    /// `source` field of the webhook response, when a webhook fulfilled
    /// the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_source: Option<String>,

    /// `payload` field of the webhook response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_payload: Option<serde_json::Value>,

    /// Output contexts; parameters may carry `<name>.original` entries
    /// with pre-query values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_contexts: Option<Vec<Context>>,

    /// The matched intent. Only some fields are populated.
    pub intent: Intent,

    /// Intent detection confidence in `[0.0, 1.0]`; informational only
    /// and subject to change across model retrainings.
    pub intent_detection_confidence: f32,

    /// Free-form diagnostic information; structure not guaranteed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic_info: Option<serde_json::Value>,

    /// Present when the request asked for sentiment analysis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_analysis_result: Option<SentimentAnalysisResult>,
}

/// Result of sentiment analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysisResult {
    /// Sentiment of the query text.
    pub query_text_sentiment: Sentiment,
}

/// Sentiment of one unit of analysis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sentiment {
    /// `[-1.0, 1.0]`, negative to positive.
    pub score: f32,
    /// Absolute magnitude of sentiment, `[0, +inf)`.
    pub magnitude: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_decodes() {
        let body = serde_json::json!({
            "responseId": "r-1",
            "queryResult": {
                "queryText": "book a table",
                "languageCode": "en",
                "action": "table.book",
                "fulfillmentText": "For how many people?",
                "fulfillmentMessages": [{"text": {"text": ["For how many people?"]}}],
                "intent": {
                    "name": "projects/p/agent/intents/42",
                    "displayName": "book.table"
                },
                "intentDetectionConfidence": 0.87
            }
        });

        let response: DetectIntentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.response_id, "r-1");
        assert_eq!(response.query_result.intent.display_name, "book.table");
        assert!(response.query_result.sentiment_analysis_result.is_none());
        let messages = response.query_result.fulfillment_messages.unwrap();
        assert_eq!(
            messages[0].as_text().unwrap().text.as_deref(),
            Some(&["For how many people?".to_string()][..])
        );
    }
}
