//! Detect-intent request shapes.

use serde::{Deserialize, Serialize};

use super::audio::OutputAudioConfig;

/// Body of a `:detectIntent` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectIntentRequest {
    /// The parameters of this query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_params: Option<QueryParameters>,

    /// The input specification: an audio config, a text query, or an
    /// event to trigger.
    pub query_input: QueryInput,

    /// Instructs the speech synthesizer how to generate the output audio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_audio_config: Option<OutputAudioConfig>,

    /// Field mask limiting which `output_audio_config` settings override
    /// the agent-level synthesizer config. Empty replaces it entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_audio_config_mask: Option<String>,

    /// Base64-encoded speech audio; set iff `query_input` is an audio
    /// config. Up to one minute of audio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_audio: Option<String>,
}

impl DetectIntentRequest {
    pub fn new(query_input: QueryInput) -> Self {
        Self {
            query_params: None,
            query_input,
            output_audio_config: None,
            output_audio_config_mask: None,
            input_audio: None,
        }
    }

    /// A natural-language text query.
    pub fn text(text: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self::new(QueryInput::Text(TextInput {
            text: text.into(),
            language_code: language_code.into(),
        }))
    }

    /// An event trigger.
    pub fn event(name: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self::new(QueryInput::Event(EventInput {
            name: name.into(),
            parameters: None,
            language_code: language_code.into(),
        }))
    }
}

/// The input of a conversational query. Exactly one variant is encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryInput {
    /// Speech input; instructs the recognizer how to process the audio
    /// carried in `input_audio`.
    AudioConfig(InputAudioConfig),
    /// A natural-language text query.
    Text(TextInput),
    /// An event that specifies which intent to trigger.
    Event(EventInput),
}

/// Instructions for the speech recognizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputAudioConfig {}

/// A natural-language text query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInput {
    /// UTF-8 encoded text, at most 256 characters.
    pub text: String,
    /// Language of the query. Queries in one session may differ.
    pub language_code: String,
}

/// An event that triggers an intent directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    /// Unique identifier of the event.
    pub name: String,
    /// Parameters associated with the event. Arbitrary JSON object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
    /// Language of the query.
    pub language_code: String,
}

/// Optional parameters of a conversational query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParameters {
    /// IANA time zone of the query, e.g. `Europe/Paris`. Falls back to
    /// the agent setting when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// Geo location of the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_location: Option<LatLng>,

    /// Delete all contexts in the session before activating new ones.
    #[serde(default)]
    pub reset_contexts: bool,

    /// Custom data passed through to the webhook. Arbitrary JSON object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,

    /// Enables sentiment analysis when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_analysis_request_config: Option<SentimentAnalysisRequestConfig>,
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// Which sentiment analysis to perform on the query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysisRequestConfig {
    /// Analyze the sentiment of the query text.
    pub analyze_query_text_sentiment: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_request_wire_shape() {
        let request = DetectIntentRequest::text("book a table", "en");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "queryInput": {
                    "text": {"text": "book a table", "languageCode": "en"}
                }
            })
        );
    }

    #[test]
    fn test_event_request_wire_shape() {
        let mut request = DetectIntentRequest::event("WELCOME", "en");
        request.query_params = Some(QueryParameters {
            reset_contexts: true,
            ..QueryParameters::default()
        });
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "queryParams": {"resetContexts": true},
                "queryInput": {
                    "event": {"name": "WELCOME", "languageCode": "en"}
                }
            })
        );
    }

    #[test]
    fn test_query_input_decodes_from_tag() {
        let input: QueryInput =
            serde_json::from_str(r#"{"text": {"text": "hi", "languageCode": "en"}}"#).unwrap();
        match input {
            QueryInput::Text(text) => assert_eq!(text.text, "hi"),
            other => panic!("expected text input, got {:?}", other),
        }
    }
}
