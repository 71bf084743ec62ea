//! Fluent detect-intent request builder.

use crate::error::Result;
use crate::models::audio::OutputAudioConfig;
use crate::models::request::{
    DetectIntentRequest, EventInput, InputAudioConfig, LatLng, QueryInput, QueryParameters,
    SentimentAnalysisRequestConfig, TextInput,
};
use crate::models::response::DetectIntentResponse;
use crate::models::session::SessionPath;

/// Builder for detect-intent requests.
///
/// ```rust,no_run
/// # use dialogflow_gateway::{DialogflowClient, SessionPath};
/// # async fn example(client: &DialogflowClient) -> dialogflow_gateway::Result<()> {
/// let response = client.detect_intent(SessionPath::new("my-project", "session-1"))
///     .text("what's on the menu?", "en")
///     .time_zone("Europe/Paris")
///     .send()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct DetectIntentRequestBuilder<'a> {
    client: &'a crate::client::DialogflowClient,
    session: SessionPath,
    request: DetectIntentRequest,
}

impl<'a> DetectIntentRequestBuilder<'a> {
    /// Create a new builder. The input defaults to an empty text query
    /// and should be set through one of the input methods.
    pub(crate) fn new(client: &'a crate::client::DialogflowClient, session: SessionPath) -> Self {
        Self {
            client,
            session,
            request: DetectIntentRequest::new(QueryInput::Text(TextInput {
                text: String::new(),
                language_code: String::new(),
            })),
        }
    }

    /// Use a natural-language text query as the input.
    pub fn text(mut self, text: impl Into<String>, language_code: impl Into<String>) -> Self {
        self.request.query_input = QueryInput::Text(TextInput {
            text: text.into(),
            language_code: language_code.into(),
        });
        self
    }

    /// Trigger an intent through a named event.
    pub fn event(mut self, name: impl Into<String>, language_code: impl Into<String>) -> Self {
        self.request.query_input = QueryInput::Event(EventInput {
            name: name.into(),
            parameters: None,
            language_code: language_code.into(),
        });
        self
    }

    /// Trigger an event carrying parameters.
    pub fn event_with_parameters(
        mut self,
        name: impl Into<String>,
        language_code: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        self.request.query_input = QueryInput::Event(EventInput {
            name: name.into(),
            parameters: Some(parameters),
            language_code: language_code.into(),
        });
        self
    }

    /// Send base64-encoded speech audio, processed per `config`.
    pub fn audio(mut self, config: InputAudioConfig, input_audio: impl Into<String>) -> Self {
        self.request.query_input = QueryInput::AudioConfig(config);
        self.request.input_audio = Some(input_audio.into());
        self
    }

    /// Set the full query parameters at once.
    pub fn query_params(mut self, params: QueryParameters) -> Self {
        self.request.query_params = Some(params);
        self
    }

    /// Set the IANA time zone of the query.
    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.params().time_zone = Some(time_zone.into());
        self
    }

    /// Set the geo location of the query.
    pub fn geo_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.params().geo_location = Some(LatLng { latitude, longitude });
        self
    }

    /// Delete all session contexts before activating new ones.
    pub fn reset_contexts(mut self) -> Self {
        self.params().reset_contexts = true;
        self
    }

    /// Pass custom data through to the webhook.
    pub fn payload(mut self, payload: serde_json::Value) -> Self {
        self.params().payload = Some(payload);
        self
    }

    /// Ask for sentiment analysis of the query text.
    pub fn analyze_sentiment(mut self) -> Self {
        self.params().sentiment_analysis_request_config = Some(SentimentAnalysisRequestConfig {
            analyze_query_text_sentiment: true,
        });
        self
    }

    /// Configure output audio synthesis.
    pub fn output_audio_config(mut self, config: OutputAudioConfig) -> Self {
        self.request.output_audio_config = Some(config);
        self
    }

    fn params(&mut self) -> &mut QueryParameters {
        self.request
            .query_params
            .get_or_insert_with(QueryParameters::default)
    }

    /// Send the request.
    pub async fn send(self) -> Result<DetectIntentResponse> {
        self.client
            .send_detect_intent(&self.session, self.request)
            .await
    }

    /// Get the built request and session without sending.
    pub fn build(self) -> (SessionPath, DetectIntentRequest) {
        (self.session, self.request)
    }
}
