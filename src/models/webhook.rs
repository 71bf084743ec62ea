//! Fulfillment webhook contract.
//!
//! Pure data: the remote service POSTs a [`WebhookRequest`] to the
//! configured fulfillment endpoint, which answers with a
//! [`WebhookResponse`]. No client behavior is attached.

use serde::{Deserialize, Serialize};

use super::context::Context;
use super::message::Message;
use super::request::EventInput;
use super::response::QueryResult;

/// Request delivered to the fulfillment endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    /// Identifier of the detect-intent response this request belongs to.
    pub response_id: String,

    /// The query result being fulfilled.
    pub query_result: QueryResult,

    /// Full session resource path.
    pub session: String,

    /// Metadata about the originating detect-intent request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_detect_intent_request: Option<OriginalDetectIntentRequest>,
}

/// The platform-specific request that started the conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginalDetectIntentRequest {
    /// Source platform identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// The platform's request payload. Arbitrary JSON object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

/// Response returned by the fulfillment endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    /// Rich messages shown to the end-user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_messages: Option<Vec<Message>>,

    /// Contexts to activate after the turn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_contexts: Option<Vec<Context>>,

    /// Event to trigger as a follow-up to this turn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followup_event_input: Option<EventInput>,
}

impl WebhookResponse {
    /// An empty response with a message list ready to append to.
    pub fn new() -> Self {
        Self {
            fulfillment_messages: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// A response carrying one text message.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::from_texts(vec![text.into()])
    }

    /// A response carrying one text message with multiple candidates.
    pub fn from_texts(texts: Vec<String>) -> Self {
        Self {
            fulfillment_messages: Some(vec![Message::texts(texts)]),
            ..Self::default()
        }
    }

    /// Append a fulfillment message.
    pub fn push_message(&mut self, message: Message) -> &mut Self {
        self.fulfillment_messages
            .get_or_insert_with(Vec::new)
            .push(message);
        self
    }

    /// Append a custom payload message.
    pub fn push_payload(&mut self, payload: serde_json::Value) -> &mut Self {
        self.push_message(Message::payload(payload))
    }

    /// Set the contexts activated after this turn.
    pub fn with_output_contexts(mut self, contexts: Vec<Context>) -> Self {
        self.output_contexts = Some(contexts);
        self
    }

    /// Set a follow-up event to trigger.
    pub fn with_followup_event(mut self, event: EventInput) -> Self {
        self.followup_event_input = Some(event);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_response_wire_shape() {
        let response = WebhookResponse::from_text("Done, table booked.");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fulfillmentMessages": [{"text": {"text": ["Done, table booked."]}}]
            })
        );
    }

    #[test]
    fn test_push_messages() {
        let mut response = WebhookResponse::new();
        response
            .push_message(Message::text("first"))
            .push_payload(serde_json::json!({"kind": "custom"}));

        let messages = response.fulfillment_messages.as_ref().unwrap();
        assert_eq!(messages.len(), 2);
        assert!(messages[1].as_payload().is_some());
    }

    #[test]
    fn test_request_decodes() {
        let body = serde_json::json!({
            "responseId": "r-1",
            "session": "projects/p/agent/sessions/s",
            "queryResult": {
                "queryText": "hi",
                "languageCode": "en",
                "intent": {"displayName": "greet"},
                "intentDetectionConfidence": 1.0
            },
            "originalDetectIntentRequest": {"source": "telegram"}
        });

        let request: WebhookRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.session, "projects/p/agent/sessions/s");
        assert_eq!(
            request.original_detect_intent_request.unwrap().source.as_deref(),
            Some("telegram")
        );
    }
}
