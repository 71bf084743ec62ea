//! Rich response messages.

use serde::{Deserialize, Serialize};
use url::Url;

/// A rich response message, as configured in the agent console or
/// returned by a webhook.
///
/// The message body is a union: exactly one of the content fields is set.
/// Constructors enforce this; the fields themselves are read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Platform the message is intended for (`FACEBOOK`, `SLACK`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quick_replies: Option<QuickReplies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    simple_responses: Option<SimpleResponses>,
}

impl Message {
    /// A custom platform-specific payload message.
    pub fn payload(payload: serde_json::Value) -> Self {
        Self {
            payload: Some(payload),
            ..Self::default()
        }
    }

    /// A plain text message with a single candidate.
    pub fn text(text: impl Into<String>) -> Self {
        Self::texts(vec![text.into()])
    }

    /// A plain text message with multiple candidates.
    pub fn texts(texts: Vec<String>) -> Self {
        Self {
            text: Some(Text { text: Some(texts) }),
            ..Self::default()
        }
    }

    /// An image message.
    pub fn image(image: Image) -> Self {
        Self {
            image: Some(image),
            ..Self::default()
        }
    }

    /// A quick-replies message.
    pub fn quick_replies(quick_replies: QuickReplies) -> Self {
        Self {
            quick_replies: Some(quick_replies),
            ..Self::default()
        }
    }

    /// A card message.
    pub fn card(card: Card) -> Self {
        Self {
            card: Some(card),
            ..Self::default()
        }
    }

    /// Voice/text simple responses.
    pub fn simple_responses(simple_responses: SimpleResponses) -> Self {
        Self {
            simple_responses: Some(simple_responses),
            ..Self::default()
        }
    }

    /// Tag the message with a target platform.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn as_payload(&self) -> Option<&serde_json::Value> {
        self.payload.as_ref()
    }

    pub fn as_text(&self) -> Option<&Text> {
        self.text.as_ref()
    }

    pub fn as_image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    pub fn as_quick_replies(&self) -> Option<&QuickReplies> {
        self.quick_replies.as_ref()
    }

    pub fn as_card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    pub fn as_simple_responses(&self) -> Option<&SimpleResponses> {
        self.simple_responses.as_ref()
    }
}

/// The text response message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    /// The agent's response candidates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
}

/// The image response message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Public URI of the image file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<Url>,
    /// Description used by screen readers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_text: Option<String>,
}

/// The quick-replies response message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickReplies {
    /// Title shown above the replies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The reply choices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_replies: Option<Vec<String>>,
}

/// The card response message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Public URI of the card image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<CardButton>>,
}

/// A card button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardButton {
    /// Text shown on the button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Text sent back to the API, or a URI to open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postback: Option<String>,
}

/// The collection of simple response candidates. Fulfillment messages
/// should carry only one [`SimpleResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleResponses {
    pub simple_responses: Vec<SimpleResponse>,
}

/// A voice response with an optional display text.
///
/// Exactly one of `text_to_speech` or `ssml` must be provided.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleResponse {
    /// Plain text of the speech output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_to_speech: Option<String>,
    /// Structured spoken response in SSML format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssml: Option<String>,
    /// Text to display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_message_wire_shape() {
        let message = Message::text("hello");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json, serde_json::json!({"text": {"text": ["hello"]}}));
    }

    #[test]
    fn test_union_holds_one_variant() {
        let message = Message::card(Card {
            title: Some("Title".into()),
            subtitle: None,
            image_uri: None,
            buttons: None,
        })
        .with_platform("FACEBOOK");

        assert!(message.as_card().is_some());
        assert!(message.as_text().is_none());

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"platform": "FACEBOOK", "card": {"title": "Title"}})
        );
    }
}
