//! # dialogflow-gateway
//!
//! Rust client library for the Dialogflow v2 REST API.
//!
//! Provides the detect-intent operation with transparent service-account
//! authentication, plus the webhook request/response shapes for building
//! fulfillment endpoints.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dialogflow_gateway::{DialogflowClient, SessionPath, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Build client from a service-account key file
//!     let client = DialogflowClient::builder()
//!         .credentials_file("~/.config/my-agent/service-account.json")
//!         .build()?;
//!
//!     // Detect the intent of a text query
//!     let response = client
//!         .detect_intent(SessionPath::new("my-project", "session-1"))
//!         .text("book a table for two", "en")
//!         .send()
//!         .await?;
//!
//!     if let Some(text) = response.query_result.fulfillment_text {
//!         println!("{}", text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! Requests carry a short-lived bearer token minted from the
//! service-account key through the OAuth 2.0 JWT-bearer grant. Tokens
//! are refreshed reactively: a 401 response triggers exactly one
//! exchange no matter how many requests are in flight, and every
//! affected request is replayed (or failed) together once it resolves.

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

// Re-exports for ergonomic usage
pub use client::{DialogflowClient, DialogflowClientBuilder};
pub use error::{Error, Result};
pub use models::auth::{BearerToken, ServiceAccountKey};
pub use models::context::Context;
pub use models::intent::Intent;
pub use models::message::Message;
pub use models::request::{DetectIntentRequest, EventInput, QueryInput, QueryParameters, TextInput};
pub use models::response::{DetectIntentResponse, QueryResult};
pub use models::session::SessionPath;
pub use models::webhook::{WebhookRequest, WebhookResponse};
