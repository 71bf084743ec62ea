//! HTTP transport with the auth coordinator attached.

pub mod http;

pub use http::HttpClient;
