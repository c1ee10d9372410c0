//! HTTP client module
//!
//! Provides the `Transport` seam and its reqwest-backed implementation.
//!
//! # Features
//!
//! - **Single attempt**: every request is sent once; failures propagate
//! - **Authentication**: the API key is applied by the auth module
//! - **JSON decoding**: bodies are decoded to `serde_json::Value`, typed
//!   decoding is left to the caller

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, Transport};

#[cfg(test)]
mod tests;
