//! HTTP networking module
//!
//! Provides HTTP client functionality for making requests to the LLM
//! provider and the internal search endpoint.

mod client;

pub use client::{HttpClient, ProviderResponse};
