//! Client for the hosted text/image generation endpoint plus the named
//! prompt flows built on top of it.
//!
//! Each flow pairs a fixed input shape, a fixed output shape, and a prompt
//! template. Flows are stateless per call: conversation history is passed
//! in by the caller on every request, and nothing is retried.

pub mod client;
pub mod error;
pub mod flows;

pub use client::{GeminiClient, GenerateRequest, GenerateResponse, TextGenerator};
pub use error::GenAiError;
