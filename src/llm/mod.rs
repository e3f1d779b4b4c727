//! LLM Abstraction Layer
//!
//! This module provides a streaming interface to the completion provider
//! behind the relay. The only implementation is the Anthropic Messages API
//! client, but the provider trait keeps the HTTP layer decoupled from it.

pub mod anthropic;
pub mod core;

// Re-export commonly used types
pub use core::{
    config::GenerationConfig,
    error::LlmError,
    provider::{EventStream, LlmProvider},
    types::{FinishReason, GenerateRequest, Message, MessageRole, StreamEvent, UsageMetadata},
};
