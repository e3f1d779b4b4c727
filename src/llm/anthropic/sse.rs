//! Server-Sent Events (SSE) parser for Anthropic responses
//!
//! The Messages API streams events as:
//! ```text
//! event: message_start
//! data: {"type":"message_start",...}
//!
//! event: content_block_delta
//! data: {"type":"content_block_delta",...}
//! ```
//!
//! This parser:
//! 1. Buffers incoming bytes
//! 2. Scans for event boundaries (blank line)
//! 3. Joins the `data:` lines of each event and parses them as JSON
//! 4. Returns a stream of parsed events

use bytes::Bytes;
use futures::stream::Stream;
use futures::StreamExt;
use std::pin::Pin;

use crate::llm::core::error::LlmError;

use super::types::AnthropicStreamEvent;

/// Parse a stream of bytes as Anthropic SSE events
pub fn parse_sse_stream(
    byte_stream: Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send + Sync>>,
) -> Pin<Box<dyn Stream<Item = Result<AnthropicStreamEvent, LlmError>> + Send + Sync>> {
    // Buffer to accumulate partial events
    let mut buffer = String::new();

    let event_stream = byte_stream.flat_map(move |chunk_result| {
        let chunk = match chunk_result {
            Ok(bytes) => bytes,
            Err(e) => {
                return futures::stream::iter(vec![Err(LlmError::StreamError(e.to_string()))]);
            }
        };

        let text = match std::str::from_utf8(&chunk) {
            Ok(t) => t,
            Err(e) => {
                return futures::stream::iter(vec![Err(LlmError::StreamError(format!(
                    "Invalid UTF-8 in stream: {}",
                    e
                )))]);
            }
        };

        buffer.push_str(text);

        // Process complete events (delimited by a blank line)
        let mut events = Vec::new();
        while let Some(event_end) = buffer.find("\n\n") {
            let event_text = buffer[..event_end].to_string();
            buffer.drain(..=event_end + 1);

            if let Some(parsed_event) = parse_event(&event_text) {
                events.push(parsed_event);
            }
        }

        futures::stream::iter(events)
    });

    Box::pin(event_stream)
}

/// Parse a single SSE event from its text representation
///
/// Returns `None` for events carrying no data (comments, bare event lines).
fn parse_event(event_text: &str) -> Option<Result<AnthropicStreamEvent, LlmError>> {
    let mut event_type: Option<String> = None;
    let mut data_lines: Vec<&str> = Vec::new();

    for line in event_text.lines() {
        // Comment line per the SSE spec
        if line.starts_with(':') {
            continue;
        }

        if let Some(type_val) = line.strip_prefix("event:") {
            event_type = Some(type_val.trim().to_string());
        }

        if let Some(data_val) = line.strip_prefix("data:") {
            data_lines.push(data_val.trim());
        }
    }

    if data_lines.is_empty() {
        return None;
    }

    // Multiple data: lines are joined with a newline per the SSE spec
    let data = data_lines.join("\n");
    if data.is_empty() {
        return None;
    }

    match serde_json::from_str::<AnthropicStreamEvent>(&data) {
        Ok(event) => Some(Ok(event)),
        Err(e) => Some(Err(LlmError::SerializationError(format!(
            "Failed to parse SSE event (type: {:?}): {}. Data: {}",
            event_type, e, data
        )))),
    }
}
