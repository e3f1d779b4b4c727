//! Mapping between abstraction types and Anthropic-specific types

use crate::llm::core::types::{
    FinishReason, GenerateRequest, Message, MessageMetadata, MessageRole, StreamEvent,
    UsageMetadata,
};

use super::types::{
    AnthropicContentDelta, AnthropicMessage, AnthropicStreamEvent, MessagesRequest,
};

/// Convert our abstraction request to the Messages API request format
pub fn to_messages_request(model: &str, request: GenerateRequest) -> MessagesRequest {
    MessagesRequest {
        model: model.to_string(),
        max_tokens: request.config.max_tokens,
        messages: request.messages.into_iter().map(to_anthropic_message).collect(),
        system: request.system,
        temperature: request.config.temperature,
        top_p: request.config.top_p,
        stop_sequences: request.config.stop_sequences,
        stream: true,
    }
}

fn to_anthropic_message(message: Message) -> AnthropicMessage {
    let role = match message.role {
        MessageRole::User => "user".to_string(),
        MessageRole::Assistant => "assistant".to_string(),
    };

    AnthropicMessage {
        role,
        content: message.text,
    }
}

/// Convert an Anthropic stream event to our abstraction's StreamEvent
///
/// Returns a vector because some wire events map to nothing (pings,
/// block boundaries) and usage accumulates across events.
pub fn from_anthropic_event(
    event: AnthropicStreamEvent,
    accumulated_usage: &mut UsageMetadata,
) -> Vec<StreamEvent> {
    match event {
        AnthropicStreamEvent::MessageStart { message } => {
            *accumulated_usage =
                UsageMetadata::new(message.usage.input_tokens, message.usage.output_tokens);

            vec![StreamEvent::MessageStart {
                message: MessageMetadata {
                    id: message.id,
                    role: MessageRole::Assistant,
                    usage: Some(*accumulated_usage),
                },
            }]
        }
        AnthropicStreamEvent::ContentBlockDelta { delta, .. } => match delta {
            AnthropicContentDelta::TextDelta { text } => vec![StreamEvent::TextDelta { text }],
            AnthropicContentDelta::Unknown => vec![],
        },
        AnthropicStreamEvent::MessageDelta { delta, usage } => {
            if let Some(usage) = usage {
                *accumulated_usage =
                    UsageMetadata::new(accumulated_usage.input_tokens, usage.output_tokens);
            }

            // A stop reason marks the final delta of the message
            if let Some(stop_reason) = delta.stop_reason {
                let finish_reason = match stop_reason.as_str() {
                    "end_turn" => FinishReason::EndTurn,
                    "max_tokens" => FinishReason::MaxTokens,
                    "stop_sequence" => FinishReason::StopSequence,
                    other => FinishReason::Other(other.to_string()),
                };

                vec![StreamEvent::MessageEnd {
                    finish_reason,
                    usage: *accumulated_usage,
                }]
            } else {
                vec![]
            }
        }
        AnthropicStreamEvent::Error { error } => {
            vec![StreamEvent::Error {
                error: format!("{}: {}", error.error_type, error.message),
            }]
        }
        // message_stop follows the final message_delta; block boundaries and
        // pings carry nothing the relay forwards
        AnthropicStreamEvent::ContentBlockStart { .. }
        | AnthropicStreamEvent::ContentBlockStop { .. }
        | AnthropicStreamEvent::MessageStop
        | AnthropicStreamEvent::Ping
        | AnthropicStreamEvent::Unknown => vec![],
    }
}
