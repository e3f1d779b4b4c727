// POST /api/consultation handler

use crate::llm::{GenerateRequest, GenerationConfig, LlmError, Message, StreamEvent};
use crate::models::ConsultationRequest;
use crate::routes::{AppState, InvalidPrompt, UpstreamUnavailable};
use crate::sse::{create_done_event, create_error_event, create_text_event, fragment_lines};
use async_stream::stream;
use futures::stream::Stream;
use futures_util::StreamExt;
use pin_utils::pin_mut;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;
use warp::sse::Event;

pub async fn consultation_handler(
    state: Arc<AppState>,
    request: ConsultationRequest,
) -> Result<impl warp::Reply, warp::Rejection> {
    let prompt = request.prompt.trim().to_string();
    if prompt.is_empty() {
        return Err(warp::reject::custom(InvalidPrompt));
    }

    let consultation_id = Uuid::new_v4();
    info!(%consultation_id, prompt_chars = prompt.len(), "consultation request");

    let generate = GenerateRequest {
        messages: vec![Message::user(prompt)],
        config: GenerationConfig::new(state.config.max_tokens),
        system: state.config.system_prompt.clone(),
    };

    // Upstream failure before the stream opens surfaces as a non-success
    // status; there is no retry.
    let upstream = state
        .provider
        .stream_generate(generate)
        .await
        .map_err(|e| {
            warn!(%consultation_id, error = %e, "upstream call failed");
            warp::reject::custom(UpstreamUnavailable)
        })?;

    let events = relay_stream(upstream, consultation_id);
    Ok(warp::sse::reply(warp::sse::keep_alive().stream(events)))
}

/// Forward upstream events to the client as SSE events.
///
/// Each text fragment is forwarded verbatim, split on line boundaries. The
/// stream ends with a `done` event on completion or an `error` event on
/// upstream failure; either way the connection closes afterwards.
fn relay_stream(
    upstream: impl Stream<Item = Result<StreamEvent, LlmError>> + Send + Sync + 'static,
    consultation_id: Uuid,
) -> impl Stream<Item = Result<Event, Infallible>> + Send + Sync + 'static {
    stream! {
        pin_mut!(upstream);

        while let Some(event) = upstream.next().await {
            match event {
                Ok(StreamEvent::MessageStart { message }) => {
                    debug!(%consultation_id, upstream_id = %message.id, "upstream stream opened");
                }
                Ok(StreamEvent::TextDelta { text }) => {
                    for line in fragment_lines(&text) {
                        yield create_text_event(line);
                    }
                }
                Ok(StreamEvent::MessageEnd { finish_reason, usage }) => {
                    info!(
                        %consultation_id,
                        ?finish_reason,
                        output_tokens = usage.output_tokens,
                        "consultation complete"
                    );
                    yield create_done_event();
                    return;
                }
                Ok(StreamEvent::Error { error }) => {
                    warn!(%consultation_id, error, "upstream reported an error");
                    yield create_error_event();
                    return;
                }
                Err(e) => {
                    warn!(%consultation_id, error = %e, "upstream stream failed");
                    yield create_error_event();
                    return;
                }
            }
        }

        // Upstream closed without a terminal event; treat as complete
        yield create_done_event();
    }
}
