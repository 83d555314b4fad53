//! Event stream handler
//!
//! Exposes the store's broadcast channel as server-sent events. Each SSE
//! message names the ledger event type and carries the event as JSON, in
//! the order the store committed them.

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};

use crate::AppState;

/// Streams ledger events to the caller as they are committed
pub async fn event_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = state.store.subscribe();

    let stream = BroadcastStream::new(receiver).filter_map(|item| {
        let event = match item {
            Ok(event) => event,
            // A slow subscriber skips what it missed and stays connected.
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event stream subscriber lagged");
                return None;
            }
        };
        Event::default()
            .event(event.event_type())
            .json_data(&event)
            .ok()
            .map(Ok)
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
