// ABOUTME: Handlers for /log: append a record on POST, stream the whole log on GET.
// ABOUTME: Any other method on the route is answered with 405.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use futures::TryStreamExt;
use tokio_util::io::ReaderStream;

use crate::app_state::SharedState;
use crate::error::LogError;

/// POST /log - Append the request body as one record.
pub async fn append_record(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, LogError> {
    let body = body.map_err(LogError::UnreadableBody)?;
    let record = state.store.append(&body).await?;
    tracing::debug!("appended record of {} bytes", record.as_bytes().len());

    Ok((StatusCode::CREATED, "OK"))
}

/// GET /log - Stream the current log as plain text. A log that has never
/// been written to is returned as an empty body.
pub async fn read_log(State(state): State<SharedState>) -> Result<Response, LogError> {
    let body = match state.store.open_reader().await? {
        Some(file) => {
            let path = state.store.path().to_path_buf();
            // Headers are already sent once streaming starts, so a read
            // failure can only be logged.
            let stream = ReaderStream::new(file).inspect_err(move |e| {
                tracing::error!("failed to stream log file {}: {}", path.display(), e);
            });
            Body::from_stream(stream)
        }
        None => Body::empty(),
    };

    Ok(([(header::CONTENT_TYPE, "text/plain")], body).into_response())
}

/// Fallback for every method on /log other than GET, HEAD and POST.
pub async fn method_not_allowed() -> LogError {
    LogError::MethodNotAllowed
}
