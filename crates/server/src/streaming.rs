//! Newline-delimited JSON bodies for record listings.

use axum::body::{Body, Bytes};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use futures::{future, StreamExt};
use serde::Serialize;
use serde_json::json;
use service::stream::RecordStream;
use service::ServiceError;
use tracing::warn;

pub const NDJSON: &str = "application/x-ndjson";

/// One JSON document per line. A failed item ends the body with a final
/// `{"error":{..}}` line; records already written stay sent.
pub fn ndjson<T>(records: RecordStream<T>) -> Response
where
    T: Serialize + Send + 'static,
{
    let lines = records
        .scan(false, |failed, item| {
            if *failed {
                return future::ready(None);
            }
            *failed = item.is_err();
            future::ready(Some(item))
        })
        .map(encode_line);
    ([(header::CONTENT_TYPE, NDJSON)], Body::from_stream(lines)).into_response()
}

fn encode_line<T: Serialize>(item: Result<T, ServiceError>) -> Result<Bytes, serde_json::Error> {
    let mut line = match item {
        Ok(record) => serde_json::to_vec(&record)?,
        Err(e) => {
            warn!(code = e.code(), error = %e, "listing terminated");
            serde_json::to_vec(&json!({ "error": { "code": e.code(), "message": e.to_string() } }))?
        }
    };
    line.push(b'\n');
    Ok(Bytes::from(line))
}
