//! `GET /previews/{id}`: bytes of a staged or committed upload.
//!
//! A released preview is gone for good and answers 404. Responses carry a
//! strong ETag over the content, and a matching `If-None-Match` gets 304.

use axum::{
  extract::{Path, State},
  http::{HeaderMap, HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use tresbs_core::store::ContentStore;
use uuid::Uuid;

use crate::{AppState, error::Error};

pub async fn serve<S: ContentStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
  headers: HeaderMap,
) -> Result<Response, Error> {
  let blob = state
    .admin
    .previews
    .get(id)
    .ok_or_else(|| Error::NotFound(format!("preview {id} not found")))?;

  let etag = HeaderValue::from_str(&blob.etag).map_err(Error::store)?;

  if headers
    .get(header::IF_NONE_MATCH)
    .and_then(|v| v.to_str().ok())
    .is_some_and(|v| matches_etag(v, &blob.etag))
  {
    return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
  }

  let content_type = HeaderValue::from_str(&blob.media_type)
    .unwrap_or(HeaderValue::from_static("application/octet-stream"));

  Ok(
    (
      [(header::CONTENT_TYPE, content_type), (header::ETAG, etag)],
      blob.bytes.clone(),
    )
      .into_response(),
  )
}

/// `If-None-Match` may list several tags, quoted or bare, or `*`.
fn matches_etag(header: &str, etag: &str) -> bool {
  let bare = etag.trim_matches('"');
  header.split(',').map(str::trim).any(|candidate| {
    candidate == "*"
      || candidate.trim_start_matches("W/").trim_matches('"') == bare
  })
}
