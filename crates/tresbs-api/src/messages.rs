//! Handlers for `/messages` endpoints (admin only).
//!
//! | Method   | Path                         | Notes |
//! |----------|------------------------------|-------|
//! | `GET`    | `/messages`                  | Optional `?unread=true` |
//! | `GET`    | `/messages/{id}`             | 404 if not found |
//! | `PATCH`  | `/messages/{id}`             | Body: [`MessagePatch`] |
//! | `POST`   | `/messages/{id}/toggle-read` | Flips `is_read` |
//! | `DELETE` | `/messages/{id}`             | |

use axum::{
  Json,
  extract::{Path, Query, State},
};
use serde::Deserialize;
use tresbs_admin::{AdminContext, inbox};
use tresbs_core::{
  message::{ContactMessage, MessagePatch},
  store::ContentStore,
};

use crate::{Changed, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct ListParams {
  #[serde(default)]
  pub unread: bool,
}

/// `GET /messages[?unread=true]`
pub async fn list<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
  let mut messages = cx.store.list_messages().await.map_err(ApiError::store)?;
  if params.unread {
    messages.retain(|m| !m.is_read);
  }
  Ok(Json(messages))
}

/// `GET /messages/{id}`
pub async fn get_one<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Path(id): Path<String>,
) -> Result<Json<ContactMessage>, ApiError> {
  let message = cx
    .store
    .get_message(&id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("message {id} not found")))?;
  Ok(Json(message))
}

/// `PATCH /messages/{id}`
pub async fn update<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Path(id): Path<String>,
  Json(patch): Json<MessagePatch>,
) -> Result<Json<Changed<ContactMessage>>, ApiError> {
  let updated = cx.store.update_message(&id, patch).await.map_err(ApiError::store)?;
  Ok(Json(updated.into()))
}

/// `POST /messages/{id}/toggle-read`
pub async fn toggle_read<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Path(id): Path<String>,
) -> Result<Json<Changed<ContactMessage>>, ApiError> {
  Ok(Json(inbox::toggle_read(&*cx.store, &id).await?.into()))
}

/// `DELETE /messages/{id}`
pub async fn delete<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Path(id): Path<String>,
) -> Result<Json<Changed<ContactMessage>>, ApiError> {
  Ok(Json(inbox::delete_message(&*cx.store, &id).await?.into()))
}
