//! Handlers for `/notices` endpoints.
//!
//! | Method   | Path            | Notes |
//! |----------|-----------------|-------|
//! | `GET`    | `/notices`      | Newest first |
//! | `GET`    | `/notices/{id}` | 404 if not found |
//! | `POST`   | `/notices`      | Body: [`NoticeDraft`]; 201 + stored notice |
//! | `PATCH`  | `/notices/{id}` | Body: [`NoticePatch`] |
//! | `DELETE` | `/notices/{id}` | |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use tracing::info;
use tresbs_admin::AdminContext;
use tresbs_core::{
  id::today,
  notice::{Notice, NoticeDraft, NoticePatch},
  store::ContentStore,
};

use crate::{Changed, error::ApiError};

/// `GET /notices`
pub async fn list<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
) -> Result<Json<Vec<Notice>>, ApiError> {
  let notices = cx.store.list_notices().await.map_err(ApiError::store)?;
  Ok(Json(notices))
}

/// `GET /notices/{id}`
pub async fn get_one<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Path(id): Path<String>,
) -> Result<Json<Notice>, ApiError> {
  let notice = cx
    .store
    .get_notice(&id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("notice {id} not found")))?;
  Ok(Json(notice))
}

/// `POST /notices`
pub async fn create<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Json(draft): Json<NoticeDraft>,
) -> Result<impl IntoResponse, ApiError> {
  let notice = draft.into_notice(cx.ids.next_id(), today())?;
  cx.store.create_notice(notice.clone()).await.map_err(ApiError::store)?;
  info!(id = %notice.id, "created notice via api");
  Ok((StatusCode::CREATED, Json(notice)))
}

/// `PATCH /notices/{id}`
pub async fn update<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Path(id): Path<String>,
  Json(patch): Json<NoticePatch>,
) -> Result<Json<Changed<Notice>>, ApiError> {
  patch.validate()?;
  let updated = cx
    .store
    .update_notice(&id, patch)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(updated.into()))
}

/// `DELETE /notices/{id}`
pub async fn delete<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Path(id): Path<String>,
) -> Result<Json<Changed<Notice>>, ApiError> {
  let removed = cx.store.delete_notice(&id).await.map_err(ApiError::store)?;
  Ok(Json(removed.into()))
}
