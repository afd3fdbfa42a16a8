//! Handlers for `/gallery` endpoints.
//!
//! | Method   | Path            | Notes |
//! |----------|-----------------|-------|
//! | `GET`    | `/gallery`      | Optional `?category=` filter |
//! | `GET`    | `/gallery/{id}` | 404 if not found |
//! | `POST`   | `/gallery`      | Body: [`NewGalleryImage`]; 201 + stored image |
//! | `PATCH`  | `/gallery/{id}` | Body: [`GalleryImagePatch`] |
//! | `DELETE` | `/gallery/{id}` | Releases the image's preview, if any |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use tresbs_admin::{AdminContext, gallery as admin_gallery};
use tresbs_core::{
  gallery::{GalleryImage, GalleryImagePatch, NewGalleryImage},
  store::ContentStore,
};

use crate::{Changed, error::ApiError};

// ─── List ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub category: Option<String>,
}

/// `GET /gallery[?category=<name>]`
pub async fn list<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<GalleryImage>>, ApiError> {
  let mut images = cx.store.list_images().await.map_err(ApiError::store)?;
  if let Some(category) = &params.category {
    images.retain(|i| i.category.as_deref() == Some(category.as_str()));
  }
  Ok(Json(images))
}

// ─── Single image ────────────────────────────────────────────────────────────

/// `GET /gallery/{id}`
pub async fn get_one<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Path(id): Path<String>,
) -> Result<Json<GalleryImage>, ApiError> {
  let image = cx
    .store
    .get_image(&id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("gallery image {id} not found")))?;
  Ok(Json(image))
}

/// `POST /gallery`
pub async fn create<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Json(new): Json<NewGalleryImage>,
) -> Result<impl IntoResponse, ApiError> {
  let image = admin_gallery::add_image_by_url(&*cx.store, &cx.ids, new).await?;
  Ok((StatusCode::CREATED, Json(image)))
}

/// `PATCH /gallery/{id}`
pub async fn update<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Path(id): Path<String>,
  Json(patch): Json<GalleryImagePatch>,
) -> Result<Json<Changed<GalleryImage>>, ApiError> {
  patch.validate()?;
  let updated = cx.store.update_image(&id, patch).await.map_err(ApiError::store)?;
  Ok(Json(updated.into()))
}

/// `DELETE /gallery/{id}`
pub async fn delete<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Path(id): Path<String>,
) -> Result<Json<Changed<GalleryImage>>, ApiError> {
  let removed = admin_gallery::delete_image(&*cx.store, &cx.previews, &id).await?;
  Ok(Json(removed.into()))
}
