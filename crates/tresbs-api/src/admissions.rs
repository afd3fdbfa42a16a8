//! Handlers for `/admissions` endpoints (admin only).

use axum::{
  Json,
  extract::{Path, Query, State},
};
use serde::Deserialize;
use tresbs_admin::{AdminContext, inbox};
use tresbs_core::{
  admission::{AdmissionInquiry, AdmissionPatch, AdmissionStatus},
  store::ContentStore,
};

use crate::{Changed, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub status: Option<AdmissionStatus>,
}

/// `GET /admissions[?status=pending|reviewed|approved|rejected]`
pub async fn list<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<AdmissionInquiry>>, ApiError> {
  let mut inquiries = cx.store.list_admissions().await.map_err(ApiError::store)?;
  if let Some(status) = params.status {
    inquiries.retain(|a| a.status == status);
  }
  Ok(Json(inquiries))
}

/// `GET /admissions/{id}`
pub async fn get_one<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Path(id): Path<String>,
) -> Result<Json<AdmissionInquiry>, ApiError> {
  let inquiry = cx
    .store
    .get_admission(&id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("admission {id} not found")))?;
  Ok(Json(inquiry))
}

/// `PATCH /admissions/{id}`, body `{"status":"approved"}`
pub async fn update<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Path(id): Path<String>,
  Json(patch): Json<AdmissionPatch>,
) -> Result<Json<Changed<AdmissionInquiry>>, ApiError> {
  let updated = match patch.status {
    Some(status) => inbox::set_admission_status(&*cx.store, &id, status).await?,
    None => cx.store.get_admission(&id).await.map_err(ApiError::store)?,
  };
  Ok(Json(updated.into()))
}

/// `DELETE /admissions/{id}`
pub async fn delete<S: ContentStore>(
  State(cx): State<AdminContext<S>>,
  Path(id): Path<String>,
) -> Result<Json<Changed<AdmissionInquiry>>, ApiError> {
  Ok(Json(inbox::delete_admission(&*cx.store, &id).await?.into()))
}
