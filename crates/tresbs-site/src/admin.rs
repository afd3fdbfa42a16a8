//! The session-based admin screen.
//!
//! Every route except `POST /admin/login` takes an [`AdminAuth`], so it
//! answers 401 without a live token. Operations on absent ids or staged
//! indices are no-ops reported as `{"changed": false}`.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use tresbs_admin::{
  AdminSession, AdminTab, gallery, inbox,
  session::TabCounts,
  stager::{SelectedFile, StagedView},
};
use tresbs_api::Changed;
use tresbs_core::{
  admission::{AdmissionInquiry, AdmissionStatus},
  gallery::{GalleryImage, NewGalleryImage},
  message::ContactMessage,
  notice::{Notice, NoticeDraft, NoticePatch},
  store::ContentStore,
};
use uuid::Uuid;

use crate::{AppState, auth::AdminAuth, error::Error};

fn changed(flag: bool) -> Json<Changed<()>> {
  Json(Changed { changed: flag, item: None })
}

// ─── Session ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
  #[serde(default)]
  pub username: String,
  #[serde(default)]
  pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
  pub token: Uuid,
}

/// `POST /admin/login`
pub async fn login<S: ContentStore>(
  State(state): State<AppState<S>>,
  Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, Error> {
  let mut session = AdminSession::default();
  session.login(&*state.auth, &req.username, &req.password)?;
  let token = state.sessions.open(session);
  Ok(Json(LoginResponse { token }))
}

/// `POST /admin/logout`
pub async fn logout<S: ContentStore>(
  State(state): State<AppState<S>>,
  auth: AdminAuth,
) -> StatusCode {
  state.sessions.close(auth.token);
  auth.session.lock().await.logout();
  StatusCode::NO_CONTENT
}

#[derive(Debug, Serialize)]
pub struct SessionView {
  pub user:       Option<String>,
  pub active_tab: AdminTab,
  pub counts:     TabCounts,
}

/// `GET /admin/session`
pub async fn session<S: ContentStore>(
  State(state): State<AppState<S>>,
  auth: AdminAuth,
) -> Result<Json<SessionView>, Error> {
  let session = auth.session.lock().await;
  let counts = session.tab_counts(&*state.admin.store).await?;
  Ok(Json(SessionView {
    user: session.user().map(str::to_owned),
    active_tab: session.active_tab(),
    counts,
  }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TabRequest {
  pub tab: AdminTab,
}

/// `PUT /admin/tab`
pub async fn select_tab<S: ContentStore>(
  auth: AdminAuth,
  Json(req): Json<TabRequest>,
) -> Json<TabRequest> {
  auth.session.lock().await.select_tab(req.tab);
  Json(req)
}

// ─── Notice editor ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct EditorState {
  pub draft:   Option<NoticeDraft>,
  pub editing: Option<Notice>,
}

/// `GET /admin/editor`
pub async fn editor_state<S: ContentStore>(auth: AdminAuth) -> Json<EditorState> {
  let session = auth.session.lock().await;
  Json(EditorState {
    draft:   session.editor.draft().cloned(),
    editing: session.editor.editing().cloned(),
  })
}

/// `POST /admin/editor/draft`
pub async fn open_draft<S: ContentStore>(auth: AdminAuth) -> Json<NoticeDraft> {
  Json(auth.session.lock().await.editor.open_draft().clone())
}

/// `PUT /admin/editor/draft`
pub async fn save_draft<S: ContentStore>(
  auth: AdminAuth,
  Json(draft): Json<NoticeDraft>,
) -> Json<NoticeDraft> {
  Json(auth.session.lock().await.editor.save_draft(draft).clone())
}

/// `POST /admin/editor/draft/submit`: add the stored draft as a notice.
pub async fn submit_draft<S: ContentStore>(
  State(state): State<AppState<S>>,
  auth: AdminAuth,
) -> Result<(StatusCode, Json<Notice>), Error> {
  let mut session = auth.session.lock().await;
  let notice = session
    .editor
    .submit_draft(&*state.admin.store, &state.admin.ids)
    .await?;
  Ok((StatusCode::CREATED, Json(notice)))
}

/// `DELETE /admin/editor/draft`
pub async fn close_draft<S: ContentStore>(auth: AdminAuth) -> StatusCode {
  auth.session.lock().await.editor.close_draft();
  StatusCode::NO_CONTENT
}

/// `POST /admin/notices`: add a notice from the draft in the body. Closes the
/// stored draft on success, like [`submit_draft`].
pub async fn add_notice<S: ContentStore>(
  State(state): State<AppState<S>>,
  auth: AdminAuth,
  Json(draft): Json<NoticeDraft>,
) -> Result<(StatusCode, Json<Notice>), Error> {
  let mut session = auth.session.lock().await;
  let notice = session
    .editor
    .add_notice(&*state.admin.store, &state.admin.ids, draft)
    .await?;
  Ok((StatusCode::CREATED, Json(notice)))
}

/// `POST /admin/editor/edit/{id}`
pub async fn begin_edit<S: ContentStore>(
  State(state): State<AppState<S>>,
  auth: AdminAuth,
  Path(id): Path<String>,
) -> Result<Json<Changed<Notice>>, Error> {
  let mut session = auth.session.lock().await;
  let editing = session.editor.begin_edit(&*state.admin.store, &id).await?;
  Ok(Json(editing.cloned().into()))
}

/// `PUT /admin/editor/edit`
pub async fn update_notice<S: ContentStore>(
  State(state): State<AppState<S>>,
  auth: AdminAuth,
  Json(changes): Json<NoticePatch>,
) -> Result<Json<Changed<Notice>>, Error> {
  let mut session = auth.session.lock().await;
  let updated = session
    .editor
    .update_notice(&*state.admin.store, changes)
    .await?;
  Ok(Json(updated.into()))
}

/// `DELETE /admin/editor/edit`
pub async fn cancel_edit<S: ContentStore>(auth: AdminAuth) -> StatusCode {
  auth.session.lock().await.editor.cancel_edit();
  StatusCode::NO_CONTENT
}

/// `DELETE /admin/notices/{id}`
pub async fn delete_notice<S: ContentStore>(
  State(state): State<AppState<S>>,
  auth: AdminAuth,
  Path(id): Path<String>,
) -> Result<Json<Changed<Notice>>, Error> {
  let mut session = auth.session.lock().await;
  let removed = session.editor.delete_notice(&*state.admin.store, &id).await?;
  Ok(Json(removed.into()))
}

// ─── Gallery stager ──────────────────────────────────────────────────────────

/// One uploaded file, base64-encoded.
#[derive(Debug, Deserialize)]
pub struct UploadFile {
  pub file_name:  String,
  #[serde(default = "default_media_type")]
  pub media_type: String,
  pub data:       String,
}

fn default_media_type() -> String { "application/octet-stream".to_string() }

#[derive(Debug, Deserialize)]
pub struct StageRequest {
  pub files: Vec<UploadFile>,
}

#[derive(Debug, Serialize)]
pub struct StagedList {
  pub staged:  usize,
  pub pending: Vec<StagedView>,
}

/// `GET /admin/stager`
pub async fn staged<S: ContentStore>(auth: AdminAuth) -> Json<Vec<StagedView>> {
  Json(auth.session.lock().await.stager.views())
}

/// `POST /admin/stager`
///
/// Decodes every file before staging any, so a bad payload stages nothing.
pub async fn stage_files<S: ContentStore>(
  State(state): State<AppState<S>>,
  auth: AdminAuth,
  Json(req): Json<StageRequest>,
) -> Result<Json<StagedList>, Error> {
  let files = req
    .files
    .into_iter()
    .map(|f| {
      let bytes = STANDARD.decode(f.data.as_bytes()).map_err(|e| {
        Error::BadRequest(format!("{}: invalid base64: {e}", f.file_name))
      })?;
      Ok(SelectedFile {
        file_name:  f.file_name,
        media_type: f.media_type,
        bytes:      bytes.into(),
      })
    })
    .collect::<Result<Vec<_>, Error>>()?;

  let mut session = auth.session.lock().await;
  let staged = session.stager.stage_files(&state.admin.previews, files);
  Ok(Json(StagedList { staged, pending: session.stager.views() }))
}

#[derive(Debug, Deserialize)]
pub struct CaptionRequest {
  pub caption: String,
}

/// `PUT /admin/stager/{index}`
pub async fn update_caption<S: ContentStore>(
  auth: AdminAuth,
  Path(index): Path<usize>,
  Json(req): Json<CaptionRequest>,
) -> Json<Changed<()>> {
  changed(auth.session.lock().await.stager.update_caption(index, req.caption))
}

/// `DELETE /admin/stager/{index}`
pub async fn remove_staged<S: ContentStore>(
  auth: AdminAuth,
  Path(index): Path<usize>,
) -> Json<Changed<()>> {
  changed(auth.session.lock().await.stager.remove_staged(index))
}

/// `POST /admin/stager/commit`
pub async fn commit<S: ContentStore>(
  State(state): State<AppState<S>>,
  auth: AdminAuth,
) -> Result<(StatusCode, Json<Vec<GalleryImage>>), Error> {
  let mut session = auth.session.lock().await;
  let images = session
    .stager
    .commit(&*state.admin.store, &state.admin.ids)
    .await?;
  Ok((StatusCode::CREATED, Json(images)))
}

/// `DELETE /admin/stager`
pub async fn discard<S: ContentStore>(auth: AdminAuth) -> StatusCode {
  auth.session.lock().await.stager.discard();
  StatusCode::NO_CONTENT
}

// ─── Gallery ─────────────────────────────────────────────────────────────────

/// `POST /admin/gallery`
pub async fn add_image_by_url<S: ContentStore>(
  State(state): State<AppState<S>>,
  _auth: AdminAuth,
  Json(new): Json<NewGalleryImage>,
) -> Result<(StatusCode, Json<GalleryImage>), Error> {
  let image =
    gallery::add_image_by_url(&*state.admin.store, &state.admin.ids, new).await?;
  Ok((StatusCode::CREATED, Json(image)))
}

/// `DELETE /admin/gallery/{id}`
pub async fn delete_image<S: ContentStore>(
  State(state): State<AppState<S>>,
  _auth: AdminAuth,
  Path(id): Path<String>,
) -> Result<Json<Changed<GalleryImage>>, Error> {
  let removed =
    gallery::delete_image(&*state.admin.store, &state.admin.previews, &id).await?;
  Ok(Json(removed.into()))
}

// ─── Inbox ───────────────────────────────────────────────────────────────────

/// `POST /admin/messages/{id}/toggle-read`
pub async fn toggle_read<S: ContentStore>(
  State(state): State<AppState<S>>,
  _auth: AdminAuth,
  Path(id): Path<String>,
) -> Result<Json<Changed<ContactMessage>>, Error> {
  Ok(Json(inbox::toggle_read(&*state.admin.store, &id).await?.into()))
}

/// `DELETE /admin/messages/{id}`
pub async fn delete_message<S: ContentStore>(
  State(state): State<AppState<S>>,
  _auth: AdminAuth,
  Path(id): Path<String>,
) -> Result<Json<Changed<ContactMessage>>, Error> {
  Ok(Json(inbox::delete_message(&*state.admin.store, &id).await?.into()))
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
  pub status: AdmissionStatus,
}

/// `PUT /admin/admissions/{id}/status`
pub async fn set_admission_status<S: ContentStore>(
  State(state): State<AppState<S>>,
  _auth: AdminAuth,
  Path(id): Path<String>,
  Json(req): Json<StatusRequest>,
) -> Result<Json<Changed<AdmissionInquiry>>, Error> {
  let updated =
    inbox::set_admission_status(&*state.admin.store, &id, req.status).await?;
  Ok(Json(updated.into()))
}

/// `DELETE /admin/admissions/{id}`
pub async fn delete_admission<S: ContentStore>(
  State(state): State<AppState<S>>,
  _auth: AdminAuth,
  Path(id): Path<String>,
) -> Result<Json<Changed<AdmissionInquiry>>, Error> {
  Ok(Json(inbox::delete_admission(&*state.admin.store, &id).await?.into()))
}
