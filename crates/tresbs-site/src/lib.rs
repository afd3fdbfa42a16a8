//! HTTP server for the TRESBS school site.
//!
//! Serves the public pages as JSON page models, the contact and admission
//! forms, the session-based admin screen, staged-upload previews and the JSON
//! CRUD API, all backed by any [`ContentStore`].

pub mod admin;
pub mod auth;
pub mod error;
pub mod forms;
pub mod pages;
pub mod previews;

pub use error::Error;

use std::{sync::Arc, time::Duration};

use axum::{
  Router,
  extract::DefaultBodyLimit,
  middleware,
  routing::{delete, get, post, put},
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tresbs_admin::{
  AdminContext, SessionRegistry,
  auth::{Argon2Authenticator, Authenticator, PlaceholderAuthenticator},
};
use tresbs_core::{
  highlight::HIGHLIGHT_WINDOW, school::SchoolInfo, store::ContentStore,
};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `TRESBS_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:                      String,
  pub port:                      u16,
  /// Simulated processing time of a form submission.
  pub submit_delay_ms:           u64,
  pub highlight_window_ms:       u64,
  pub session_idle_timeout_secs: u64,
  /// Largest accepted request body, which bounds staged uploads.
  pub max_upload_bytes:          usize,
  pub admin_username:            String,
  /// PHC string produced by argon2. Without it any non-blank credentials are
  /// accepted.
  pub admin_password_hash:       Option<String>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:                      "127.0.0.1".to_string(),
      port:                      8080,
      submit_delay_ms:           1500,
      highlight_window_ms:       HIGHLIGHT_WINDOW.as_millis() as u64,
      session_idle_timeout_secs: 3600,
      max_upload_bytes:          8 * 1024 * 1024,
      admin_username:            "admin".to_string(),
      admin_password_hash:       None,
    }
  }
}

impl ServerConfig {
  pub fn submit_delay(&self) -> Duration { Duration::from_millis(self.submit_delay_ms) }

  pub fn highlight_window(&self) -> Duration {
    Duration::from_millis(self.highlight_window_ms)
  }

  pub fn session_idle_timeout(&self) -> Duration {
    Duration::from_secs(self.session_idle_timeout_secs)
  }

  /// The argon2 authenticator when a hash is configured, otherwise the
  /// placeholder.
  pub fn authenticator(
    &self,
  ) -> Result<Arc<dyn Authenticator>, argon2::password_hash::Error> {
    Ok(match &self.admin_password_hash {
      Some(hash) => {
        Arc::new(Argon2Authenticator::new(self.admin_username.clone(), hash.clone())?)
      }
      None => Arc::new(PlaceholderAuthenticator),
    })
  }
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub admin:    AdminContext<S>,
  pub sessions: SessionRegistry,
  pub auth:     Arc<dyn Authenticator>,
  pub school:   Arc<SchoolInfo>,
  pub config:   Arc<ServerConfig>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      admin:    self.admin.clone(),
      sessions: self.sessions.clone(),
      auth:     Arc::clone(&self.auth),
      school:   Arc::clone(&self.school),
      config:   Arc::clone(&self.config),
    }
  }
}

impl<S: ContentStore> AppState<S> {
  pub fn new(
    store: Arc<S>,
    school: SchoolInfo,
    config: ServerConfig,
    auth: Arc<dyn Authenticator>,
  ) -> Self {
    Self {
      admin: AdminContext::new(store),
      sessions: SessionRegistry::new(config.session_idle_timeout()),
      auth,
      school: Arc::new(school),
      config: Arc::new(config),
    }
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the site's axum [`Router`].
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ContentStore + 'static,
{
  let api_admin = tresbs_api::admin_router(state.admin.clone()).route_layer(
    middleware::from_fn_with_state(state.clone(), auth::require_session::<S>),
  );

  Router::new()
    // Public pages
    .route("/", get(pages::home::<S>))
    .route("/about", get(pages::about::<S>))
    .route("/academics", get(pages::academics::<S>))
    .route("/admission", get(pages::admission::<S>).post(forms::admission::<S>))
    .route("/gallery", get(pages::gallery::<S>))
    .route("/contact", get(pages::contact::<S>).post(forms::contact::<S>))
    .route("/notices", get(pages::notices::<S>))
    .route("/notices/{id}", get(pages::notice_detail::<S>))
    .route("/previews/{id}", get(previews::serve::<S>))
    // Admin session
    .route("/admin", get(pages::admin_entry::<S>))
    .route("/admin/login", post(admin::login::<S>))
    .route("/admin/logout", post(admin::logout::<S>))
    .route("/admin/session", get(admin::session::<S>))
    .route("/admin/tab", put(admin::select_tab::<S>))
    // Notice editor
    .route("/admin/editor", get(admin::editor_state::<S>))
    .route(
      "/admin/editor/draft",
      post(admin::open_draft::<S>)
        .put(admin::save_draft::<S>)
        .delete(admin::close_draft::<S>),
    )
    .route("/admin/editor/draft/submit", post(admin::submit_draft::<S>))
    .route(
      "/admin/editor/edit",
      put(admin::update_notice::<S>).delete(admin::cancel_edit::<S>),
    )
    .route("/admin/editor/edit/{id}", post(admin::begin_edit::<S>))
    .route("/admin/notices", post(admin::add_notice::<S>))
    .route("/admin/notices/{id}", delete(admin::delete_notice::<S>))
    // Gallery
    .route(
      "/admin/stager",
      get(admin::staged::<S>)
        .post(admin::stage_files::<S>)
        .delete(admin::discard::<S>),
    )
    .route("/admin/stager/commit", post(admin::commit::<S>))
    .route(
      "/admin/stager/{index}",
      put(admin::update_caption::<S>).delete(admin::remove_staged::<S>),
    )
    .route("/admin/gallery", post(admin::add_image_by_url::<S>))
    .route("/admin/gallery/{id}", delete(admin::delete_image::<S>))
    // Inbox
    .route("/admin/messages/{id}/toggle-read", post(admin::toggle_read::<S>))
    .route("/admin/messages/{id}", delete(admin::delete_message::<S>))
    .route("/admin/admissions/{id}/status", put(admin::set_admission_status::<S>))
    .route("/admin/admissions/{id}", delete(admin::delete_admission::<S>))
    .fallback(pages::not_found)
    .with_state(state.clone())
    // JSON API
    .nest("/api", tresbs_api::public_router(state.admin.clone()))
    .nest("/api/admin", api_admin)
    .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
    .layer(TraceLayer::new_for_http())
}
