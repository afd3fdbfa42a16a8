//! Bearer-token admin session extractor and the matching route middleware.

use axum::{
  extract::{FromRequestParts, Request},
  http::{HeaderMap, header, request::Parts},
  middleware::Next,
  response::Response,
};
use tresbs_admin::registry::SharedSession;
use tresbs_core::store::ContentStore;
use uuid::Uuid;

use crate::{AppState, error::Error};

/// Parse `Authorization: Bearer <uuid>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<Uuid, Error> {
  headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.strip_prefix("Bearer "))
    .and_then(|t| t.trim().parse().ok())
    .ok_or(Error::Unauthorized)
}

/// A live, authenticated admin session. Present in a handler means the
/// request carried a valid token.
pub struct AdminAuth {
  pub token:   Uuid,
  pub session: SharedSession,
}

impl<S> FromRequestParts<AppState<S>> for AdminAuth
where
  S: ContentStore + 'static,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    let token = bearer_token(&parts.headers)?;
    let session = state.sessions.get(token).ok_or(Error::Unauthorized)?;
    session.lock().await.require_auth()?;
    Ok(AdminAuth { token, session })
  }
}

/// Route layer guarding the admin JSON API.
pub async fn require_session<S>(
  _auth: AdminAuth,
  req: Request,
  next: Next,
) -> Response
where
  S: ContentStore + 'static,
{
  next.run(req).await
}
