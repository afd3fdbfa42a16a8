//! Live admin sessions keyed by bearer token.
//!
//! A token is an opaque UUID v4 handed out at login. Sessions idle for longer
//! than the configured timeout expire; expiry drops the session, which
//! releases its staged previews.

use std::{
  collections::HashMap,
  sync::{Arc, Mutex, MutexGuard, PoisonError},
  time::Duration,
};

use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::AdminSession;

pub type SharedSession = Arc<tokio::sync::Mutex<AdminSession>>;

pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(3600);

struct Entry {
  session:   SharedSession,
  last_seen: Instant,
}

#[derive(Clone)]
pub struct SessionRegistry {
  entries:      Arc<Mutex<HashMap<Uuid, Entry>>>,
  idle_timeout: Duration,
}

impl Default for SessionRegistry {
  fn default() -> Self { Self::new(DEFAULT_IDLE_TIMEOUT) }
}

impl SessionRegistry {
  pub fn new(idle_timeout: Duration) -> Self {
    Self { entries: Arc::default(), idle_timeout }
  }

  /// Register `session` and return its token.
  pub fn open(&self, session: AdminSession) -> Uuid {
    let token = Uuid::new_v4();
    let entry = Entry {
      session:   Arc::new(tokio::sync::Mutex::new(session)),
      last_seen: Instant::now(),
    };
    self.lock().insert(token, entry);
    debug!(%token, "opened admin session");
    token
  }

  /// Look up a live session and mark it as used. An expired session is
  /// removed and reported as absent.
  pub fn get(&self, token: Uuid) -> Option<SharedSession> {
    let now = Instant::now();
    let mut entries = self.lock();
    let entry = entries.get_mut(&token)?;
    if now.duration_since(entry.last_seen) > self.idle_timeout {
      entries.remove(&token);
      info!(%token, "admin session expired");
      return None;
    }
    entry.last_seen = now;
    Some(Arc::clone(&entry.session))
  }

  /// Remove the session; the caller gets the last handle for teardown.
  pub fn close(&self, token: Uuid) -> Option<SharedSession> {
    self.lock().remove(&token).map(|e| e.session)
  }

  /// Drop every expired session. Returns how many were removed.
  pub fn sweep(&self) -> usize {
    let now = Instant::now();
    let mut entries = self.lock();
    let before = entries.len();
    entries.retain(|_, e| now.duration_since(e.last_seen) <= self.idle_timeout);
    let removed = before - entries.len();
    if removed > 0 {
      info!(removed, "expired idle admin sessions");
    }
    removed
  }

  pub fn len(&self) -> usize { self.lock().len() }

  pub fn is_empty(&self) -> bool { self.len() == 0 }

  fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Entry>> {
    self.entries.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

#[cfg(test)]
mod tests {
  use bytes::Bytes;

  use super::*;
  use crate::{PreviewRegistry, stager::SelectedFile};

  const TIMEOUT: Duration = Duration::from_secs(60);

  #[tokio::test(start_paused = true)]
  async fn open_then_get() {
    let registry = SessionRegistry::new(TIMEOUT);
    let token = registry.open(AdminSession::default());
    assert!(registry.get(token).is_some());
    assert!(registry.get(Uuid::new_v4()).is_none());
  }

  #[tokio::test(start_paused = true)]
  async fn idle_session_expires() {
    let registry = SessionRegistry::new(TIMEOUT);
    let token = registry.open(AdminSession::default());
    tokio::time::advance(TIMEOUT + Duration::from_secs(1)).await;
    assert!(registry.get(token).is_none());
    assert!(registry.is_empty());
  }

  #[tokio::test(start_paused = true)]
  async fn use_keeps_session_alive() {
    let registry = SessionRegistry::new(TIMEOUT);
    let token = registry.open(AdminSession::default());
    for _ in 0..3 {
      tokio::time::advance(Duration::from_secs(45)).await;
      assert!(registry.get(token).is_some());
    }
  }

  #[tokio::test(start_paused = true)]
  async fn sweep_drops_expired_and_releases_previews() {
    let previews = PreviewRegistry::default();
    let registry = SessionRegistry::new(TIMEOUT);

    let mut stale = AdminSession::default();
    stale.stager.stage_files(&previews, [SelectedFile {
      file_name:  "a.jpg".into(),
      media_type: "image/jpeg".into(),
      bytes:      Bytes::from_static(b"jpeg"),
    }]);
    registry.open(stale);
    tokio::time::advance(Duration::from_secs(50)).await;
    let fresh = registry.open(AdminSession::default());
    tokio::time::advance(Duration::from_secs(20)).await;

    assert_eq!(registry.sweep(), 1);
    assert!(registry.get(fresh).is_some());
    assert!(previews.is_empty());
  }

  #[tokio::test(start_paused = true)]
  async fn close_removes_session() {
    let registry = SessionRegistry::new(TIMEOUT);
    let token = registry.open(AdminSession::default());
    assert!(registry.close(token).is_some());
    assert!(registry.get(token).is_none());
    assert!(registry.close(token).is_none());
  }
}
