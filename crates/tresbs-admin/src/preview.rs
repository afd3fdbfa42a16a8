//! Revocable preview references for staged uploads.
//!
//! A staged file's bytes live in the [`PreviewRegistry`] and are addressed by
//! a URL of the form `/previews/<uuid>`. Each entry has exactly one owner:
//!
//! - a [`PreviewRef`] while the file is staged, which releases the entry on
//!   [`PreviewRef::release`] or on drop;
//! - once committed, the gallery image whose `src` is the preview URL.
//!   Deleting that image releases the entry.

use std::{
  collections::HashMap,
  sync::{Arc, Mutex, PoisonError},
};

use bytes::Bytes;
use sha2::{Digest, Sha256};
use tracing::debug;
use uuid::Uuid;

pub const PREVIEW_PREFIX: &str = "/previews/";

pub fn preview_url(id: Uuid) -> String { format!("{PREVIEW_PREFIX}{id}") }

/// The preview id in `src`, if `src` is a preview URL.
pub fn parse_preview_url(src: &str) -> Option<Uuid> {
  src.strip_prefix(PREVIEW_PREFIX)?.parse().ok()
}

/// The stored bytes of one preview.
#[derive(Debug)]
pub struct PreviewBlob {
  pub bytes:      Bytes,
  pub media_type: String,
  pub file_name:  String,
  /// Quoted hex SHA-256 of `bytes`.
  pub etag:       String,
}

fn compute_etag(bytes: &[u8]) -> String {
  format!("\"{}\"", hex::encode(Sha256::digest(bytes)))
}

// ─── Registry ────────────────────────────────────────────────────────────────

/// Shared table of live previews. Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
  blobs: Arc<Mutex<HashMap<Uuid, Arc<PreviewBlob>>>>,
}

impl PreviewRegistry {
  /// Store `bytes` and hand back the owning handle.
  pub fn create(
    &self,
    file_name: impl Into<String>,
    media_type: impl Into<String>,
    bytes: Bytes,
  ) -> PreviewRef {
    let id = Uuid::new_v4();
    let blob = PreviewBlob {
      etag: compute_etag(&bytes),
      bytes,
      media_type: media_type.into(),
      file_name: file_name.into(),
    };
    self.lock().insert(id, Arc::new(blob));
    PreviewRef { id, registry: self.clone(), armed: true }
  }

  pub fn get(&self, id: Uuid) -> Option<Arc<PreviewBlob>> {
    self.lock().get(&id).cloned()
  }

  pub fn is_live(&self, id: Uuid) -> bool { self.lock().contains_key(&id) }

  pub fn len(&self) -> usize { self.lock().len() }

  pub fn is_empty(&self) -> bool { self.len() == 0 }

  /// Remove the preview. Returns `false` if it was already gone.
  pub fn release(&self, id: Uuid) -> bool {
    let released = self.lock().remove(&id).is_some();
    if released {
      debug!(%id, "released preview");
    }
    released
  }

  /// Release the preview behind an image `src`; no-op for ordinary URLs.
  pub fn release_src(&self, src: &str) -> bool {
    parse_preview_url(src).is_some_and(|id| self.release(id))
  }

  fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, Arc<PreviewBlob>>> {
    self.blobs.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

// ─── Handle ──────────────────────────────────────────────────────────────────

/// Owning handle to a live preview.
///
/// Dropping an armed handle releases the preview. [`persist`](Self::persist)
/// disarms it and hands ownership to whoever stores the returned URL.
#[derive(Debug)]
pub struct PreviewRef {
  id:       Uuid,
  registry: PreviewRegistry,
  armed:    bool,
}

impl PreviewRef {
  pub fn id(&self) -> Uuid { self.id }

  pub fn url(&self) -> String { preview_url(self.id) }

  pub fn release(mut self) {
    self.armed = false;
    self.registry.release(self.id);
  }

  /// Keep the preview alive beyond this handle and return its URL.
  pub fn persist(mut self) -> String {
    self.armed = false;
    self.url()
  }
}

impl Drop for PreviewRef {
  fn drop(&mut self) {
    if self.armed {
      self.registry.release(self.id);
    }
  }
}
