//! The admin content-management state container.
//!
//! An [`AdminSession`](session::AdminSession) owns the transient state of one
//! signed-in administrator: the notice editor's draft and editing buffers, the
//! gallery stager's pending files and the active tab. All durable writes go
//! through the shared [`ContentStore`]; no session keeps its own copy of a
//! list.
//!
//! The handles every session needs are bundled in [`AdminContext`].

pub mod auth;
pub mod editor;
pub mod error;
pub mod gallery;
pub mod inbox;
pub mod preview;
pub mod registry;
pub mod session;
pub mod stager;

use std::sync::Arc;

use tresbs_core::{id::IdGenerator, store::ContentStore};

pub use error::{Error, Result};
pub use preview::PreviewRegistry;
pub use registry::SessionRegistry;
pub use session::{AdminSession, AdminTab};

/// Handles shared by every admin session: the store, the id generator and the
/// preview registry.
pub struct AdminContext<S> {
  pub store:    Arc<S>,
  pub ids:      Arc<IdGenerator>,
  pub previews: PreviewRegistry,
}

// Manual impl: `S` itself need not be `Clone`.
impl<S> Clone for AdminContext<S> {
  fn clone(&self) -> Self {
    Self {
      store:    Arc::clone(&self.store),
      ids:      Arc::clone(&self.ids),
      previews: self.previews.clone(),
    }
  }
}

impl<S: ContentStore> AdminContext<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self {
      store,
      ids: Arc::new(IdGenerator::new()),
      previews: PreviewRegistry::default(),
    }
  }
}
