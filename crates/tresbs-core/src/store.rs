//! The `ContentStore` trait, the key-by-id CRUD interface over the site's
//! mutable lists.
//!
//! Implemented by storage backends (e.g. `tresbs-store-memory`). The admin
//! state container, the JSON API and the site depend on this abstraction.
//!
//! Every list is ordered newest first: `create_*` prepends. Operations on an
//! id that is not in the list are no-ops reported as `Ok(None)`. Patches are
//! validated by callers before they reach the store.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::{
  admission::{AdmissionInquiry, AdmissionPatch},
  gallery::{GalleryImage, GalleryImagePatch},
  message::{ContactMessage, MessagePatch},
  notice::{Notice, NoticePatch},
};

/// The full contents of a store, used to seed a fresh instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSnapshot {
  pub notices:    Vec<Notice>,
  pub gallery:    Vec<GalleryImage>,
  pub messages:   Vec<ContactMessage>,
  pub admissions: Vec<AdmissionInquiry>,
}

/// Abstraction over a content store backend.
///
/// All methods return `Send` futures so the trait can be used from `axum`
/// handlers on a multi-threaded runtime.
pub trait ContentStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Notices ───────────────────────────────────────────────────────────

  /// Snapshot of all notices, newest first.
  fn list_notices(
    &self,
  ) -> impl Future<Output = Result<Vec<Notice>, Self::Error>> + Send + '_;

  fn get_notice<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Notice>, Self::Error>> + Send + 'a;

  /// Prepend a notice and return its id. Fails if the id is taken.
  fn create_notice(
    &self,
    notice: Notice,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + '_;

  /// Patch the notice in place, keeping its position. Returns the updated
  /// notice, or `None` if the id is absent.
  fn update_notice<'a>(
    &'a self,
    id: &'a str,
    patch: NoticePatch,
  ) -> impl Future<Output = Result<Option<Notice>, Self::Error>> + Send + 'a;

  /// Remove and return the notice, or `None` if the id is absent.
  fn delete_notice<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Notice>, Self::Error>> + Send + 'a;

  /// Swap in a whole new list.
  fn replace_notices(
    &self,
    notices: Vec<Notice>,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Gallery ───────────────────────────────────────────────────────────

  fn list_images(
    &self,
  ) -> impl Future<Output = Result<Vec<GalleryImage>, Self::Error>> + Send + '_;

  fn get_image<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<GalleryImage>, Self::Error>> + Send + 'a;

  fn create_image(
    &self,
    image: GalleryImage,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + '_;

  /// Prepend several images at once, keeping their relative order. Either all
  /// are inserted or none are.
  fn create_images(
    &self,
    images: Vec<GalleryImage>,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + '_;

  fn update_image<'a>(
    &'a self,
    id: &'a str,
    patch: GalleryImagePatch,
  ) -> impl Future<Output = Result<Option<GalleryImage>, Self::Error>> + Send + 'a;

  fn delete_image<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<GalleryImage>, Self::Error>> + Send + 'a;

  fn replace_images(
    &self,
    images: Vec<GalleryImage>,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Messages ──────────────────────────────────────────────────────────

  fn list_messages(
    &self,
  ) -> impl Future<Output = Result<Vec<ContactMessage>, Self::Error>> + Send + '_;

  fn get_message<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<ContactMessage>, Self::Error>> + Send + 'a;

  fn create_message(
    &self,
    message: ContactMessage,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + '_;

  fn update_message<'a>(
    &'a self,
    id: &'a str,
    patch: MessagePatch,
  ) -> impl Future<Output = Result<Option<ContactMessage>, Self::Error>> + Send + 'a;

  /// Flip the read flag atomically. Returns the updated message.
  fn toggle_message_read<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<ContactMessage>, Self::Error>> + Send + 'a;

  fn delete_message<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<ContactMessage>, Self::Error>> + Send + 'a;

  fn replace_messages(
    &self,
    messages: Vec<ContactMessage>,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Admissions ────────────────────────────────────────────────────────

  fn list_admissions(
    &self,
  ) -> impl Future<Output = Result<Vec<AdmissionInquiry>, Self::Error>> + Send + '_;

  fn get_admission<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<AdmissionInquiry>, Self::Error>> + Send + 'a;

  fn create_admission(
    &self,
    inquiry: AdmissionInquiry,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + '_;

  fn update_admission<'a>(
    &'a self,
    id: &'a str,
    patch: AdmissionPatch,
  ) -> impl Future<Output = Result<Option<AdmissionInquiry>, Self::Error>> + Send + 'a;

  fn delete_admission<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<AdmissionInquiry>, Self::Error>> + Send + 'a;
}
