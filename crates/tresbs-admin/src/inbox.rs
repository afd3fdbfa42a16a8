//! Contact messages and admission inquiries as seen by the administrator.
//!
//! Every operation on an absent id is a no-op reported as `None`.

use tracing::info;
use tresbs_core::{
  admission::{AdmissionInquiry, AdmissionPatch, AdmissionStatus},
  message::{self, ContactMessage},
  store::ContentStore,
};

use crate::{Error, Result};

pub async fn toggle_read<S: ContentStore>(
  store: &S,
  id: &str,
) -> Result<Option<ContactMessage>> {
  let toggled = store.toggle_message_read(id).await.map_err(Error::store)?;
  if let Some(m) = &toggled {
    info!(%id, is_read = m.is_read, "toggled message read state");
  }
  Ok(toggled)
}

pub async fn delete_message<S: ContentStore>(
  store: &S,
  id: &str,
) -> Result<Option<ContactMessage>> {
  let removed = store.delete_message(id).await.map_err(Error::store)?;
  if removed.is_some() {
    info!(%id, "deleted message");
  }
  Ok(removed)
}

/// Recomputed from the current list on every call.
pub async fn unread_count<S: ContentStore>(store: &S) -> Result<usize> {
  let messages = store.list_messages().await.map_err(Error::store)?;
  Ok(message::unread_count(&messages))
}

pub async fn set_admission_status<S: ContentStore>(
  store: &S,
  id: &str,
  status: AdmissionStatus,
) -> Result<Option<AdmissionInquiry>> {
  let patch = AdmissionPatch { status: Some(status) };
  let updated = store.update_admission(id, patch).await.map_err(Error::store)?;
  if updated.is_some() {
    info!(%id, %status, "updated admission status");
  }
  Ok(updated)
}

pub async fn delete_admission<S: ContentStore>(
  store: &S,
  id: &str,
) -> Result<Option<AdmissionInquiry>> {
  let removed = store.delete_admission(id).await.map_err(Error::store)?;
  if removed.is_some() {
    info!(%id, "deleted admission inquiry");
  }
  Ok(removed)
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use tresbs_core::admission::AdmissionSubmission;
  use tresbs_store_memory::MemoryStore;

  use super::*;

  async fn counted_unread(store: &MemoryStore) -> usize {
    let messages = store.list_messages().await.unwrap();
    messages.iter().filter(|m| !m.is_read).count()
  }

  #[tokio::test]
  async fn toggle_twice_restores_flag_and_count_tracks_list() {
    let store = MemoryStore::seeded();
    let original = store.get_message("2").await.unwrap().unwrap().is_read;
    assert_eq!(unread_count(&store).await.unwrap(), counted_unread(&store).await);

    toggle_read(&store, "2").await.unwrap();
    assert_eq!(unread_count(&store).await.unwrap(), counted_unread(&store).await);
    assert_eq!(unread_count(&store).await.unwrap(), 3);

    let restored = toggle_read(&store, "2").await.unwrap().unwrap();
    assert_eq!(restored.is_read, original);
    assert_eq!(unread_count(&store).await.unwrap(), 2);
  }

  #[tokio::test]
  async fn absent_ids_are_noops() {
    let store = MemoryStore::seeded();
    assert!(toggle_read(&store, "nope").await.unwrap().is_none());
    assert!(delete_message(&store, "nope").await.unwrap().is_none());
    assert!(set_admission_status(&store, "nope", AdmissionStatus::Approved)
      .await
      .unwrap()
      .is_none());
    assert!(delete_admission(&store, "nope").await.unwrap().is_none());
    assert_eq!(store.list_messages().await.unwrap().len(), 3);
  }

  #[tokio::test]
  async fn deleting_unread_message_lowers_count() {
    let store = MemoryStore::seeded();
    delete_message(&store, "1").await.unwrap();
    assert_eq!(unread_count(&store).await.unwrap(), 1);
  }

  #[tokio::test]
  async fn admission_status_lifecycle() {
    let store = MemoryStore::new();
    let inquiry = AdmissionSubmission {
      name:           "Maya Gurung".into(),
      phone:          "+977-9812345678".into(),
      email:          "maya@example.com".into(),
      address:        "Bhaktapur".into(),
      class_applying: "Class 3".into(),
      message:        String::new(),
    }
    .into_inquiry(&["Class 3"], "a1".into(), NaiveDate::from_ymd_opt(2025, 1, 2).unwrap())
    .unwrap();
    store.create_admission(inquiry).await.unwrap();

    let reviewed = set_admission_status(&store, "a1", AdmissionStatus::Reviewed)
      .await
      .unwrap()
      .unwrap();
    assert_eq!(reviewed.status, AdmissionStatus::Reviewed);

    assert!(delete_admission(&store, "a1").await.unwrap().is_some());
    assert!(store.list_admissions().await.unwrap().is_empty());
  }
}
