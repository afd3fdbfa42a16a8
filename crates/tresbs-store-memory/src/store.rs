//! [`MemoryStore`], the in-memory implementation of [`ContentStore`].

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::error;
use tresbs_core::{
  admission::{AdmissionInquiry, AdmissionPatch},
  gallery::{GalleryImage, GalleryImagePatch},
  message::{ContactMessage, MessagePatch},
  notice::{Notice, NoticePatch},
  store::{ContentSnapshot, ContentStore},
};

use crate::{Error, Result, fixtures};

// ─── Keyed entities ──────────────────────────────────────────────────────────

trait Keyed: Clone {
  const KIND: &'static str;
  fn key(&self) -> &str;
}

impl Keyed for Notice {
  const KIND: &'static str = "notice";
  fn key(&self) -> &str { &self.id }
}

impl Keyed for GalleryImage {
  const KIND: &'static str = "gallery image";
  fn key(&self) -> &str { &self.id }
}

impl Keyed for ContactMessage {
  const KIND: &'static str = "message";
  fn key(&self) -> &str { &self.id }
}

impl Keyed for AdmissionInquiry {
  const KIND: &'static str = "admission";
  fn key(&self) -> &str { &self.id }
}

// ─── List operations ─────────────────────────────────────────────────────────
//
// Each helper builds the replacement list; the caller swaps it in while still
// holding the write lock.

type List<T> = Arc<Vec<T>>;

fn find<T: Keyed>(list: &[T], id: &str) -> Option<T> {
  list.iter().find(|e| e.key() == id).cloned()
}

/// `items` followed by the current list. Rejects empty and colliding ids,
/// including collisions within `items`.
fn prepended<T: Keyed>(list: &[T], items: Vec<T>) -> Result<Vec<T>> {
  for (i, item) in items.iter().enumerate() {
    let id = item.key();
    if id.trim().is_empty() {
      return Err(Error::EmptyId { kind: T::KIND });
    }
    let taken = list.iter().any(|e| e.key() == id)
      || items[..i].iter().any(|e| e.key() == id);
    if taken {
      return Err(Error::DuplicateId { kind: T::KIND, id: id.to_owned() });
    }
  }
  let mut next = items;
  next.extend_from_slice(list);
  Ok(next)
}

/// The list with the entity `id` modified in place, plus the modified entity.
fn patched<T: Keyed>(
  list: &[T],
  id: &str,
  edit: impl FnOnce(&mut T),
) -> Option<(Vec<T>, T)> {
  let pos = list.iter().position(|e| e.key() == id)?;
  let mut next = list.to_vec();
  edit(&mut next[pos]);
  let updated = next[pos].clone();
  Some((next, updated))
}

/// The list without the entity `id`, plus the removed entity.
fn without<T: Keyed>(list: &[T], id: &str) -> Option<(Vec<T>, T)> {
  let pos = list.iter().position(|e| e.key() == id)?;
  let mut next = list.to_vec();
  let removed = next.remove(pos);
  Some((next, removed))
}

fn reject_duplicates<T: Keyed>(items: &[T]) -> Result<()> {
  prepended::<T>(&[], items.to_vec()).map(drop)
}

// ─── Store ───────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Lists {
  notices:    List<Notice>,
  gallery:    List<GalleryImage>,
  messages:   List<ContactMessage>,
  admissions: List<AdmissionInquiry>,
}

/// A content store held entirely in process memory.
///
/// Cloning is cheap and clones share the same lists. Independent instances
/// never share state.
#[derive(Clone, Default)]
pub struct MemoryStore {
  lists: Arc<RwLock<Lists>>,
}

impl MemoryStore {
  /// An empty store.
  pub fn new() -> Self { Self::default() }

  /// A store seeded with the bundled fixture content.
  pub fn try_seeded() -> Result<Self> { Self::from_snapshot(fixtures::content()) }

  /// Like [`try_seeded`](Self::try_seeded), but falls back to an empty store
  /// (logged at `error`) if the fixtures are inconsistent.
  pub fn seeded() -> Self {
    Self::try_seeded().unwrap_or_else(|e| {
      error!(error = %e, "fixture content rejected; starting with an empty store");
      Self::default()
    })
  }

  /// A store seeded with `snapshot`. Fails if any list repeats an id.
  pub fn from_snapshot(snapshot: ContentSnapshot) -> Result<Self> {
    reject_duplicates(&snapshot.notices)?;
    reject_duplicates(&snapshot.gallery)?;
    reject_duplicates(&snapshot.messages)?;
    reject_duplicates(&snapshot.admissions)?;
    Ok(Self {
      lists: Arc::new(RwLock::new(Lists {
        notices:    Arc::new(snapshot.notices),
        gallery:    Arc::new(snapshot.gallery),
        messages:   Arc::new(snapshot.messages),
        admissions: Arc::new(snapshot.admissions),
      })),
    })
  }

  /// Copy of everything currently held.
  pub async fn snapshot(&self) -> ContentSnapshot {
    let lists = self.lists.read().await;
    ContentSnapshot {
      notices:    lists.notices.to_vec(),
      gallery:    lists.gallery.to_vec(),
      messages:   lists.messages.to_vec(),
      admissions: lists.admissions.to_vec(),
    }
  }

  /// Clone the `Arc` of one list; the lock is held only for the clone.
  async fn read<T, F>(&self, select: F) -> List<T>
  where
    F: FnOnce(&Lists) -> &List<T>,
  {
    select(&*self.lists.read().await).clone()
  }
}

impl ContentStore for MemoryStore {
  type Error = Error;

  // ── Notices ───────────────────────────────────────────────────────────

  async fn list_notices(&self) -> Result<Vec<Notice>> {
    Ok(self.read(|l| &l.notices).await.to_vec())
  }

  async fn get_notice<'a>(&'a self, id: &'a str) -> Result<Option<Notice>> {
    Ok(find(&self.read(|l| &l.notices).await, id))
  }

  async fn create_notice(&self, notice: Notice) -> Result<String> {
    let id = notice.id.clone();
    let mut lists = self.lists.write().await;
    lists.notices = Arc::new(prepended(&lists.notices, vec![notice])?);
    Ok(id)
  }

  async fn update_notice<'a>(
    &'a self,
    id: &'a str,
    patch: NoticePatch,
  ) -> Result<Option<Notice>> {
    let mut lists = self.lists.write().await;
    let Some((next, updated)) = patched(&lists.notices, id, |n| patch.apply(n))
    else {
      return Ok(None);
    };
    lists.notices = Arc::new(next);
    Ok(Some(updated))
  }

  async fn delete_notice<'a>(&'a self, id: &'a str) -> Result<Option<Notice>> {
    let mut lists = self.lists.write().await;
    let Some((next, removed)) = without(&lists.notices, id) else {
      return Ok(None);
    };
    lists.notices = Arc::new(next);
    Ok(Some(removed))
  }

  async fn replace_notices(&self, notices: Vec<Notice>) -> Result<()> {
    reject_duplicates(&notices)?;
    self.lists.write().await.notices = Arc::new(notices);
    Ok(())
  }

  // ── Gallery ───────────────────────────────────────────────────────────

  async fn list_images(&self) -> Result<Vec<GalleryImage>> {
    Ok(self.read(|l| &l.gallery).await.to_vec())
  }

  async fn get_image<'a>(&'a self, id: &'a str) -> Result<Option<GalleryImage>> {
    Ok(find(&self.read(|l| &l.gallery).await, id))
  }

  async fn create_image(&self, image: GalleryImage) -> Result<String> {
    let id = image.id.clone();
    let mut lists = self.lists.write().await;
    lists.gallery = Arc::new(prepended(&lists.gallery, vec![image])?);
    Ok(id)
  }

  async fn create_images(&self, images: Vec<GalleryImage>) -> Result<Vec<String>> {
    let ids = images.iter().map(|i| i.id.clone()).collect();
    let mut lists = self.lists.write().await;
    lists.gallery = Arc::new(prepended(&lists.gallery, images)?);
    Ok(ids)
  }

  async fn update_image<'a>(
    &'a self,
    id: &'a str,
    patch: GalleryImagePatch,
  ) -> Result<Option<GalleryImage>> {
    let mut lists = self.lists.write().await;
    let Some((next, updated)) = patched(&lists.gallery, id, |i| patch.apply(i))
    else {
      return Ok(None);
    };
    lists.gallery = Arc::new(next);
    Ok(Some(updated))
  }

  async fn delete_image<'a>(&'a self, id: &'a str) -> Result<Option<GalleryImage>> {
    let mut lists = self.lists.write().await;
    let Some((next, removed)) = without(&lists.gallery, id) else {
      return Ok(None);
    };
    lists.gallery = Arc::new(next);
    Ok(Some(removed))
  }

  async fn replace_images(&self, images: Vec<GalleryImage>) -> Result<()> {
    reject_duplicates(&images)?;
    self.lists.write().await.gallery = Arc::new(images);
    Ok(())
  }

  // ── Messages ──────────────────────────────────────────────────────────

  async fn list_messages(&self) -> Result<Vec<ContactMessage>> {
    Ok(self.read(|l| &l.messages).await.to_vec())
  }

  async fn get_message<'a>(&'a self, id: &'a str) -> Result<Option<ContactMessage>> {
    Ok(find(&self.read(|l| &l.messages).await, id))
  }

  async fn create_message(&self, message: ContactMessage) -> Result<String> {
    let id = message.id.clone();
    let mut lists = self.lists.write().await;
    lists.messages = Arc::new(prepended(&lists.messages, vec![message])?);
    Ok(id)
  }

  async fn update_message<'a>(
    &'a self,
    id: &'a str,
    patch: MessagePatch,
  ) -> Result<Option<ContactMessage>> {
    let mut lists = self.lists.write().await;
    let Some((next, updated)) = patched(&lists.messages, id, |m| patch.apply(m))
    else {
      return Ok(None);
    };
    lists.messages = Arc::new(next);
    Ok(Some(updated))
  }

  async fn toggle_message_read<'a>(
    &'a self,
    id: &'a str,
  ) -> Result<Option<ContactMessage>> {
    let mut lists = self.lists.write().await;
    let Some((next, updated)) =
      patched(&lists.messages, id, |m| m.is_read = !m.is_read)
    else {
      return Ok(None);
    };
    lists.messages = Arc::new(next);
    Ok(Some(updated))
  }

  async fn delete_message<'a>(
    &'a self,
    id: &'a str,
  ) -> Result<Option<ContactMessage>> {
    let mut lists = self.lists.write().await;
    let Some((next, removed)) = without(&lists.messages, id) else {
      return Ok(None);
    };
    lists.messages = Arc::new(next);
    Ok(Some(removed))
  }

  async fn replace_messages(&self, messages: Vec<ContactMessage>) -> Result<()> {
    reject_duplicates(&messages)?;
    self.lists.write().await.messages = Arc::new(messages);
    Ok(())
  }

  // ── Admissions ────────────────────────────────────────────────────────

  async fn list_admissions(&self) -> Result<Vec<AdmissionInquiry>> {
    Ok(self.read(|l| &l.admissions).await.to_vec())
  }

  async fn get_admission<'a>(
    &'a self,
    id: &'a str,
  ) -> Result<Option<AdmissionInquiry>> {
    Ok(find(&self.read(|l| &l.admissions).await, id))
  }

  async fn create_admission(&self, inquiry: AdmissionInquiry) -> Result<String> {
    let id = inquiry.id.clone();
    let mut lists = self.lists.write().await;
    lists.admissions = Arc::new(prepended(&lists.admissions, vec![inquiry])?);
    Ok(id)
  }

  async fn update_admission<'a>(
    &'a self,
    id: &'a str,
    patch: AdmissionPatch,
  ) -> Result<Option<AdmissionInquiry>> {
    let mut lists = self.lists.write().await;
    let Some((next, updated)) =
      patched(&lists.admissions, id, |a| patch.apply(a))
    else {
      return Ok(None);
    };
    lists.admissions = Arc::new(next);
    Ok(Some(updated))
  }

  async fn delete_admission<'a>(
    &'a self,
    id: &'a str,
  ) -> Result<Option<AdmissionInquiry>> {
    let mut lists = self.lists.write().await;
    let Some((next, removed)) = without(&lists.admissions, id) else {
      return Ok(None);
    };
    lists.admissions = Arc::new(next);
    Ok(Some(removed))
  }
}
