//! The notice editor: create, update and delete notices, plus the transient
//! draft (add form) and editing buffers.

use tracing::info;
use tresbs_core::{
  id::{IdGenerator, today},
  notice::{Notice, NoticeDraft, NoticePatch},
  store::ContentStore,
};

use crate::{Error, Result};

#[derive(Debug, Default)]
pub struct NoticeEditor {
  /// Present while the add form is open.
  draft:   Option<NoticeDraft>,
  editing: Option<Notice>,
}

impl NoticeEditor {
  pub fn draft(&self) -> Option<&NoticeDraft> { self.draft.as_ref() }

  pub fn editing(&self) -> Option<&Notice> { self.editing.as_ref() }

  /// Open the add form, keeping any draft already in progress.
  pub fn open_draft(&mut self) -> &mut NoticeDraft {
    self.draft.get_or_insert_with(NoticeDraft::default)
  }

  /// Replace the add form's contents, opening it if needed.
  pub fn save_draft(&mut self, draft: NoticeDraft) -> &NoticeDraft {
    self.draft.insert(draft)
  }

  pub fn close_draft(&mut self) { self.draft = None; }

  /// Submit the add form as it currently stands. See
  /// [`add_notice`](Self::add_notice).
  pub async fn submit_draft<S: ContentStore>(
    &mut self,
    store: &S,
    ids: &IdGenerator,
  ) -> Result<Notice> {
    let Some(draft) = self.draft.clone() else {
      return Err(Error::validation("the add form is not open"));
    };
    self.add_notice(store, ids, draft).await
  }

  /// Validate and prepend `draft` under a fresh id and today's date, then
  /// clear the draft buffer. A blank title leaves everything untouched.
  pub async fn add_notice<S: ContentStore>(
    &mut self,
    store: &S,
    ids: &IdGenerator,
    draft: NoticeDraft,
  ) -> Result<Notice> {
    tresbs_core::error::require("title", &draft.title)?;
    let notice = draft.into_notice(ids.next_id(), today())?;
    store.create_notice(notice.clone()).await.map_err(Error::store)?;
    self.draft = None;
    info!(id = %notice.id, title = %notice.title, "added notice");
    Ok(notice)
  }

  /// Copy the stored notice into the editing buffer. `None` if the id is
  /// absent, in which case the buffer is unchanged.
  pub async fn begin_edit<S: ContentStore>(
    &mut self,
    store: &S,
    id: &str,
  ) -> Result<Option<&Notice>> {
    let Some(notice) = store.get_notice(id).await.map_err(Error::store)? else {
      return Ok(None);
    };
    Ok(Some(self.editing.insert(notice)))
  }

  pub fn cancel_edit(&mut self) { self.editing = None; }

  /// Apply `changes` to the notice being edited and write it back in place.
  ///
  /// Requires an active editing buffer. A blank title is refused and leaves
  /// both the list and the buffer untouched. The buffer is cleared once the
  /// write goes through, or if the notice has since been deleted (`None`).
  pub async fn update_notice<S: ContentStore>(
    &mut self,
    store: &S,
    changes: NoticePatch,
  ) -> Result<Option<Notice>> {
    let Some(buffer) = &self.editing else {
      return Err(Error::validation("no notice is being edited"));
    };
    changes.validate()?;

    let mut edited = buffer.clone();
    changes.apply(&mut edited);
    let id = edited.id.clone();

    let updated = store
      .update_notice(&id, NoticePatch::from(edited))
      .await
      .map_err(Error::store)?;
    self.editing = None;
    if updated.is_some() {
      info!(%id, "updated notice");
    }
    Ok(updated)
  }

  /// Remove the notice; no-op if absent. Clears the editing buffer when it
  /// holds the deleted notice.
  pub async fn delete_notice<S: ContentStore>(
    &mut self,
    store: &S,
    id: &str,
  ) -> Result<Option<Notice>> {
    let removed = store.delete_notice(id).await.map_err(Error::store)?;
    if self.editing.as_ref().is_some_and(|n| n.id == id) {
      self.editing = None;
    }
    if removed.is_some() {
      info!(%id, "deleted notice");
    }
    Ok(removed)
  }
}

#[cfg(test)]
mod tests {
  use tresbs_store_memory::MemoryStore;

  use super::*;

  fn setup() -> (MemoryStore, IdGenerator, NoticeEditor) {
    (MemoryStore::seeded(), IdGenerator::new(), NoticeEditor::default())
  }

  #[tokio::test]
  async fn blank_title_leaves_list_unchanged() {
    let (store, ids, mut editor) = setup();
    let before = store.list_notices().await.unwrap();
    editor.open_draft().title = " \t ".into();

    let draft = editor.draft().cloned().unwrap();
    let err = editor.add_notice(&store, &ids, draft).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(store.list_notices().await.unwrap(), before);
    // The add form stays open with its content.
    assert!(editor.draft().is_some());
  }

  #[tokio::test]
  async fn title_only_fills_description_and_content() {
    let (store, ids, mut editor) = setup();
    editor.open_draft();
    let notice = editor
      .add_notice(&store, &ids, NoticeDraft::titled("Exam Update"))
      .await
      .unwrap();

    assert_eq!(notice.description, "Exam Update");
    assert_eq!(notice.full_content, "Exam Update");
    assert_eq!(notice.date, today());
    assert!(notice.is_new);
    assert!(editor.draft().is_none());
  }

  #[tokio::test]
  async fn added_notice_is_first() {
    let (store, ids, mut editor) = setup();
    let notice = editor
      .add_notice(&store, &ids, NoticeDraft::titled("Sports Week"))
      .await
      .unwrap();
    let list = store.list_notices().await.unwrap();
    assert_eq!(list[0].id, notice.id);
    assert_eq!(list.len(), 6);
  }

  #[tokio::test]
  async fn saved_draft_is_submitted_and_cleared() {
    let (store, ids, mut editor) = setup();
    assert!(editor.submit_draft(&store, &ids).await.unwrap_err().is_validation());

    editor.save_draft(NoticeDraft {
      description: Some("Bring your kit".into()),
      ..NoticeDraft::titled("Sports Week")
    });
    assert_eq!(editor.open_draft().title, "Sports Week");

    let notice = editor.submit_draft(&store, &ids).await.unwrap();
    assert_eq!(notice.description, "Bring your kit");
    assert_eq!(store.list_notices().await.unwrap()[0].id, notice.id);
    assert!(editor.draft().is_none());
  }

  #[tokio::test]
  async fn blank_saved_draft_stays_open() {
    let (store, ids, mut editor) = setup();
    editor.save_draft(NoticeDraft::titled(""));
    assert!(editor.submit_draft(&store, &ids).await.unwrap_err().is_validation());
    assert!(editor.draft().is_some());
    assert_eq!(store.list_notices().await.unwrap().len(), 5);
  }

  #[tokio::test]
  async fn update_requires_editing_buffer() {
    let (store, _, mut editor) = setup();
    let err = editor.update_notice(&store, NoticePatch::default()).await.unwrap_err();
    assert!(err.is_validation());
  }

  #[tokio::test]
  async fn update_replaces_in_place_and_clears_buffer() {
    let (store, _, mut editor) = setup();
    let before = store.list_notices().await.unwrap();
    assert!(editor.begin_edit(&store, "3").await.unwrap().is_some());

    let changes = NoticePatch { title: Some("Vacation extended".into()), ..Default::default() };
    let updated = editor.update_notice(&store, changes).await.unwrap().unwrap();
    assert_eq!(updated.title, "Vacation extended");
    assert!(editor.editing().is_none());

    let after = store.list_notices().await.unwrap();
    let order = |l: &[Notice]| l.iter().map(|n| n.id.clone()).collect::<Vec<_>>();
    assert_eq!(order(&after), order(&before));
    assert_eq!(after[2].title, "Vacation extended");
    assert_eq!(after[0], before[0]);
  }

  #[tokio::test]
  async fn blank_title_on_update_keeps_buffer() {
    let (store, _, mut editor) = setup();
    let before = store.list_notices().await.unwrap();
    editor.begin_edit(&store, "1").await.unwrap();

    let changes = NoticePatch { title: Some("   ".into()), ..Default::default() };
    assert!(editor.update_notice(&store, changes).await.unwrap_err().is_validation());
    assert_eq!(editor.editing().map(|n| n.id.as_str()), Some("1"));
    assert_eq!(store.list_notices().await.unwrap(), before);
  }

  #[tokio::test]
  async fn begin_edit_on_missing_id_is_noop() {
    let (store, _, mut editor) = setup();
    assert!(editor.begin_edit(&store, "nope").await.unwrap().is_none());
    assert!(editor.editing().is_none());
  }

  #[tokio::test]
  async fn delete_twice_is_idempotent() {
    let (store, _, mut editor) = setup();
    assert!(editor.delete_notice(&store, "2").await.unwrap().is_some());
    let once = store.list_notices().await.unwrap();
    assert!(editor.delete_notice(&store, "2").await.unwrap().is_none());
    assert_eq!(store.list_notices().await.unwrap(), once);
  }

  #[tokio::test]
  async fn deleting_edited_notice_clears_buffer() {
    let (store, _, mut editor) = setup();
    editor.begin_edit(&store, "4").await.unwrap();
    editor.delete_notice(&store, "5").await.unwrap();
    assert!(editor.editing().is_some());
    editor.delete_notice(&store, "4").await.unwrap();
    assert!(editor.editing().is_none());
  }
}
