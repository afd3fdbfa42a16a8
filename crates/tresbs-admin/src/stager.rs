//! Multi-file gallery staging.
//!
//! Selected files are held with a live preview and an editable caption until
//! they are committed into the gallery as a batch, removed one by one, or
//! discarded together. Every staged preview is released exactly once: by
//! [`GalleryStager::remove_staged`], [`GalleryStager::discard`], dropping the
//! stager, or (after commit) deleting the committed image.

use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use tresbs_core::{
  gallery::{GalleryImage, NewGalleryImage},
  id::{IdGenerator, today},
  store::ContentStore,
};

use crate::{
  Error, Result,
  preview::{PreviewRef, PreviewRegistry},
};

/// Caption suggested for a freshly selected file: the file name without its
/// extension, with `-` and `_` read as spaces.
pub fn default_caption(file_name: &str) -> String {
  let stem = match file_name.rsplit_once('.') {
    Some((stem, _)) if !stem.is_empty() => stem,
    _ => file_name,
  };
  stem.replace(['-', '_'], " ").trim().to_owned()
}

/// A file picked by the administrator, before staging.
#[derive(Debug, Clone)]
pub struct SelectedFile {
  pub file_name:  String,
  pub media_type: String,
  pub bytes:      Bytes,
}

#[derive(Debug)]
pub struct StagedFile {
  pub file_name:  String,
  pub media_type: String,
  pub caption:    String,
  preview:        PreviewRef,
}

impl StagedFile {
  pub fn preview_url(&self) -> String { self.preview.url() }
}

/// Serialisable view of one staged file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedView {
  pub index:       usize,
  pub file_name:   String,
  pub media_type:  String,
  pub caption:     String,
  pub preview_url: String,
}

#[derive(Debug, Default)]
pub struct GalleryStager {
  pending: Vec<StagedFile>,
}

impl GalleryStager {
  pub fn pending(&self) -> &[StagedFile] { &self.pending }

  pub fn is_empty(&self) -> bool { self.pending.is_empty() }

  pub fn views(&self) -> Vec<StagedView> {
    self
      .pending
      .iter()
      .enumerate()
      .map(|(index, f)| StagedView {
        index,
        file_name: f.file_name.clone(),
        media_type: f.media_type.clone(),
        caption: f.caption.clone(),
        preview_url: f.preview_url(),
      })
      .collect()
  }

  /// Append `files`, each with a new preview and a default caption. Returns
  /// how many were staged.
  pub fn stage_files(
    &mut self,
    previews: &PreviewRegistry,
    files: impl IntoIterator<Item = SelectedFile>,
  ) -> usize {
    let before = self.pending.len();
    self.pending.extend(files.into_iter().map(|f| StagedFile {
      caption:    default_caption(&f.file_name),
      preview:    previews.create(f.file_name.clone(), f.media_type.clone(), f.bytes),
      file_name:  f.file_name,
      media_type: f.media_type,
    }));
    self.pending.len() - before
  }

  /// Returns `false` if `index` is out of range.
  pub fn update_caption(&mut self, index: usize, text: impl Into<String>) -> bool {
    match self.pending.get_mut(index) {
      Some(f) => {
        f.caption = text.into();
        true
      }
      None => false,
    }
  }

  /// Release the preview at `index` and drop the entry. Returns `false` if
  /// `index` is out of range.
  pub fn remove_staged(&mut self, index: usize) -> bool {
    if index >= self.pending.len() {
      return false;
    }
    self.pending.remove(index).preview.release();
    true
  }

  /// Add every staged file to the gallery, in staged order, as one batch.
  ///
  /// Fails with a validation error, touching nothing, when nothing is staged.
  /// If the store rejects the batch the staged files are kept.
  pub async fn commit<S: ContentStore>(
    &mut self,
    store: &S,
    ids: &IdGenerator,
  ) -> Result<Vec<GalleryImage>> {
    if self.pending.is_empty() {
      return Err(Error::validation("no files staged"));
    }

    let date = today();
    let images = self
      .pending
      .iter()
      .map(|f| {
        let alt = if f.caption.trim().is_empty() {
          f.file_name.clone()
        } else {
          f.caption.clone()
        };
        NewGalleryImage { src: f.preview_url(), alt, category: None }
          .into_image(ids.next_id(), date)
      })
      .collect::<tresbs_core::Result<Vec<_>>>()?;

    store.create_images(images.clone()).await.map_err(Error::store)?;

    for file in self.pending.drain(..) {
      file.preview.persist();
    }
    info!(count = images.len(), "committed staged gallery images");
    Ok(images)
  }

  /// Release every pending preview and clear the list.
  pub fn discard(&mut self) {
    for file in self.pending.drain(..) {
      file.preview.release();
    }
  }
}

#[cfg(test)]
mod tests {
  use tresbs_core::gallery::DEFAULT_CATEGORY;
  use tresbs_store_memory::MemoryStore;

  use super::*;
  use crate::preview::parse_preview_url;

  fn file(name: &str) -> SelectedFile {
    SelectedFile {
      file_name:  name.into(),
      media_type: "image/jpeg".into(),
      bytes:      Bytes::from(name.as_bytes().to_vec()),
    }
  }

  fn three_files() -> Vec<SelectedFile> {
    vec![file("sports-day.jpg"), file("science_fair.png"), file("annual day.jpeg")]
  }

  #[test]
  fn caption_is_derived_from_file_name() {
    assert_eq!(default_caption("sports-day_2024.jpg"), "sports day 2024");
    assert_eq!(default_caption("archive.tar.gz"), "archive.tar");
    assert_eq!(default_caption("README"), "README");
    assert_eq!(default_caption(".hidden"), ".hidden");
    assert_eq!(default_caption("-trip-.png"), "trip");
  }

  #[test]
  fn staging_appends() {
    let previews = PreviewRegistry::default();
    let mut stager = GalleryStager::default();
    assert_eq!(stager.stage_files(&previews, [file("a.jpg")]), 1);
    assert_eq!(stager.stage_files(&previews, [file("b.jpg"), file("c.jpg")]), 2);

    let captions: Vec<_> = stager.pending().iter().map(|f| f.caption.as_str()).collect();
    assert_eq!(captions, vec!["a", "b", "c"]);
    assert_eq!(previews.len(), 3);
  }

  #[test]
  fn remove_staged_releases_only_that_preview() {
    let previews = PreviewRegistry::default();
    let mut stager = GalleryStager::default();
    stager.stage_files(&previews, three_files());
    let removed = parse_preview_url(&stager.pending()[1].preview_url()).unwrap();

    assert!(stager.remove_staged(1));

    let captions: Vec<_> = stager.pending().iter().map(|f| f.caption.as_str()).collect();
    assert_eq!(captions, vec!["sports day", "annual day"]);
    assert!(!previews.is_live(removed));
    assert_eq!(previews.len(), 2);
  }

  #[test]
  fn out_of_range_index_is_a_noop() {
    let previews = PreviewRegistry::default();
    let mut stager = GalleryStager::default();
    stager.stage_files(&previews, [file("a.jpg")]);
    assert!(!stager.remove_staged(5));
    assert!(!stager.update_caption(5, "x"));
    assert_eq!(stager.pending().len(), 1);
  }

  #[test]
  fn discard_releases_everything() {
    let previews = PreviewRegistry::default();
    let mut stager = GalleryStager::default();
    stager.stage_files(&previews, three_files());
    stager.discard();
    assert!(stager.is_empty());
    assert!(previews.is_empty());
  }

  #[test]
  fn dropping_the_stager_releases_previews() {
    let previews = PreviewRegistry::default();
    {
      let mut stager = GalleryStager::default();
      stager.stage_files(&previews, three_files());
    }
    assert!(previews.is_empty());
  }

  #[tokio::test]
  async fn commit_with_nothing_staged_is_refused() {
    let store = MemoryStore::seeded();
    let before = store.list_images().await.unwrap();
    let mut stager = GalleryStager::default();

    let err = stager.commit(&store, &IdGenerator::new()).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(store.list_images().await.unwrap(), before);
  }

  #[tokio::test]
  async fn commit_prepends_in_staged_order() {
    let store = MemoryStore::seeded();
    let previews = PreviewRegistry::default();
    let mut stager = GalleryStager::default();
    stager.stage_files(&previews, three_files());
    stager.update_caption(0, "Sports Day 2024");

    let committed = stager.commit(&store, &IdGenerator::new()).await.unwrap();
    assert_eq!(committed.len(), 3);
    assert!(stager.is_empty());

    let gallery = store.list_images().await.unwrap();
    assert_eq!(gallery.len(), 11);
    let alts: Vec<_> = gallery[..3].iter().map(|i| i.alt.as_str()).collect();
    assert_eq!(alts, vec!["Sports Day 2024", "science fair", "annual day"]);
    assert_eq!(gallery[0].category.as_deref(), Some(DEFAULT_CATEGORY));

    // Committed previews stay live; the images now own them.
    assert_eq!(previews.len(), 3);
    assert!(gallery[..3].iter().all(|i| previews.release_src(&i.src)));
  }
}
