//! Gallery operations that do not go through the stager.

use tracing::info;
use tresbs_core::{
  gallery::{GalleryImage, NewGalleryImage},
  id::{IdGenerator, today},
  store::ContentStore,
};

use crate::{Error, PreviewRegistry, Result, preview::PREVIEW_PREFIX};

/// Prepend an image given by URL. `src` and `alt` are required; a blank
/// category becomes `General`.
///
/// Preview URLs are refused: a preview belongs to the staged file or the
/// committed image it was created for, and only that owner may release it.
pub async fn add_image_by_url<S: ContentStore>(
  store: &S,
  ids: &IdGenerator,
  new: NewGalleryImage,
) -> Result<GalleryImage> {
  if new.src.trim().starts_with(PREVIEW_PREFIX) {
    return Err(Error::validation(
      "src must not be a preview URL; stage the file and commit it instead",
    ));
  }
  let image = new.into_image(ids.next_id(), today())?;
  store.create_image(image.clone()).await.map_err(Error::store)?;
  info!(id = %image.id, src = %image.src, "added gallery image");
  Ok(image)
}

/// Remove an image, releasing its preview if it was committed from the
/// stager. `None` if the id is absent.
pub async fn delete_image<S: ContentStore>(
  store: &S,
  previews: &PreviewRegistry,
  id: &str,
) -> Result<Option<GalleryImage>> {
  let removed = store.delete_image(id).await.map_err(Error::store)?;
  if let Some(image) = &removed {
    previews.release_src(&image.src);
    info!(%id, "deleted gallery image");
  }
  Ok(removed)
}
