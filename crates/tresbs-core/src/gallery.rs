//! Gallery images.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Result, error::require, notice::double_option};

/// Category given to images added without one.
pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
  pub id:       String,
  /// Remote URL or a preview reference served by the site.
  pub src:      String,
  /// Caption, also used as the image's alt text.
  pub alt:      String,
  pub category: Option<String>,
  pub date:     NaiveDate,
}

/// Direct URL entry from the admin gallery form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGalleryImage {
  #[serde(default)]
  pub src:      String,
  #[serde(default)]
  pub alt:      String,
  pub category: Option<String>,
}

impl NewGalleryImage {
  /// Both `src` and `alt` are required; a blank category becomes
  /// [`DEFAULT_CATEGORY`].
  pub fn into_image(self, id: String, date: NaiveDate) -> Result<GalleryImage> {
    require("src", &self.src)?;
    require("alt", &self.alt)?;
    let category = self
      .category
      .filter(|c| !c.trim().is_empty())
      .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned());
    Ok(GalleryImage {
      id,
      src: self.src.trim().to_owned(),
      alt: self.alt,
      category: Some(category),
      date,
    })
  }
}

/// Partial update for a gallery image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImagePatch {
  pub alt:      Option<String>,
  #[serde(default, deserialize_with = "double_option")]
  pub category: Option<Option<String>>,
}

impl GalleryImagePatch {
  pub fn validate(&self) -> Result<()> {
    if let Some(alt) = &self.alt {
      require("alt", alt)?;
    }
    Ok(())
  }

  pub fn apply(self, image: &mut GalleryImage) {
    if let Some(v) = self.alt {
      image.alt = v;
    }
    if let Some(v) = self.category {
      image.category = v;
    }
  }
}
