//! Notices: dated announcements shown in the ticker and on the notices pages.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Result, error::require};

// ─── Attachments ─────────────────────────────────────────────────────────────

/// The declared kind of a notice attachment.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
  #[default]
  Image,
  Pdf,
}

/// A file or URL attached to a notice. Any notice may carry at most one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
  /// URL or preview reference of the attached file.
  pub reference: String,
  #[serde(default)]
  pub kind:      AttachmentKind,
  /// Name offered to readers when downloading.
  pub name:      Option<String>,
}

impl Attachment {
  /// The kind used for display. A reference or name ending in `.pdf` is a
  /// PDF whatever the declared kind says.
  pub fn effective_kind(&self) -> AttachmentKind {
    let is_pdf_name = |s: &str| s.to_ascii_lowercase().ends_with(".pdf");
    if self.kind == AttachmentKind::Pdf
      || is_pdf_name(&self.reference)
      || self.name.as_deref().is_some_and(is_pdf_name)
    {
      AttachmentKind::Pdf
    } else {
      AttachmentKind::Image
    }
  }

  /// Download name, falling back to a generic one for PDFs.
  pub fn display_name(&self) -> Option<&str> {
    match (self.name.as_deref(), self.effective_kind()) {
      (Some(name), _) => Some(name),
      (None, AttachmentKind::Pdf) => Some("document.pdf"),
      (None, AttachmentKind::Image) => None,
    }
  }
}

// ─── Notice ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
  pub id:           String,
  pub title:        String,
  /// One- or two-line summary shown in lists.
  pub description:  String,
  /// Long-form body; paragraphs are separated by a blank line.
  pub full_content: String,
  pub date:         NaiveDate,
  pub attachment:   Option<Attachment>,
  pub is_new:       bool,
}

impl Notice {
  /// Split `full_content` into its paragraphs, skipping empty ones.
  pub fn paragraphs(&self) -> Vec<&str> {
    self
      .full_content
      .split("\n\n")
      .map(str::trim)
      .filter(|p| !p.is_empty())
      .collect()
  }
}

// ─── Draft ───────────────────────────────────────────────────────────────────

fn default_true() -> bool { true }

/// The add-notice form. Only the title is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeDraft {
  #[serde(default)]
  pub title:        String,
  pub description:  Option<String>,
  pub full_content: Option<String>,
  pub attachment:   Option<Attachment>,
  #[serde(default = "default_true")]
  pub is_new:       bool,
}

impl Default for NoticeDraft {
  fn default() -> Self {
    Self {
      title:        String::new(),
      description:  None,
      full_content: None,
      attachment:   None,
      is_new:       true,
    }
  }
}

impl NoticeDraft {
  pub fn titled(title: impl Into<String>) -> Self {
    Self { title: title.into(), ..Self::default() }
  }

  /// Turn the draft into a notice. Blank optional text falls back to the
  /// title.
  pub fn into_notice(self, id: String, date: NaiveDate) -> Result<Notice> {
    require("title", &self.title)?;
    let or_title = |text: Option<String>| {
      text.filter(|t| !t.trim().is_empty()).unwrap_or_else(|| self.title.clone())
    };
    Ok(Notice {
      id,
      description: or_title(self.description.clone()),
      full_content: or_title(self.full_content.clone()),
      title: self.title,
      date,
      attachment: self.attachment,
      is_new: self.is_new,
    })
  }
}

// ─── Patch ───────────────────────────────────────────────────────────────────

/// Deserialise a present-but-null field as `Some(None)` so a patch can clear
/// an optional value.
pub(crate) fn double_option<'de, D, T>(
  de: D,
) -> std::result::Result<Option<Option<T>>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Option::<T>::deserialize(de).map(Some)
}

/// Partial update for a notice; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticePatch {
  pub title:        Option<String>,
  pub description:  Option<String>,
  pub full_content: Option<String>,
  pub date:         Option<NaiveDate>,
  #[serde(default, deserialize_with = "double_option")]
  pub attachment:   Option<Option<Attachment>>,
  pub is_new:       Option<bool>,
}

impl NoticePatch {
  pub fn validate(&self) -> Result<()> {
    if let Some(title) = &self.title {
      require("title", title)?;
    }
    Ok(())
  }

  pub fn apply(self, notice: &mut Notice) {
    if let Some(v) = self.title {
      notice.title = v;
    }
    if let Some(v) = self.description {
      notice.description = v;
    }
    if let Some(v) = self.full_content {
      notice.full_content = v;
    }
    if let Some(v) = self.date {
      notice.date = v;
    }
    if let Some(v) = self.attachment {
      notice.attachment = v;
    }
    if let Some(v) = self.is_new {
      notice.is_new = v;
    }
  }
}

/// A whole edited notice expressed as a patch that overwrites every field.
impl From<Notice> for NoticePatch {
  fn from(n: Notice) -> Self {
    Self {
      title:        Some(n.title),
      description:  Some(n.description),
      full_content: Some(n.full_content),
      date:         Some(n.date),
      attachment:   Some(n.attachment),
      is_new:       Some(n.is_new),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Error;

  fn date() -> NaiveDate { NaiveDate::from_ymd_opt(2024, 12, 20).unwrap() }

  #[test]
  fn draft_defaults_text_to_title() {
    let notice = NoticeDraft::titled("Exam Update")
      .into_notice("1".into(), date())
      .unwrap();
    assert_eq!(notice.description, "Exam Update");
    assert_eq!(notice.full_content, "Exam Update");
    assert!(notice.is_new);
  }

  #[test]
  fn blank_description_counts_as_absent() {
    let draft = NoticeDraft {
      description: Some("   ".into()),
      full_content: Some("Body".into()),
      ..NoticeDraft::titled("Sports Day")
    };
    let notice = draft.into_notice("1".into(), date()).unwrap();
    assert_eq!(notice.description, "Sports Day");
    assert_eq!(notice.full_content, "Body");
  }

  #[test]
  fn blank_title_is_rejected() {
    let err = NoticeDraft::titled("  ").into_notice("1".into(), date());
    assert!(matches!(err, Err(Error::Validation(_))));
  }

  #[test]
  fn paragraphs_split_on_blank_lines() {
    let mut notice = NoticeDraft::titled("t").into_notice("1".into(), date()).unwrap();
    notice.full_content = "First.\n\nSecond\nline.\n\n\n\nThird.".into();
    assert_eq!(notice.paragraphs(), vec!["First.", "Second\nline.", "Third."]);
  }

  #[test]
  fn pdf_detected_from_extension() {
    let by_name = Attachment {
      reference: "https://example.com/files/42".into(),
      kind:      AttachmentKind::Image,
      name:      Some("Schedule.PDF".into()),
    };
    assert_eq!(by_name.effective_kind(), AttachmentKind::Pdf);

    let by_ref = Attachment {
      reference: "/files/calendar.pdf".into(),
      kind:      AttachmentKind::Image,
      name:      None,
    };
    assert_eq!(by_ref.effective_kind(), AttachmentKind::Pdf);
    assert_eq!(by_ref.display_name(), Some("document.pdf"));

    let image = Attachment {
      reference: "/img/sports.jpg".into(),
      kind:      AttachmentKind::Image,
      name:      None,
    };
    assert_eq!(image.effective_kind(), AttachmentKind::Image);
    assert_eq!(image.display_name(), None);
  }

  #[test]
  fn patch_can_clear_attachment() {
    let patch: NoticePatch =
      serde_json::from_str(r#"{"attachment": null}"#).unwrap();
    assert_eq!(patch.attachment, Some(None));

    let untouched: NoticePatch = serde_json::from_str("{}").unwrap();
    assert_eq!(untouched.attachment, None);
  }

  #[test]
  fn patch_rejects_blank_title() {
    let patch = NoticePatch { title: Some(" ".into()), ..Default::default() };
    assert!(patch.validate().is_err());
  }
}
