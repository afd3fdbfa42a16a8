//! Read-only projections of the notice list for the public pages: the ticker
//! strip, the list page and the detail page.

use std::time::Duration;

use chrono::NaiveDate;
use serde::Serialize;

use crate::notice::{Attachment, AttachmentKind, Notice};

/// How many other notices the detail page links to.
pub const OTHER_NOTICES: usize = 2;

/// Link from a ticker entry to its row on the list page.
pub fn highlight_href(id: &str) -> String { format!("/notices?highlight={id}") }

pub fn detail_href(id: &str) -> String { format!("/notices/{id}") }

// ─── Ticker ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerEntry {
  pub id:     String,
  pub title:  String,
  pub is_new: bool,
  /// Activating the entry navigates here, carrying the highlight signal.
  pub href:   String,
}

pub fn ticker(notices: &[Notice]) -> Vec<TickerEntry> {
  notices
    .iter()
    .map(|n| TickerEntry {
      id:     n.id.clone(),
      title:  n.title.clone(),
      is_new: n.is_new,
      href:   highlight_href(&n.id),
    })
    .collect()
}

// ─── Attachment ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentView {
  pub reference: String,
  /// The effective kind, after extension sniffing.
  pub kind:      AttachmentKind,
  pub name:      Option<String>,
}

impl From<&Attachment> for AttachmentView {
  fn from(a: &Attachment) -> Self {
    Self {
      reference: a.reference.clone(),
      kind:      a.effective_kind(),
      name:      a.display_name().map(str::to_owned),
    }
  }
}

// ─── List page ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeRow {
  pub id:          String,
  pub title:       String,
  pub description: String,
  pub date:        NaiveDate,
  pub is_new:      bool,
  pub attachment:  Option<AttachmentView>,
  pub href:        String,
  pub highlighted: bool,
}

/// The highlight treatment a client should apply to one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightView {
  pub id:        String,
  pub window_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeListView {
  pub notices:   Vec<NoticeRow>,
  pub highlight: Option<HighlightView>,
}

impl NoticeListView {
  /// Build the list page. A `highlight` id that matches no row is ignored.
  pub fn build(
    notices: &[Notice],
    highlight: Option<&str>,
    window: Duration,
  ) -> Self {
    let target = highlight.filter(|id| notices.iter().any(|n| n.id == *id));
    let rows = notices
      .iter()
      .map(|n| NoticeRow {
        id:          n.id.clone(),
        title:       n.title.clone(),
        description: n.description.clone(),
        date:        n.date,
        is_new:      n.is_new,
        attachment:  n.attachment.as_ref().map(AttachmentView::from),
        href:        detail_href(&n.id),
        highlighted: target == Some(n.id.as_str()),
      })
      .collect();

    Self {
      notices:   rows,
      highlight: target.map(|id| HighlightView {
        id:        id.to_owned(),
        window_ms: u64::try_from(window.as_millis()).unwrap_or(u64::MAX),
      }),
    }
  }
}

// ─── Detail page ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeLink {
  pub id:    String,
  pub title: String,
  pub date:  NaiveDate,
  pub href:  String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeDetailView {
  pub id:          String,
  pub title:       String,
  pub description: String,
  pub date:        NaiveDate,
  pub is_new:      bool,
  pub attachment:  Option<AttachmentView>,
  pub paragraphs:  Vec<String>,
  pub others:      Vec<NoticeLink>,
}

impl NoticeDetailView {
  /// `None` when no notice has this id.
  pub fn build(notices: &[Notice], id: &str) -> Option<Self> {
    let notice = notices.iter().find(|n| n.id == id)?;
    let others = notices
      .iter()
      .filter(|n| n.id != id)
      .take(OTHER_NOTICES)
      .map(|n| NoticeLink {
        id:    n.id.clone(),
        title: n.title.clone(),
        date:  n.date,
        href:  detail_href(&n.id),
      })
      .collect();

    Some(Self {
      id: notice.id.clone(),
      title: notice.title.clone(),
      description: notice.description.clone(),
      date: notice.date,
      is_new: notice.is_new,
      attachment: notice.attachment.as_ref().map(AttachmentView::from),
      paragraphs: notice.paragraphs().into_iter().map(str::to_owned).collect(),
      others,
    })
  }
}
