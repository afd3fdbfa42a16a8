//! One administrator's session: the sign-in flag, the active management tab,
//! the notice editor and the gallery stager.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{info, warn};
use tresbs_core::{
  admission::AdmissionStatus,
  message::unread_count,
  store::ContentStore,
};

use crate::{
  Error, Result, auth::Authenticator, editor::NoticeEditor,
  stager::GalleryStager,
};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AdminTab {
  #[default]
  Notices,
  Gallery,
  Messages,
  Admissions,
}

/// Badge counts shown next to each tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabCounts {
  pub notices:            usize,
  pub gallery:            usize,
  pub unread_messages:    usize,
  pub pending_admissions: usize,
}

#[derive(Debug, Default)]
pub struct AdminSession {
  /// Signed-in user name; `None` means not authenticated.
  user:       Option<String>,
  active_tab: AdminTab,
  pub editor: NoticeEditor,
  pub stager: GalleryStager,
}

impl AdminSession {
  pub fn is_authenticated(&self) -> bool { self.user.is_some() }

  pub fn user(&self) -> Option<&str> { self.user.as_deref() }

  pub fn active_tab(&self) -> AdminTab { self.active_tab }

  /// Check the credentials and mark the session authenticated. A rejected
  /// pair leaves the session as it was.
  pub fn login(
    &mut self,
    auth: &dyn Authenticator,
    username: &str,
    password: &str,
  ) -> Result<()> {
    if let Err(e) = auth.verify(username, password) {
      warn!(%username, "admin login rejected");
      return Err(e);
    }
    if auth.is_placeholder() {
      warn!(%username, "admin login accepted by placeholder authenticator");
    } else {
      info!(%username, "admin logged in");
    }
    self.user = Some(username.to_owned());
    Ok(())
  }

  /// Sign out and tear down the editor buffers and staged files.
  pub fn logout(&mut self) {
    if let Some(user) = self.user.take() {
      info!(username = %user, "admin logged out");
    }
    self.active_tab = AdminTab::default();
    self.editor = NoticeEditor::default();
    self.stager.discard();
  }

  pub fn require_auth(&self) -> Result<()> {
    if self.is_authenticated() { Ok(()) } else { Err(Error::Unauthorized) }
  }

  pub fn select_tab(&mut self, tab: AdminTab) { self.active_tab = tab; }

  pub async fn tab_counts<S: ContentStore>(&self, store: &S) -> Result<TabCounts> {
    let notices = store.list_notices().await.map_err(Error::store)?;
    let gallery = store.list_images().await.map_err(Error::store)?;
    let messages = store.list_messages().await.map_err(Error::store)?;
    let admissions = store.list_admissions().await.map_err(Error::store)?;
    Ok(TabCounts {
      notices:            notices.len(),
      gallery:            gallery.len(),
      unread_messages:    unread_count(&messages),
      pending_admissions: admissions
        .iter()
        .filter(|a| a.status == AdmissionStatus::Pending)
        .count(),
    })
  }
}
