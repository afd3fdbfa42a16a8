//! Contact messages received through the public contact form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Result, error::require};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
  pub id:      String,
  pub name:    String,
  pub email:   String,
  pub phone:   String,
  pub message: String,
  pub date:    NaiveDate,
  pub is_read: bool,
}

/// A submission of the contact form. Name, email and message are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
  #[serde(default)]
  pub name:    String,
  #[serde(default)]
  pub email:   String,
  #[serde(default)]
  pub phone:   String,
  #[serde(default)]
  pub message: String,
}

impl ContactSubmission {
  pub fn validate(&self) -> Result<()> {
    require("name", &self.name)?;
    require("email", &self.email)?;
    require("message", &self.message)
  }

  /// Build an unread message from a validated submission.
  pub fn into_message(self, id: String, date: NaiveDate) -> Result<ContactMessage> {
    self.validate()?;
    Ok(ContactMessage {
      id,
      name: self.name.trim().to_owned(),
      email: self.email.trim().to_owned(),
      phone: self.phone.trim().to_owned(),
      message: self.message,
      date,
      is_read: false,
    })
  }
}

/// Partial update for a message; only the read flag is mutable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePatch {
  pub is_read: Option<bool>,
}

impl MessagePatch {
  pub fn apply(self, message: &mut ContactMessage) {
    if let Some(v) = self.is_read {
      message.is_read = v;
    }
  }
}

/// Number of messages not yet read. Always derived, never cached.
pub fn unread_count(messages: &[ContactMessage]) -> usize {
  messages.iter().filter(|m| !m.is_read).count()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn phone_is_optional() {
    let submission = ContactSubmission {
      name:    "Ram Sharma".into(),
      email:   "ram@example.com".into(),
      phone:   String::new(),
      message: "Bus routes?".into(),
    };
    let date = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
    let message = submission.into_message("1".into(), date).unwrap();
    assert!(!message.is_read);
    assert_eq!(message.phone, "");
  }

  #[test]
  fn message_body_is_required() {
    let submission = ContactSubmission {
      name: "Ram".into(),
      email: "ram@example.com".into(),
      ..Default::default()
    };
    assert!(submission.validate().is_err());
  }
}
