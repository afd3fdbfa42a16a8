//! Admission inquiries submitted through the public admission form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{Error, Result, error::require};

/// Review state of an inquiry. New inquiries start as `Pending`.
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
pub enum AdmissionStatus {
  #[default]
  Pending,
  Reviewed,
  Approved,
  Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionInquiry {
  pub id:             String,
  pub name:           String,
  pub phone:          String,
  pub email:          String,
  pub address:        String,
  pub class_applying: String,
  pub message:        String,
  pub date:           NaiveDate,
  pub status:         AdmissionStatus,
}

/// A submission of the admission form. Everything except the message is
/// required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionSubmission {
  #[serde(default)]
  pub name:           String,
  #[serde(default)]
  pub phone:          String,
  #[serde(default)]
  pub email:          String,
  #[serde(default)]
  pub address:        String,
  #[serde(default)]
  pub class_applying: String,
  #[serde(default)]
  pub message:        String,
}

impl AdmissionSubmission {
  /// Validate required fields and that `class_applying` is one of `offered`.
  pub fn validate(&self, offered: &[&str]) -> Result<()> {
    require("name", &self.name)?;
    require("phone", &self.phone)?;
    require("email", &self.email)?;
    require("address", &self.address)?;
    require("class_applying", &self.class_applying)?;
    if !offered.contains(&self.class_applying.trim()) {
      return Err(Error::validation(format!(
        "class {:?} is not offered",
        self.class_applying
      )));
    }
    Ok(())
  }

  pub fn into_inquiry(
    self,
    offered: &[&str],
    id: String,
    date: NaiveDate,
  ) -> Result<AdmissionInquiry> {
    self.validate(offered)?;
    Ok(AdmissionInquiry {
      id,
      name: self.name.trim().to_owned(),
      phone: self.phone.trim().to_owned(),
      email: self.email.trim().to_owned(),
      address: self.address,
      class_applying: self.class_applying.trim().to_owned(),
      message: self.message,
      date,
      status: AdmissionStatus::Pending,
    })
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionPatch {
  pub status: Option<AdmissionStatus>,
}

impl AdmissionPatch {
  pub fn apply(self, inquiry: &mut AdmissionInquiry) {
    if let Some(v) = self.status {
      inquiry.status = v;
    }
  }
}
