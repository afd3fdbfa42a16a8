//! Static school information rendered on the public pages.
//!
//! Unlike notices, gallery images and messages, none of this is editable at
//! runtime.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolProfile {
  pub name:        String,
  pub short_name:  String,
  pub tagline:     String,
  pub address:     String,
  pub phone:       String,
  pub email:       String,
  pub website:     String,
  /// Year of establishment.
  pub established: u16,
  pub students:    String,
  pub teachers:    String,
  pub branches:    u8,
}

/// A member of the school leadership and their welcome message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
  pub name:     String,
  pub position: String,
  pub image:    String,
  pub message:  String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
  pub icon:        String,
  pub title:       String,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subjects {
  pub primary:   Vec<String>,
  pub secondary: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionStep {
  pub title:       String,
  pub description: String,
}

/// Everything the static pages need, bundled so the site owns one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolInfo {
  pub profile:         SchoolProfile,
  pub leaders:         Vec<Leader>,
  pub classes:         Vec<String>,
  pub subjects:        Subjects,
  pub facilities:      Vec<Facility>,
  pub admission_steps: Vec<AdmissionStep>,
}

impl SchoolInfo {
  pub fn offered_classes(&self) -> Vec<&str> {
    self.classes.iter().map(String::as_str).collect()
  }
}
