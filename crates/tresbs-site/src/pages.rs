//! Public pages, served as JSON page models.
//!
//! | Path            | Model |
//! |-----------------|-------|
//! | `/`             | [`HomePage`] |
//! | `/about`        | [`AboutPage`] |
//! | `/academics`    | [`AcademicsPage`] |
//! | `/admission`    | [`AdmissionPage`] |
//! | `/gallery`      | [`GalleryPage`] |
//! | `/contact`      | [`ContactPage`] |
//! | `/notices`      | [`NoticeListView`], optional `?highlight=<id>` |
//! | `/notices/{id}` | [`NoticeDetailView`], 404 if not found |
//! | `/admin`        | [`AdminEntry`] |

use std::collections::BTreeSet;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::{StatusCode, Uri},
  response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tresbs_core::{
  gallery::GalleryImage,
  notice::Notice,
  school::{AdmissionStep, Facility, Leader, SchoolProfile, Subjects},
  store::ContentStore,
  views::{NoticeDetailView, NoticeListView, NoticeRow, TickerEntry, ticker},
};

use crate::{AppState, error::Error};

/// Notices shown on the home page.
pub const HOME_NOTICES: usize = 3;
/// Gallery images shown on the home page.
pub const HOME_GALLERY: usize = 4;

pub const OFFICE_HOURS: &str = "Sun-Fri: 10:00 AM - 5:00 PM";

async fn load_notices<S: ContentStore>(
  state: &AppState<S>,
) -> Result<Vec<Notice>, Error> {
  state.admin.store.list_notices().await.map_err(Error::store)
}

async fn load_images<S: ContentStore>(
  state: &AppState<S>,
) -> Result<Vec<GalleryImage>, Error> {
  state.admin.store.list_images().await.map_err(Error::store)
}

// ─── Home ────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HomePage {
  pub profile:         SchoolProfile,
  pub ticker:          Vec<TickerEntry>,
  pub latest_notices:  Vec<NoticeRow>,
  pub facilities:      Vec<Facility>,
  pub gallery_preview: Vec<GalleryImage>,
}

/// `GET /`
pub async fn home<S: ContentStore>(
  State(state): State<AppState<S>>,
) -> Result<Json<HomePage>, Error> {
  let notices = load_notices(&state).await?;
  let mut gallery = load_images(&state).await?;
  gallery.truncate(HOME_GALLERY);

  let mut latest =
    NoticeListView::build(&notices, None, state.config.highlight_window()).notices;
  latest.truncate(HOME_NOTICES);

  Ok(Json(HomePage {
    profile:         state.school.profile.clone(),
    ticker:          ticker(&notices),
    latest_notices:  latest,
    facilities:      state.school.facilities.clone(),
    gallery_preview: gallery,
  }))
}

// ─── About ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AboutPage {
  pub profile: SchoolProfile,
  pub leaders: Vec<Leader>,
}

/// `GET /about`
pub async fn about<S: ContentStore>(State(state): State<AppState<S>>) -> Json<AboutPage> {
  Json(AboutPage {
    profile: state.school.profile.clone(),
    leaders: state.school.leaders.clone(),
  })
}

// ─── Academics ───────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ClassLevels {
  pub pre_primary: Vec<String>,
  pub primary:     Vec<String>,
  pub secondary:   Vec<String>,
}

impl ClassLevels {
  /// Nursery to UKG, then Class 1 to 5, then the rest.
  pub fn split(classes: &[String]) -> Self {
    let n = classes.len();
    let part = |from: usize, to: usize| classes[from.min(n)..to.min(n)].to_vec();
    Self {
      pre_primary: part(0, 3),
      primary:     part(3, 8),
      secondary:   part(8, n),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct AcademicsPage {
  pub levels:   ClassLevels,
  pub subjects: Subjects,
}

/// `GET /academics`
pub async fn academics<S: ContentStore>(
  State(state): State<AppState<S>>,
) -> Json<AcademicsPage> {
  Json(AcademicsPage {
    levels:   ClassLevels::split(&state.school.classes),
    subjects: state.school.subjects.clone(),
  })
}

// ─── Admission ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Eligibility {
  pub level:       &'static str,
  pub age:         &'static str,
  pub requirement: &'static str,
}

pub const ELIGIBILITY: &[Eligibility] = &[
  Eligibility { level: "Nursery", age: "3+ years", requirement: "No formal education required" },
  Eligibility { level: "LKG", age: "4+ years", requirement: "Nursery completion preferred" },
  Eligibility { level: "UKG", age: "5+ years", requirement: "LKG completion required" },
  Eligibility {
    level:       "Class 1-5",
    age:         "Age appropriate",
    requirement: "Previous class completion certificate",
  },
  Eligibility {
    level:       "Class 6-8",
    age:         "Age appropriate",
    requirement: "Transfer certificate & marksheet",
  },
  Eligibility {
    level:       "Class 9-10",
    age:         "Age appropriate",
    requirement: "Class 8/9 marksheet & TC",
  },
];

#[derive(Debug, Serialize)]
pub struct AdmissionPage {
  pub classes:     Vec<String>,
  pub steps:       Vec<AdmissionStep>,
  pub eligibility: &'static [Eligibility],
}

/// `GET /admission`
pub async fn admission<S: ContentStore>(
  State(state): State<AppState<S>>,
) -> Json<AdmissionPage> {
  Json(AdmissionPage {
    classes:     state.school.classes.clone(),
    steps:       state.school.admission_steps.clone(),
    eligibility: ELIGIBILITY,
  })
}

// ─── Gallery ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GalleryPage {
  /// Distinct categories, sorted.
  pub categories: Vec<String>,
  pub images:     Vec<GalleryImage>,
}

/// `GET /gallery`
pub async fn gallery<S: ContentStore>(
  State(state): State<AppState<S>>,
) -> Result<Json<GalleryPage>, Error> {
  let images = load_images(&state).await?;
  let categories: BTreeSet<_> = images.iter().filter_map(|i| i.category.clone()).collect();
  Ok(Json(GalleryPage { categories: categories.into_iter().collect(), images }))
}

// ─── Contact ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ContactPage {
  pub address:      String,
  pub phone:        String,
  pub email:        String,
  pub office_hours: &'static str,
}

/// `GET /contact`
pub async fn contact<S: ContentStore>(
  State(state): State<AppState<S>>,
) -> Json<ContactPage> {
  let profile = &state.school.profile;
  Json(ContactPage {
    address:      profile.address.clone(),
    phone:        profile.phone.clone(),
    email:        profile.email.clone(),
    office_hours: OFFICE_HOURS,
  })
}

// ─── Notices ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct NoticeParams {
  pub highlight: Option<String>,
}

/// `GET /notices[?highlight=<id>]`
pub async fn notices<S: ContentStore>(
  State(state): State<AppState<S>>,
  Query(params): Query<NoticeParams>,
) -> Result<Json<NoticeListView>, Error> {
  let notices = load_notices(&state).await?;
  Ok(Json(NoticeListView::build(
    &notices,
    params.highlight.as_deref(),
    state.config.highlight_window(),
  )))
}

/// `GET /notices/{id}`
pub async fn notice_detail<S: ContentStore>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Json<NoticeDetailView>, Error> {
  let notices = load_notices(&state).await?;
  NoticeDetailView::build(&notices, &id)
    .map(Json)
    .ok_or_else(|| Error::NotFound(format!("notice {id} not found")))
}

// ─── Admin entry ─────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AdminEntry {
  pub school:      String,
  pub login:       &'static str,
  /// `true` when any non-blank credentials are accepted.
  pub placeholder: bool,
}

/// `GET /admin`
pub async fn admin_entry<S: ContentStore>(
  State(state): State<AppState<S>>,
) -> Json<AdminEntry> {
  Json(AdminEntry {
    school:      state.school.profile.name.clone(),
    login:       "/admin/login",
    placeholder: state.auth.is_placeholder(),
  })
}

// ─── Not found ───────────────────────────────────────────────────────────────

pub async fn not_found(uri: Uri) -> impl IntoResponse {
  (
    StatusCode::NOT_FOUND,
    Json(json!({ "error": format!("no page at {}", uri.path()), "home": "/" })),
  )
}
