//! JSON CRUD API for the TRESBS content store.
//!
//! Exposes two axum [`Router`]s backed by any [`ContentStore`]:
//!
//! - [`public_router`]: read-only notices and gallery;
//! - [`admin_router`]: full CRUD over notices, gallery, messages and
//!   admissions.
//!
//! Authentication of the admin router is the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", tresbs_api::public_router(cx.clone()))
//! .nest("/api/admin", tresbs_api::admin_router(cx).route_layer(auth))
//! ```

pub mod admissions;
pub mod error;
pub mod gallery;
pub mod messages;
pub mod notices;

use axum::{
  Router,
  routing::{get, post},
};
use serde::Serialize;
use tresbs_admin::AdminContext;
use tresbs_core::store::ContentStore;

pub use error::ApiError;

/// Body of an admin mutation. `changed: false` means the id was absent and
/// nothing happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Changed<T> {
  pub changed: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub item:    Option<T>,
}

impl<T> From<Option<T>> for Changed<T> {
  fn from(item: Option<T>) -> Self { Self { changed: item.is_some(), item } }
}

/// Read-only routes for the public site.
pub fn public_router<S>(cx: AdminContext<S>) -> Router<()>
where
  S: ContentStore + 'static,
{
  Router::new()
    .route("/notices", get(notices::list::<S>))
    .route("/notices/{id}", get(notices::get_one::<S>))
    .route("/gallery", get(gallery::list::<S>))
    .route("/gallery/{id}", get(gallery::get_one::<S>))
    .with_state(cx)
}

/// Full CRUD routes for the admin screen.
pub fn admin_router<S>(cx: AdminContext<S>) -> Router<()>
where
  S: ContentStore + 'static,
{
  Router::new()
    // Notices
    .route("/notices", get(notices::list::<S>).post(notices::create::<S>))
    .route(
      "/notices/{id}",
      get(notices::get_one::<S>)
        .patch(notices::update::<S>)
        .delete(notices::delete::<S>),
    )
    // Gallery
    .route("/gallery", get(gallery::list::<S>).post(gallery::create::<S>))
    .route(
      "/gallery/{id}",
      get(gallery::get_one::<S>)
        .patch(gallery::update::<S>)
        .delete(gallery::delete::<S>),
    )
    // Messages
    .route("/messages", get(messages::list::<S>))
    .route(
      "/messages/{id}",
      get(messages::get_one::<S>)
        .patch(messages::update::<S>)
        .delete(messages::delete::<S>),
    )
    .route("/messages/{id}/toggle-read", post(messages::toggle_read::<S>))
    // Admissions
    .route("/admissions", get(admissions::list::<S>))
    .route(
      "/admissions/{id}",
      get(admissions::get_one::<S>)
        .patch(admissions::update::<S>)
        .delete(admissions::delete::<S>),
    )
    .with_state(cx)
}

#[cfg(test)]
mod tests;
