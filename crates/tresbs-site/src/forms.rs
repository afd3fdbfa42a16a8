//! The public contact and admission forms.
//!
//! Both validate first, then wait out the configured submission delay before
//! recording the entry. The delay is a plain `sleep` inside the handler
//! future, so it is cancelled with the request when the client disconnects.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::info;
use tresbs_core::{
  admission::AdmissionSubmission,
  id::today,
  message::ContactSubmission,
  store::ContentStore,
};

use crate::{AppState, error::Error};

/// Acknowledgement shown after a successful submission.
#[derive(Debug, Serialize)]
pub struct Confirmation {
  pub id:          String,
  pub title:       &'static str,
  pub description: &'static str,
}

/// `POST /contact`
pub async fn contact<S: ContentStore>(
  State(state): State<AppState<S>>,
  Json(form): Json<ContactSubmission>,
) -> Result<(StatusCode, Json<Confirmation>), Error> {
  form.validate()?;
  tokio::time::sleep(state.config.submit_delay()).await;

  let message = form.into_message(state.admin.ids.next_id(), today())?;
  let id = state
    .admin
    .store
    .create_message(message)
    .await
    .map_err(Error::store)?;
  info!(%id, "contact message received");

  Ok((StatusCode::CREATED, Json(Confirmation {
    id,
    title: "Message Sent!",
    description: "Thank you for contacting us. We will get back to you soon.",
  })))
}

/// `POST /admission`
pub async fn admission<S: ContentStore>(
  State(state): State<AppState<S>>,
  Json(form): Json<AdmissionSubmission>,
) -> Result<(StatusCode, Json<Confirmation>), Error> {
  let offered = state.school.offered_classes();
  form.validate(&offered)?;
  tokio::time::sleep(state.config.submit_delay()).await;

  let inquiry = form.into_inquiry(&offered, state.admin.ids.next_id(), today())?;
  let id = state
    .admin
    .store
    .create_admission(inquiry)
    .await
    .map_err(Error::store)?;
  info!(%id, "admission inquiry received");

  Ok((StatusCode::CREATED, Json(Confirmation {
    id,
    title: "Application Submitted!",
    description: "We have received your admission inquiry. Our team will \
                  contact you soon.",
  })))
}
