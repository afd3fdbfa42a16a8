//! Router tests for the JSON API, driven through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt as _;
use tresbs_admin::AdminContext;
use tresbs_core::store::ContentStore;
use tresbs_store_memory::MemoryStore;

use super::*;

fn context() -> AdminContext<MemoryStore> {
  AdminContext::new(Arc::new(MemoryStore::seeded()))
}

async fn call(
  router: Router,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> (StatusCode, Value) {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(v) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(v.to_string())
    }
    None => Body::empty(),
  };
  let resp = router.oneshot(builder.body(body).unwrap()).await.unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  let value = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, value)
}

// ── Public ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn public_lists_notices_newest_first() {
  let (status, body) = call(public_router(context()), "GET", "/notices", None).await;
  assert_eq!(status, StatusCode::OK);
  let notices = body.as_array().unwrap();
  assert_eq!(notices.len(), 5);
  assert_eq!(notices[0]["id"], "1");
}

#[tokio::test]
async fn public_unknown_notice_is_404() {
  let (status, body) =
    call(public_router(context()), "GET", "/notices/404", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].as_str().unwrap().contains("404"));
}

#[tokio::test]
async fn public_router_has_no_write_routes() {
  let (status, _) = call(
    public_router(context()),
    "POST",
    "/notices",
    Some(json!({ "title": "Sneaky" })),
  )
  .await;
  assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn gallery_filters_by_category() {
  let (_, body) =
    call(public_router(context()), "GET", "/gallery?category=Events", None).await;
  let images = body.as_array().unwrap();
  assert_eq!(images.len(), 2);
  assert!(images.iter().all(|i| i["category"] == "Events"));
}

// ── Admin notices ───────────────────────────────────────────────────────────

#[tokio::test]
async fn create_notice_with_blank_title_is_422() {
  let cx = context();
  let (status, body) = call(
    admin_router(cx.clone()),
    "POST",
    "/notices",
    Some(json!({ "title": "   " })),
  )
  .await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
  assert!(body["error"].is_string());
  assert_eq!(cx.store.list_notices().await.unwrap().len(), 5);
}

#[tokio::test]
async fn create_notice_prepends_with_defaults() {
  let cx = context();
  let (status, body) = call(
    admin_router(cx.clone()),
    "POST",
    "/notices",
    Some(json!({ "title": "Exam Update" })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["description"], "Exam Update");
  assert_eq!(body["full_content"], "Exam Update");
  assert_eq!(body["is_new"], true);

  let first = &cx.store.list_notices().await.unwrap()[0];
  assert_eq!(Some(first.id.as_str()), body["id"].as_str());
}

#[tokio::test]
async fn patch_notice_and_missing_id() {
  let cx = context();
  let (status, body) = call(
    admin_router(cx.clone()),
    "PATCH",
    "/notices/2",
    Some(json!({ "title": "Champions!", "attachment": null })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["changed"], true);
  assert_eq!(body["item"]["title"], "Champions!");
  assert!(body["item"]["attachment"].is_null());

  let (status, body) = call(
    admin_router(cx),
    "PATCH",
    "/notices/nope",
    Some(json!({ "title": "x" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "changed": false }));
}

#[tokio::test]
async fn delete_notice_twice() {
  let cx = context();
  let (_, first) = call(admin_router(cx.clone()), "DELETE", "/notices/3", None).await;
  let (_, second) = call(admin_router(cx), "DELETE", "/notices/3", None).await;
  assert_eq!(first["changed"], true);
  assert_eq!(second["changed"], false);
}

// ── Admin gallery, messages, admissions ─────────────────────────────────────

#[tokio::test]
async fn create_image_requires_alt() {
  let (status, _) = call(
    admin_router(context()),
    "POST",
    "/gallery",
    Some(json!({ "src": "https://example.com/x.jpg" })),
  )
  .await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn toggle_read_flips_flag() {
  let cx = context();
  let (status, body) =
    call(admin_router(cx.clone()), "POST", "/messages/1/toggle-read", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["item"]["is_read"], true);

  let (_, unread) = call(admin_router(cx), "GET", "/messages?unread=true", None).await;
  assert_eq!(unread.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_admission_is_404() {
  let (status, _) =
    call(admin_router(context()), "GET", "/admissions/none", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}
