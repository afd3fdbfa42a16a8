//! Core types and trait definitions for the TRESBS school site.
//!
//! This crate is free of HTTP and storage dependencies. Every other crate in
//! the workspace depends on it.

// Native `async fn` in traits; see `store`.
#![allow(async_fn_in_trait)]

pub mod admission;
pub mod error;
pub mod gallery;
pub mod highlight;
pub mod id;
pub mod message;
pub mod notice;
pub mod school;
pub mod store;
pub mod views;

pub use error::{Error, Result};
