//! Timestamp-derived entity identifiers.
//!
//! Ids are the decimal Unix timestamp in milliseconds at creation. A shared
//! [`IdGenerator`] bumps the value when two ids are requested within the same
//! millisecond, so every id it hands out is strictly greater than the last.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{NaiveDate, Utc};

/// Source of unique, monotonically increasing ids.
///
/// Share one generator (behind an `Arc`) between every writer of a store.
#[derive(Debug, Default)]
pub struct IdGenerator {
  last: AtomicI64,
}

impl IdGenerator {
  pub fn new() -> Self { Self::default() }

  /// Produce the next id.
  pub fn next_id(&self) -> String {
    let now = Utc::now().timestamp_millis();
    let mut prev = self.last.load(Ordering::Relaxed);
    loop {
      let candidate = now.max(prev + 1);
      match self.last.compare_exchange_weak(
        prev,
        candidate,
        Ordering::AcqRel,
        Ordering::Relaxed,
      ) {
        Ok(_) => return candidate.to_string(),
        Err(actual) => prev = actual,
      }
    }
  }
}

/// The calendar date stamped on newly created entities.
pub fn today() -> NaiveDate { Utc::now().date_naive() }
