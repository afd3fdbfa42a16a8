//! The notice highlight signal.
//!
//! A list view receives a target notice id (from `?highlight=<id>`), marks the
//! matching row and clears the mark after a fixed window:
//!
//! ```text
//! idle ──signal(id ∈ rows)──▶ highlighted(id) ──window elapses──▶ idle
//! ```
//!
//! Signalling the same id again restarts the window; a different id replaces
//! the current one at once. The clear timer is a task owned by the
//! [`Highlighter`] and aborted when it is re-signalled or dropped.
//!
//! The server does not run this state machine per request: `/notices` only
//! ships the target id and [`HIGHLIGHT_WINDOW`] in its list model
//! ([`crate::views::HighlightView`]). [`Highlighter`] is the reference model
//! of the rendering side, for Rust clients that display the list and for
//! pinning down the timing rules in tests.

use std::{
  sync::{Arc, Mutex, PoisonError},
  time::Duration,
};

use strum::Display;
use tokio::task::JoinHandle;

/// How long a row stays highlighted.
pub const HIGHLIGHT_WINDOW: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum HighlightState {
  Idle,
  Highlighted(String),
}

#[derive(Debug, Default)]
struct Shared {
  state:      Option<String>,
  /// Bumped on every signal so a stale timer never clears a newer highlight.
  generation: u64,
}

/// Owner of the highlight state and its clear timer.
///
/// Must be signalled from within a tokio runtime.
#[derive(Debug)]
pub struct Highlighter {
  shared: Arc<Mutex<Shared>>,
  timer:  Option<JoinHandle<()>>,
  window: Duration,
}

impl Default for Highlighter {
  fn default() -> Self { Self::new(HIGHLIGHT_WINDOW) }
}

impl Highlighter {
  pub fn new(window: Duration) -> Self {
    Self { shared: Arc::default(), timer: None, window }
  }

  pub fn state(&self) -> HighlightState {
    let shared = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
    match &shared.state {
      Some(id) => HighlightState::Highlighted(id.clone()),
      None => HighlightState::Idle,
    }
  }

  /// React to a (possibly absent) target id against the ids currently
  /// rendered. Returns `true` if a row is now highlighted.
  ///
  /// Any previous highlight is cleared first. A target that is not rendered
  /// leaves the highlighter idle.
  pub fn signal<I, S>(&mut self, target: Option<&str>, rendered: I) -> bool
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    self.cancel_timer();

    let found =
      target.filter(|t| rendered.into_iter().any(|id| id.as_ref() == *t));

    let generation = {
      let mut shared = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
      shared.generation += 1;
      shared.state = found.map(str::to_owned);
      shared.generation
    };

    if found.is_none() {
      return false;
    }

    // The deadline is fixed now, not when the task is first polled.
    let deadline = tokio::time::Instant::now() + self.window;
    let shared = Arc::clone(&self.shared);
    self.timer = Some(tokio::spawn(async move {
      tokio::time::sleep_until(deadline).await;
      let mut shared = shared.lock().unwrap_or_else(PoisonError::into_inner);
      if shared.generation == generation {
        shared.state = None;
      }
    }));
    true
  }

  /// Drop the highlight and its timer immediately.
  pub fn clear(&mut self) {
    self.cancel_timer();
    let mut shared = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
    shared.generation += 1;
    shared.state = None;
  }

  fn cancel_timer(&mut self) {
    if let Some(timer) = self.timer.take() {
      timer.abort();
    }
  }
}

impl Drop for Highlighter {
  fn drop(&mut self) { self.cancel_timer(); }
}

#[cfg(test)]
mod tests {
  use super::*;

  const ROWS: [&str; 3] = ["1", "2", "3"];

  fn highlighted(id: &str) -> HighlightState {
    HighlightState::Highlighted(id.to_owned())
  }

  /// Let spawned timers observe the advanced clock.
  async fn advance(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    tokio::task::yield_now().await;
  }

  #[tokio::test(start_paused = true)]
  async fn existing_id_is_highlighted_then_cleared() {
    let mut h = Highlighter::default();
    assert!(h.signal(Some("3"), ROWS));
    assert_eq!(h.state(), highlighted("3"));

    advance(2999).await;
    assert_eq!(h.state(), highlighted("3"));

    advance(1).await;
    assert_eq!(h.state(), HighlightState::Idle);
  }

  #[tokio::test(start_paused = true)]
  async fn unknown_id_is_ignored() {
    let mut h = Highlighter::default();
    assert!(!h.signal(Some("42"), ROWS));
    assert_eq!(h.state(), HighlightState::Idle);
  }

  #[tokio::test(start_paused = true)]
  async fn repeat_signal_restarts_window() {
    let mut h = Highlighter::default();
    h.signal(Some("2"), ROWS);
    advance(2000).await;
    h.signal(Some("2"), ROWS);
    advance(2000).await;
    assert_eq!(h.state(), highlighted("2"));
    advance(1000).await;
    assert_eq!(h.state(), HighlightState::Idle);
  }

  #[tokio::test(start_paused = true)]
  async fn new_id_supersedes_current() {
    let mut h = Highlighter::default();
    h.signal(Some("1"), ROWS);
    advance(1500).await;
    h.signal(Some("2"), ROWS);
    assert_eq!(h.state(), highlighted("2"));

    // The first timer would have fired here.
    advance(1600).await;
    assert_eq!(h.state(), highlighted("2"));
  }

  #[tokio::test(start_paused = true)]
  async fn missing_param_clears_active_highlight() {
    let mut h = Highlighter::default();
    h.signal(Some("1"), ROWS);
    assert!(!h.signal(None, ROWS));
    assert_eq!(h.state(), HighlightState::Idle);
  }

  #[tokio::test(start_paused = true)]
  async fn drop_aborts_timer() {
    let mut h = Highlighter::default();
    h.signal(Some("1"), ROWS);
    let timer = h.timer.as_ref().map(JoinHandle::abort_handle).unwrap();
    drop(h);
    tokio::task::yield_now().await;
    assert!(timer.is_finished());
  }

  #[test]
  fn state_names() {
    assert_eq!(HighlightState::Idle.to_string(), "idle");
  }
}
