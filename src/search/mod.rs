//! Deterministic search-input debouncing.
//!
//! The debouncer is clock-agnostic: callers pass the current time in seconds
//! on every call, the same explicit-clock style the scroll machine uses for
//! frames. No threads, no timers.

/// Quiet period after the last keystroke before a term settles.
pub const DEBOUNCE_SECONDS: f64 = 0.5;

/// Terms shorter than this never become an effective query.
pub const MIN_QUERY_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq)]
struct PendingTerm {
    term: String,
    deadline_seconds: f64,
}

/// Trailing-edge debouncer for raw search input.
///
/// Every [`submit`](Self::submit) replaces the pending term and re-arms the
/// deadline; [`poll`](Self::poll) releases the term once the quiet period has
/// elapsed. Each settled term is released exactly once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchDebouncer {
    pending: Option<PendingTerm>,
}

impl SearchDebouncer {
    /// Records a keystroke's resulting term at `now_seconds`.
    pub fn submit(&mut self, term: impl Into<String>, now_seconds: f64) {
        self.pending = Some(PendingTerm {
            term: term.into(),
            deadline_seconds: now_seconds + DEBOUNCE_SECONDS,
        });
    }

    /// Releases the pending term once its deadline has passed.
    pub fn poll(&mut self, now_seconds: f64) -> Option<String> {
        let deadline = self.pending.as_ref()?.deadline_seconds;
        if now_seconds < deadline {
            return None;
        }
        self.pending.take().map(|pending| pending.term)
    }

    /// Drops the pending term without releasing it (the teardown path).
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Whether a settled term is long enough to query.
#[must_use]
pub fn is_effective_query(term: &str) -> bool {
    term.chars().count() >= MIN_QUERY_LEN
}
