use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::SearchResults;
use crate::search::{SearchDebouncer, is_effective_query};

/// Lifecycle of the current search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SearchStatus {
    /// No effective query; the results view shows its idle hint.
    #[default]
    Idle,
    /// Keystrokes received, debounce deadline not yet passed.
    Pending,
    /// An effective query settled and was handed to the host to fetch.
    InFlight,
    Loaded,
    Failed,
}

/// Grouped result sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchSection {
    Tasks,
    Projects,
    Users,
}

impl SearchSection {
    pub const DISPLAY_ORDER: [Self; 3] = [Self::Tasks, Self::Projects, Self::Users];

    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Tasks => "Tasks",
            Self::Projects => "Projects",
            Self::Users => "Users",
        }
    }
}

/// Debounced search front end.
///
/// The controller never performs IO: [`poll_query`](Self::poll_query) tells
/// the host what to fetch, and the host reports back with
/// [`results_loaded`](Self::results_loaded) or
/// [`fetch_failed`](Self::fetch_failed). Terms shorter than the minimum
/// query length settle through the debouncer but clear the view back to idle
/// instead of producing a fetch.
#[derive(Debug, Clone, Default)]
pub struct SearchController {
    debouncer: SearchDebouncer,
    status: SearchStatus,
    effective_query: Option<String>,
    results: Option<SearchResults>,
}

impl SearchController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    #[must_use]
    pub fn effective_query(&self) -> Option<&str> {
        self.effective_query.as_deref()
    }

    #[must_use]
    pub fn results(&self) -> Option<&SearchResults> {
        self.results.as_ref()
    }

    /// Records a keystroke's resulting term.
    pub fn input_changed(&mut self, term: impl Into<String>, now_seconds: f64) {
        self.debouncer.submit(term, now_seconds);
        self.status = SearchStatus::Pending;
    }

    /// Releases the settled query the host should fetch, if any.
    ///
    /// A settled term below the minimum length resets the controller to the
    /// idle state with no results; nothing is returned in that case.
    pub fn poll_query(&mut self, now_seconds: f64) -> Option<String> {
        let term = self.debouncer.poll(now_seconds)?;
        if !is_effective_query(&term) {
            self.effective_query = None;
            self.results = None;
            self.status = SearchStatus::Idle;
            return None;
        }
        debug!(query = %term, "search query settled");
        self.effective_query = Some(term.clone());
        self.status = SearchStatus::InFlight;
        Some(term)
    }

    /// Reports the fetch result for the in-flight query.
    pub fn results_loaded(&mut self, results: SearchResults) {
        self.results = Some(results);
        self.status = SearchStatus::Loaded;
    }

    /// Reports a fetch failure; previous results are dropped.
    pub fn fetch_failed(&mut self) {
        self.results = None;
        self.status = SearchStatus::Failed;
    }

    /// Non-empty result sections in display order.
    #[must_use]
    pub fn sections(&self) -> Vec<SearchSection> {
        let Some(results) = self.results.as_ref() else {
            return Vec::new();
        };
        SearchSection::DISPLAY_ORDER
            .into_iter()
            .filter(|section| match section {
                SearchSection::Tasks => !results.tasks.is_empty(),
                SearchSection::Projects => !results.projects.is_empty(),
                SearchSection::Users => !results.users.is_empty(),
            })
            .collect()
    }

    /// The query an empty result set was loaded for, if that is the current
    /// state; hosts render the "no results" message from it.
    #[must_use]
    pub fn no_results_for(&self) -> Option<&str> {
        if self.status != SearchStatus::Loaded {
            return None;
        }
        let results = self.results.as_ref()?;
        if !results.is_empty() {
            return None;
        }
        self.effective_query.as_deref()
    }

    /// The unmount path: drops any pending term without releasing it.
    pub fn teardown(&mut self) {
        self.debouncer.cancel();
    }
}
