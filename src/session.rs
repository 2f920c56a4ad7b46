//! Last-query-wins session state.
//!
//! A dashboard may issue overlapping queries; only the newest one may
//! publish its outcome. [`Session::begin`] hands out a ticket and
//! [`Session::complete`] discards outcomes whose ticket is no longer
//! current, so a slow stale response can never overwrite a newer one.

use crate::dashboard::DashboardView;
use crate::error::Result;

/// Ticket identifying one issued query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryId(u64);

/// What the dashboard currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayState {
    /// Nothing queried yet.
    #[default]
    Empty,
    /// The newest query succeeded.
    Ready(DashboardView),
    /// The newest query failed; the message replaces any earlier view.
    Failed(String),
}

/// Tracks the newest issued query and the state it produced.
#[derive(Debug, Clone, Default)]
pub struct Session {
    issued: u64,
    state: DisplayState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new query. Any outcome carrying an earlier ticket is
    /// stale from this point on.
    pub fn begin(&mut self) -> QueryId {
        self.issued += 1;
        QueryId(self.issued)
    }

    /// Publish a query outcome.
    ///
    /// Returns `false` and leaves the state untouched when `id` is not the
    /// newest ticket. A success replaces the display wholesale; a failure
    /// replaces it with the error message.
    pub fn complete(&mut self, id: QueryId, outcome: Result<DashboardView>) -> bool {
        if id.0 != self.issued {
            return false;
        }
        self.state = match outcome {
            Ok(view) => DisplayState::Ready(view),
            Err(e) => DisplayState::Failed(e.to_string()),
        };
        true
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }
}
