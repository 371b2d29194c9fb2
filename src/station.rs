//! Selection state machine for the weather display
//!
//! Holds the single current-selection value, the single current-snapshot
//! slot, and a tri-state status flag. A generation counter makes a new
//! selection supersede any in-flight request: completions carrying a stale
//! ticket are dropped instead of overwriting the newer state.

use serde::Serialize;

use crate::models::WeatherSnapshot;

/// Fixed user-visible message for a failed fetch
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data";

/// Display status driven by whatever orchestrates the synthesis call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Loading,
    Error,
    Loaded,
}

/// Token tying an in-flight synthesis to the selection that started it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Current selection, snapshot slot, and status
#[derive(Debug)]
pub struct Station {
    selected_city: String,
    snapshot: Option<WeatherSnapshot>,
    status: Status,
    generation: u64,
}

impl Station {
    #[must_use]
    pub fn new(default_city: impl Into<String>) -> Self {
        Self {
            selected_city: default_city.into(),
            snapshot: None,
            status: Status::Loading,
            generation: 0,
        }
    }

    #[must_use]
    pub fn selected_city(&self) -> &str {
        &self.selected_city
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    /// The fixed error message, present only in the error state. The last
    /// good snapshot stays in memory but the view renders the error branch.
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        (self.status == Status::Error).then_some(FETCH_FAILED_MESSAGE)
    }

    /// Start a new selection. Enters the loading state and invalidates any
    /// ticket handed out earlier.
    pub fn begin(&mut self, city: &str) -> Ticket {
        self.selected_city = city.to_string();
        self.status = Status::Loading;
        self.generation += 1;
        Ticket(self.generation)
    }

    /// Whether the ticket still belongs to the current selection
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply a finished synthesis. Returns `false` when the ticket was
    /// superseded by a newer selection, leaving the state untouched.
    pub fn complete(&mut self, ticket: Ticket, snapshot: WeatherSnapshot) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(city = %snapshot.city, "Dropping stale snapshot");
            return false;
        }
        self.snapshot = Some(snapshot);
        self.status = Status::Loaded;
        true
    }

    /// Record a failed fetch for the current ticket. Stale failures are
    /// dropped the same way stale completions are.
    pub fn fail(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(city = %self.selected_city, "Dropping stale failure");
            return false;
        }
        self.status = Status::Error;
        true
    }
}
