//! Participant (team) model.
//!
//! A participant is one competing entity in a league. The scheduler only
//! needs its identifier; the name travels along for display.

use serde::{Deserialize, Serialize};

/// A competing entity (team) in a league.
///
/// The identifier is opaque to the scheduler. It is copied verbatim into
/// the generated fixtures as `homeTeamId` / `awayTeamId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique participant identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
}

impl Participant {
    /// Creates a new participant with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Name for display, falling back to the ID when unnamed.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Builds unnamed participants from a list of IDs.
pub fn participants_from_ids<I, S>(ids: I) -> Vec<Participant>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ids.into_iter().map(Participant::new).collect()
}
