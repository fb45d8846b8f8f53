// Typed payloads returned by peer services.
//
// Peers evolve independently, so every non-key field is optional or
// defaulted; a missing field is degraded display data, not a protocol error.

use serde::{Deserialize, Serialize};

/// Identity-service user record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub affiliation: Option<String>,
}

impl User {
    /// Display label with an id-based placeholder when the name is missing,
    /// so degraded reads render without an error.
    pub fn display_label(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("User #{}", self.id),
        }
    }
}

/// Review-service workload statistics for one reviewer
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewerStats {
    #[serde(default)]
    pub active_assignments: u64,
    #[serde(default)]
    pub completed_reviews: u64,
}

impl ReviewerStats {
    /// A reviewer with outstanding assignments must not be deleted
    pub fn is_active(&self) -> bool {
        self.active_assignments > 0
    }
}

/// One review as listed for a reviewer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewSummary {
    pub id: i64,
    pub submission_id: i64,
    pub reviewer_id: i64,
    #[serde(default)]
    pub status: Option<String>,
}

/// Conference-service track membership entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackMember {
    pub user_id: i64,
    #[serde(default)]
    pub role: Option<String>,
}

/// Conference-service reviewer-to-submission assignment within a track
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackAssignment {
    pub submission_id: i64,
    pub reviewer_id: i64,
}
