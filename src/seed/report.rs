//! Per-group outcomes of a seeding run.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Result, SeedError};

/// Result state of one fixture group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    Succeeded,
    Failed,
    /// Not attempted because a group it depends on failed.
    Skipped,
}

impl GroupStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Succeeded => "ok",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
        }
    }
}

/// Outcome of one fixture group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupOutcome {
    pub group: String,
    pub status: GroupStatus,
    /// Number of resources created or updated.
    pub items: usize,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<&'static str>,
}

impl GroupOutcome {
    #[must_use]
    pub fn succeeded(
        group: impl Into<String>,
        items: usize,
        started_at: DateTime<Utc>,
        duration_ms: u64,
    ) -> Self {
        Self {
            group: group.into(),
            status: GroupStatus::Succeeded,
            items,
            started_at,
            duration_ms,
            error: None,
            error_code: None,
        }
    }

    #[must_use]
    pub fn failed(
        group: impl Into<String>,
        error: &SeedError,
        started_at: DateTime<Utc>,
        duration_ms: u64,
    ) -> Self {
        Self {
            group: group.into(),
            status: GroupStatus::Failed,
            items: 0,
            started_at,
            duration_ms,
            error: Some(error.to_string()),
            error_code: Some(error.error_code()),
        }
    }

    #[must_use]
    pub fn skipped(group: impl Into<String>, error: &SeedError) -> Self {
        Self {
            status: GroupStatus::Skipped,
            ..Self::failed(group, error, Utc::now(), 0)
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == GroupStatus::Succeeded
    }
}

/// Full report of a seeding run, in the order groups were started.
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub base_url: String,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub groups: Vec<GroupOutcome>,
    /// Ids of the products created by this run.
    pub product_ids: Vec<u64>,
}

impl SeedReport {
    /// Number of groups that failed or were skipped.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.groups.iter().filter(|g| !g.is_success()).count()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    /// Look up a group outcome by name.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&GroupOutcome> {
        self.groups.iter().find(|g| g.group == name)
    }

    /// Convert into an error when any group did not succeed.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::PartialFailure`] with the number of unsuccessful groups.
    pub fn into_result(self) -> Result<Self> {
        match self.failed_count() {
            0 => Ok(self),
            failed => Err(SeedError::PartialFailure { failed }),
        }
    }
}
