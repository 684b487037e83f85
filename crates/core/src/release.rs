//! Release and sprint domain types.

use serde::{Deserialize, Serialize};

/// Error raised when a release is constructed with out-of-domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRelease {
    /// Start day must be at least 1
    #[error("start day must be >= 1, got {0}")]
    StartDay(u32),

    /// Duration must be at least 1
    #[error("duration must be >= 1, got {0}")]
    Duration(u32),
}

/// A candidate release that could begin verification on `start_day` and
/// needs `duration` consecutive days.
///
/// Immutable once read; the validating constructor keeps the selector total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRequest {
    /// Earliest sprint day the release can start (1-based)
    start_day: u32,

    /// Number of consecutive days needed for verification
    duration: u32,
}

impl ReleaseRequest {
    /// Create a new request, rejecting zero start day or duration.
    pub fn new(start_day: u32, duration: u32) -> Result<Self, InvalidRelease> {
        if start_day == 0 {
            return Err(InvalidRelease::StartDay(start_day));
        }
        if duration == 0 {
            return Err(InvalidRelease::Duration(duration));
        }
        Ok(Self {
            start_day,
            duration,
        })
    }

    /// Earliest sprint day the release can start.
    pub fn start_day(&self) -> u32 {
        self.start_day
    }

    /// Number of consecutive days needed for verification.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Whether the unshifted window `[start_day, start_day + duration - 1]`
    /// fits entirely within a sprint of `duration_days` days.
    ///
    /// Computed in u64 so a near-`u32::MAX` duration cannot wrap; a window
    /// whose end day overruns the u32 day range never fits.
    pub fn fits_within(&self, duration_days: u32) -> bool {
        let end_day = u64::from(self.start_day) + u64::from(self.duration) - 1;
        self.start_day <= duration_days && end_day <= u64::from(duration_days)
    }
}

/// An accepted release's actual verification window.
///
/// The duration granted is unchanged by scheduling; only the start day may
/// shift (later, never earlier) under postponement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledRelease {
    /// First day of verification (1-based)
    pub start_day: u32,

    /// Last day of verification, inclusive
    pub end_day: u32,
}

impl ScheduledRelease {
    /// Schedule `duration` days of verification starting on `start_day`.
    ///
    /// Callers guarantee the window fits within the sprint, so the end day
    /// stays within u32 range.
    pub(crate) fn from_start(start_day: u32, duration: u32) -> Self {
        Self {
            start_day,
            end_day: start_day + (duration - 1),
        }
    }

    /// Number of days the release occupies.
    pub fn duration(&self) -> u32 {
        self.end_day - self.start_day + 1
    }
}

/// Process-scoped sprint configuration. Read once, never mutated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SprintConfig {
    /// Sprint length in working days
    pub duration_days: u32,

    /// Whether releases may be postponed within sprint limits
    pub allow_postponement: bool,
}
