//! Contest model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Contest database model
///
/// Contests are created by an administrative flow and are read-only in this
/// service. `question_count` is the declared count carried on the record,
/// independent of how many problems are currently attached.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Contest {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub audience: Vec<String>,
    pub question_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contest {
    /// Get the phase of the contest at the given instant
    pub fn phase_at(&self, now: DateTime<Utc>) -> Phase {
        Phase::at(now, self.start_time, self.end_time)
    }
}

/// Contest phase relative to a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Upcoming,
    Live,
    Past,
}

impl Phase {
    /// Classify an instant against a contest's start and end times.
    ///
    /// Both comparisons are strict: a contest is upcoming only while
    /// `now < start`, and past only once `now > end`. The instant exactly at
    /// `end` therefore still classifies as live. Existing clients depend on
    /// these boundaries, so they must not be tightened.
    pub fn at(now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let is_upcoming = now < start;
        let is_past = now > end;

        if is_past {
            Self::Past
        } else if is_upcoming {
            Self::Upcoming
        } else {
            Self::Live
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "upcoming"),
            Self::Live => write!(f, "live"),
            Self::Past => write!(f, "past"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_phase_classification() {
        let start = t(10, 0);
        let end = t(12, 0);

        assert_eq!(Phase::at(t(9, 0), start, end), Phase::Upcoming);
        assert_eq!(Phase::at(t(11, 0), start, end), Phase::Live);
        assert_eq!(Phase::at(t(13, 0), start, end), Phase::Past);
    }

    #[test]
    fn test_phase_boundaries_are_strict() {
        let start = t(10, 0);
        let end = t(12, 0);

        // At exactly start the contest is no longer upcoming
        assert_eq!(Phase::at(start, start, end), Phase::Live);
        // At exactly end the contest is not yet past
        assert_eq!(Phase::at(end, start, end), Phase::Live);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Upcoming.to_string(), "upcoming");
        assert_eq!(Phase::Live.to_string(), "live");
        assert_eq!(Phase::Past.to_string(), "past");
    }
}
