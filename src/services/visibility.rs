//! Contest visibility resolution
//!
//! Decides whether a viewer may see a contest's problem list at a given
//! instant. Students are locked out of upcoming contests; every other role
//! always sees the problems. Takes `now` as an explicit parameter so the
//! decision is a pure function of its inputs.

use chrono::{DateTime, Utc};

use crate::{
    constants::roles,
    models::{Contest, Phase},
};

/// Outcome of a visibility check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    /// Whether problem details may be exposed to this viewer
    pub reveal: bool,
    /// Contest phase at the evaluated instant
    pub phase: Phase,
}

/// Resolve what a viewer is allowed to see of a contest at `now`.
///
/// When `reveal` is false the caller must still serve a well-formed contest
/// shell with an empty problem list, so the client can render a locked
/// lobby instead of erroring.
pub fn resolve(contest: &Contest, viewer_role: &str, now: DateTime<Utc>) -> Visibility {
    let phase = contest.phase_at(now);
    let reveal = !(viewer_role == roles::STUDENT && phase == Phase::Upcoming);

    Visibility { reveal, phase }
}
