//! Countdown and phase presentation
//!
//! Server-side model of the contest page's countdown: phase and remaining
//! time are recomputed from wall-clock time on every tick rather than
//! decremented incrementally, so a tick can never drift. `upcoming` counts
//! down to the start, `live` counts down to the end, and `past` is terminal
//! with a fixed ended label.

use chrono::{DateTime, Duration, Utc};
use tokio::task::JoinHandle;

use crate::constants::{CONTEST_ENDED_LABEL, COUNTDOWN_TICK_SECONDS};
use crate::models::Phase;

/// Format a remaining duration as `{d}d {h}h {m}m {s}s`.
///
/// The days segment is omitted entirely when zero. Negative durations clamp
/// to zero.
pub fn format_countdown(remaining: Duration) -> String {
    let total_seconds = remaining.num_seconds().max(0);

    let days = total_seconds / 86400;
    let hours = (total_seconds % 86400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if days > 0 {
        format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
    } else {
        format!("{}h {}m {}s", hours, minutes, seconds)
    }
}

/// Compute the phase and display label for one tick
pub fn display(now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> (Phase, String) {
    let phase = Phase::at(now, start, end);
    let label = match phase {
        Phase::Upcoming => format_countdown(start - now),
        Phase::Live => format_countdown(end - now),
        Phase::Past => CONTEST_ENDED_LABEL.to_string(),
    };

    (phase, label)
}

/// A cancellable periodic countdown task
///
/// Ticks once per second, invoking the callback with the freshly computed
/// phase and label. The task ends on its own once the contest is past, and
/// is aborted when stopped or dropped, so a view that goes away never
/// leaves a timer behind.
pub struct CountdownTimer {
    handle: JoinHandle<()>,
}

impl CountdownTimer {
    /// Spawn a countdown for the given contest window
    pub fn spawn<F>(start: DateTime<Utc>, end: DateTime<Utc>, mut on_tick: F) -> Self
    where
        F: FnMut(Phase, String) + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(std::time::Duration::from_secs(COUNTDOWN_TICK_SECONDS));

            loop {
                // First tick fires immediately
                interval.tick().await;

                let (phase, label) = display(Utc::now(), start, end);
                on_tick(phase, label);

                if phase == Phase::Past {
                    break;
                }
            }
        });

        Self { handle }
    }

    /// Stop the countdown
    pub fn stop(&self) {
        self.handle.abort();
    }

    /// Whether the task has finished (terminal phase reached or aborted)
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
