//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const STUDENT: &str = "student";
    pub const INSTRUCTOR: &str = "instructor";
    pub const ADMIN: &str = "admin";
}

// =============================================================================
// SUBMISSION STATUSES
// =============================================================================

/// Submission status strings as stored on submission records.
///
/// `ACCEPTED` is the accept-sentinel: it is the only status that marks a
/// problem as solved. Every other status counts as an attempt.
pub mod submission_status {
    pub const PENDING: &str = "Pending";
    pub const ACCEPTED: &str = "Accepted";
    pub const WRONG_ANSWER: &str = "Wrong Answer";
    pub const TIME_LIMIT_EXCEEDED: &str = "Time Limit Exceeded";
    pub const RUNTIME_ERROR: &str = "Runtime Error";
    pub const COMPILATION_ERROR: &str = "Compilation Error";
}

// =============================================================================
// COUNTDOWN
// =============================================================================

/// Label displayed once a contest has ended
pub const CONTEST_ENDED_LABEL: &str = "Contest Ended";

/// Countdown recomputation interval in seconds
pub const COUNTDOWN_TICK_SECONDS: u64 = 1;
