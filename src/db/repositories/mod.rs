//! Database repositories

pub mod contest_repo;
pub mod problem_repo;
pub mod submission_repo;

pub use contest_repo::ContestRepository;
pub use problem_repo::ProblemRepository;
pub use submission_repo::SubmissionRepository;
