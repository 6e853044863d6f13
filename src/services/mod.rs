//! Business logic services

pub mod contest_service;
pub mod solve_status;
pub mod visibility;

pub use contest_service::ContestService;
