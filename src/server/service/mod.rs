//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce ownership and
//! validation rules, run multi-step writes inside database transactions and work with domain
//! models rather than DTOs or entity models.

pub mod auth;
pub mod bird;
pub mod breeding;
pub mod dashboard;
pub mod finance;
pub mod profile;
pub mod token;
