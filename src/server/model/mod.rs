//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into DTOs at
//! the controller boundary. Parameter types carry already-validated operation input from the
//! controllers into the services.

pub mod bird;
pub mod dashboard;
pub mod finance;
pub mod pair;
pub mod production;
pub mod user;
