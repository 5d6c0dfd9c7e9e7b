//! HTTP request handlers.
//!
//! Each handler authenticates the caller through `AuthGuard` where required, converts the
//! request DTO into service parameters, calls a service and converts the result back into a
//! response DTO.

pub mod auth;
pub mod bird;
pub mod dashboard;
pub mod finance;
pub mod health;
pub mod pair;
pub mod production;
