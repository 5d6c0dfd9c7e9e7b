//! Request and response DTOs exchanged over the HTTP API.
//!
//! Every type here derives `ToSchema` so it appears in the generated OpenAPI document.

pub mod api;
pub mod bird;
pub mod dashboard;
pub mod finance;
pub mod pair;
pub mod user;
