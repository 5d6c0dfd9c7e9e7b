//! Request guards and auth cookie handling.

pub mod auth;
pub mod cookie;

#[cfg(test)]
mod test;
