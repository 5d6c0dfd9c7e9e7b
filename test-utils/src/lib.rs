//! Aviary Test Utils
//!
//! Shared testing utilities for the aviary backend. Tests get an isolated in-memory SQLite
//! database with tables generated straight from the entity definitions, plus factories for
//! seeding rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder that selects which entity tables to create
//! - **TestContext**: owns the database connection for the lifetime of a test
//! - **TestError**: errors raised while setting a test up
//! - **factory**: builder-style factories for every entity
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_birds() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_aviary_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     let bird = factory::create_bird(db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
