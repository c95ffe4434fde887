//! Bird Collector Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the bird
//! collector application. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_birds() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (user, bird) = factory::helpers::create_bird_with_owner(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
