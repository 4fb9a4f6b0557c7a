//! Bumpboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the bumpboard
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases created from the entity definitions.
//!
//! # Overview
//!
//! The test utilities consist of the following components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert entities with sensible defaults
//! - **fixture**: In-memory entity models without database insertion
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_bump_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_bump_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
