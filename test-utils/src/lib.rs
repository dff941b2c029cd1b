//! Drones API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the drones
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases, factories that insert test rows, and fixtures that build entity models without
//! touching the database.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert drones, medications and media with sensible defaults
//! - **fixture**: In-memory entity models for fakes and conversion tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_drone_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_drone_tables()
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
