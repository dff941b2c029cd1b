//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them to seed
//! in-memory store fakes and to test entity-to-domain conversion.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let drone = fixture::drone::entity();
//!
//! let drone = fixture::drone::entity_builder()
//!     .weight_limit(400.0)
//!     .state("LOADED")
//!     .build();
//! ```

pub mod drone;
pub mod medication;
