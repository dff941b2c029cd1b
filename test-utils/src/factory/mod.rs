//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let drone = factory::create_drone(&db).await?;
//! let medication = factory::create_medication(&db, drone.id).await?;
//!
//! let drone = factory::drone::DroneFactory::new(&db)
//!     .serial_number("DRN-001")
//!     .weight_limit(400.0)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `drone` - Create drone entities
//! - `medication` - Create medication entities attached to a drone
//! - `media` - Create media (image reference) entities
//! - `helpers` - Unique id generation and dependency helpers

pub mod drone;
pub mod helpers;
pub mod media;
pub mod medication;

pub use drone::create_drone;
pub use media::create_media;
pub use medication::create_medication;
