//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert into the database; see `fixture` for
//! in-memory models.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let community = factory::community::create_community(&db).await?;
//! let event = factory::bump_event::create_bump_event(&db, community.id, "42", now).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let community = factory::community::CommunityFactory::new(&db)
//!     .external_id("987654321")
//!     .owner_id("111")
//!     .last_bump_at(Some(now - Duration::minutes(30)))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `community` - Create community entities
//! - `bump_event` - Create bump ledger entries
//! - `helpers` - Shared id counter and combined helpers

pub mod bump_event;
pub mod community;
pub mod helpers;

pub use bump_event::create_bump_event;
pub use community::create_community;
