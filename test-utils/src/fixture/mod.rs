//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit tests
//! of pure logic such as the cooldown evaluator and entity-to-domain conversions.

pub mod community;

pub use community::{entity as community_entity, entity_builder as community_entity_builder};
