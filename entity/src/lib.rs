//! SeaORM entities for the bumpboard database.

pub mod prelude;

pub mod bump_event;
pub mod community;
