//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller and bot adapters and the data (repository) layer.
//! They apply the cooldown and registry rules, run the bump transaction, and bound every
//! storage interaction on the bump paths with the configured timeout. Services work with
//! domain models rather than DTOs or entity models.

pub mod bump;
pub mod community;
pub mod cooldown;
pub mod verification;

#[cfg(test)]
mod test;
