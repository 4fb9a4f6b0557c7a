//! HTTP request handlers.
//!
//! Controllers convert DTOs to service parameters, call the services, and map domain
//! results back to DTOs and status codes.

pub mod bump;
pub mod community;

#[cfg(test)]
mod test;
