pub mod bump;
pub mod community;
