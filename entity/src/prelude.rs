pub use super::bump_event::Entity as BumpEvent;
pub use super::community::Entity as Community;
