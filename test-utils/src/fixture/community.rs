//! Community fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::community;

/// Default test community name.
pub const DEFAULT_NAME: &str = "Test Community";

/// Default test guild ID for communities.
pub const DEFAULT_EXTERNAL_ID: &str = "987654321";

/// Default owner Discord ID.
pub const DEFAULT_OWNER_ID: &str = "123456789";

/// Fixed creation time so fixtures compare equal across calls.
pub fn default_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

/// Creates an active, never-bumped community entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - external_id: `"987654321"`
/// - name: `"Test Community"`
/// - tags: `["gaming"]`
/// - is_active: `true`
/// - last_bump_at: `None`
pub fn entity() -> community::Model {
    community::Model {
        id: 1,
        external_id: DEFAULT_EXTERNAL_ID.to_string(),
        name: DEFAULT_NAME.to_string(),
        description: "A community used in tests".to_string(),
        icon_url: None,
        invite_code: "testinvite".to_string(),
        member_count: 10,
        owner_id: DEFAULT_OWNER_ID.to_string(),
        tags: r#"["gaming"]"#.to_string(),
        is_active: true,
        last_bump_at: None,
        created_at: default_created_at(),
        updated_at: default_created_at(),
    }
}

/// Creates a community entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let community = fixture::community::entity_builder()
///     .last_bump_at(Some(now - Duration::minutes(30)))
///     .build();
/// ```
pub fn entity_builder() -> CommunityEntityBuilder {
    CommunityEntityBuilder { entity: entity() }
}

/// Builder for in-memory community entity models.
pub struct CommunityEntityBuilder {
    entity: community::Model,
}

impl CommunityEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.entity.external_id = external_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.entity.tags = tags.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.entity.is_active = is_active;
        self
    }

    pub fn last_bump_at(mut self, last_bump_at: Option<DateTime<Utc>>) -> Self {
        self.entity.last_bump_at = last_bump_at;
        self
    }

    pub fn build(self) -> community::Model {
        self.entity
    }
}
