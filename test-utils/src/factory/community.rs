//! Community factory for creating test community entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test communities with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::community::CommunityFactory;
///
/// let community = CommunityFactory::new(&db)
///     .external_id("987654321")
///     .name("Rustaceans")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct CommunityFactory<'a> {
    db: &'a DatabaseConnection,
    external_id: String,
    name: String,
    description: String,
    icon_url: Option<String>,
    invite_code: String,
    member_count: i32,
    owner_id: String,
    tags: Vec<String>,
    is_active: bool,
    last_bump_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl<'a> CommunityFactory<'a> {
    /// Creates a new CommunityFactory with default values.
    ///
    /// Defaults:
    /// - external_id: `"{id}"` where id is auto-incremented
    /// - name: `"Community {id}"`
    /// - owner_id: `"{900000 + id}"`, a numeric snowflake string
    /// - tags: empty
    /// - is_active: `true`
    /// - last_bump_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            external_id: id.to_string(),
            name: format!("Community {}", id),
            description: "A test community".to_string(),
            icon_url: None,
            invite_code: format!("invite{}", id),
            member_count: 0,
            owner_id: (900_000 + id).to_string(),
            tags: Vec::new(),
            is_active: true,
            last_bump_at: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the Discord guild ID.
    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    /// Sets the community display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the owning user's Discord ID.
    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = owner_id.into();
        self
    }

    /// Sets the member count snapshot.
    pub fn member_count(mut self, member_count: i32) -> Self {
        self.member_count = member_count;
        self
    }

    /// Sets the tags. Values are stored as given, without normalization.
    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Sets whether the community is active.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the last bump timestamp.
    pub fn last_bump_at(mut self, last_bump_at: Option<DateTime<Utc>>) -> Self {
        self.last_bump_at = last_bump_at;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the community entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::community::Model)` - Created community entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::community::Model, DbErr> {
        let tags =
            serde_json::to_string(&self.tags).map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::community::ActiveModel {
            external_id: ActiveValue::Set(self.external_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            icon_url: ActiveValue::Set(self.icon_url),
            invite_code: ActiveValue::Set(self.invite_code),
            member_count: ActiveValue::Set(self.member_count),
            owner_id: ActiveValue::Set(self.owner_id),
            tags: ActiveValue::Set(tags),
            is_active: ActiveValue::Set(self.is_active),
            last_bump_at: ActiveValue::Set(self.last_bump_at),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active, never-bumped community with default values.
///
/// Shorthand for `CommunityFactory::new(db).build().await`.
pub async fn create_community(
    db: &DatabaseConnection,
) -> Result<entity::community::Model, DbErr> {
    CommunityFactory::new(db).build().await
}
