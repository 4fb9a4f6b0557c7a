//! Bump event factory for creating ledger entries.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a bump ledger row.
///
/// Only the ledger is written; the community's `last_bump_at` is left untouched, which lets
/// tests stage a user cooldown independently of the server cooldown.
///
/// # Arguments
/// - `db` - Database connection
/// - `community_id` - Primary key of the bumped community
/// - `user_id` - Discord ID of the bumping user
/// - `bumped_at` - Time of the bump
///
/// # Returns
/// - `Ok(entity::bump_event::Model)` - Created ledger entry
/// - `Err(DbErr)` - Database error during insert
pub async fn create_bump_event(
    db: &DatabaseConnection,
    community_id: i32,
    user_id: &str,
    bumped_at: DateTime<Utc>,
) -> Result<entity::bump_event::Model, DbErr> {
    entity::bump_event::ActiveModel {
        community_id: ActiveValue::Set(community_id),
        user_id: ActiveValue::Set(user_id.to_string()),
        bumped_at: ActiveValue::Set(bumped_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
