//! Shared helper utilities for factory methods.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a community that has already been bumped once by `user_id` at `bumped_at`.
///
/// Writes both the community's `last_bump_at` and the matching ledger row, mirroring the
/// state left behind by a committed bump.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord ID of the bumping user
/// - `bumped_at` - Time of the bump
///
/// # Returns
/// - `Ok((community, bump_event))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_bumped_community(
    db: &DatabaseConnection,
    user_id: &str,
    bumped_at: DateTime<Utc>,
) -> Result<(entity::community::Model, entity::bump_event::Model), DbErr> {
    let community = crate::factory::community::CommunityFactory::new(db)
        .last_bump_at(Some(bumped_at))
        .build()
        .await?;
    let event =
        crate::factory::bump_event::create_bump_event(db, community.id, user_id, bumped_at).await?;

    Ok((community, event))
}
