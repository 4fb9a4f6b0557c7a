//! Bump ledger repository.
//!
//! The ledger is append-only: rows are inserted once per committed bump and never
//! updated or deleted.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{error::AppError, model::bump::BumpEvent};

use entity::bump_event::Column;

pub struct BumpEventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BumpEventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a ledger entry.
    pub async fn create(
        &self,
        community_id: i32,
        user_id: u64,
        bumped_at: DateTime<Utc>,
    ) -> Result<BumpEvent, AppError> {
        let entity = entity::bump_event::ActiveModel {
            community_id: ActiveValue::Set(community_id),
            user_id: ActiveValue::Set(user_id.to_string()),
            bumped_at: ActiveValue::Set(bumped_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        BumpEvent::from_entity(entity)
    }

    /// Gets the user's most recent bump of any community at or after `since`.
    ///
    /// # Returns
    /// - `Ok(Some(BumpEvent))` - Latest bump inside the window
    /// - `Ok(None)` - The user has not bumped since `since`
    pub async fn latest_for_user_since(
        &self,
        user_id: u64,
        since: DateTime<Utc>,
    ) -> Result<Option<BumpEvent>, AppError> {
        let entity = entity::prelude::BumpEvent::find()
            .filter(Column::UserId.eq(user_id.to_string()))
            .filter(Column::BumpedAt.gte(since))
            .order_by_desc(Column::BumpedAt)
            .order_by_desc(Column::Id)
            .one(self.db)
            .await?;

        entity.map(BumpEvent::from_entity).transpose()
    }

    /// Counts ledger entries for a community.
    pub async fn count_by_community(&self, community_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::BumpEvent::find()
            .filter(Column::CommunityId.eq(community_id))
            .count(self.db)
            .await?;

        Ok(count)
    }
}
