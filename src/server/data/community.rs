//! Community registry repository.
//!
//! Provides `CommunityRepository` for the registry's persistent state: owner-driven
//! writes, directory search, the conditional `last_bump_at` write used by the bump
//! transaction, and the idle-community sweep. The repository is generic over the
//! connection so the bump path can run it inside a `DatabaseTransaction`.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, LikeExpr, NullOrdering, Order},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        bump::server_cooldown,
        community::{
            Community, CommunitySort, CreateCommunityParam, GuildSnapshotParam,
            SearchCommunitiesParam, Tags, UpdateCommunityParam,
        },
    },
};

use entity::community::Column;

pub struct CommunityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommunityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a community by Discord guild ID regardless of its active flag.
    ///
    /// # Returns
    /// - `Ok(Some(Community))` - Community found
    /// - `Ok(None)` - No community registered for the guild
    /// - `Err(AppError)` - Database or conversion error
    pub async fn find_by_external_id(&self, external_id: u64) -> Result<Option<Community>, AppError> {
        let entity = entity::prelude::Community::find()
            .filter(Column::ExternalId.eq(external_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(Community::from_entity).transpose()
    }

    /// Finds an active community by Discord guild ID.
    ///
    /// Deactivated communities are treated as absent.
    pub async fn find_active_by_external_id(
        &self,
        external_id: u64,
    ) -> Result<Option<Community>, AppError> {
        let entity = entity::prelude::Community::find()
            .filter(Column::ExternalId.eq(external_id.to_string()))
            .filter(Column::IsActive.eq(true))
            .one(self.db)
            .await?;

        entity.map(Community::from_entity).transpose()
    }

    /// Inserts a new active, never-bumped community.
    ///
    /// # Returns
    /// - `Ok(Community)` - The created community
    /// - `Err(AppError::DbErr)` - Insert failed, including a duplicate `external_id`
    pub async fn create(
        &self,
        owner_id: u64,
        param: CreateCommunityParam,
        tags: &Tags,
        now: DateTime<Utc>,
    ) -> Result<Community, AppError> {
        let entity = entity::community::ActiveModel {
            external_id: ActiveValue::Set(param.external_id.to_string()),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            icon_url: ActiveValue::Set(param.icon_url),
            invite_code: ActiveValue::Set(param.invite_code),
            member_count: ActiveValue::Set(param.member_count.max(0)),
            owner_id: ActiveValue::Set(owner_id.to_string()),
            tags: ActiveValue::Set(tags.to_column()),
            is_active: ActiveValue::Set(true),
            last_bump_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Community::from_entity(entity)
    }

    /// Reactivates an existing row with fresh metadata.
    ///
    /// `owner_id`, `external_id` and `last_bump_at` are preserved.
    pub async fn reactivate(
        &self,
        id: i32,
        param: CreateCommunityParam,
        tags: &Tags,
        now: DateTime<Utc>,
    ) -> Result<Community, AppError> {
        let entity = entity::community::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            icon_url: ActiveValue::Set(param.icon_url),
            invite_code: ActiveValue::Set(param.invite_code),
            member_count: ActiveValue::Set(param.member_count.max(0)),
            tags: ActiveValue::Set(tags.to_column()),
            is_active: ActiveValue::Set(true),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Community::from_entity(entity)
    }

    /// Applies the provided fields of an owner edit.
    ///
    /// `tags` must already be normalized; `param.tags` is ignored.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateCommunityParam,
        tags: Option<&Tags>,
        now: DateTime<Utc>,
    ) -> Result<Community, AppError> {
        let mut active = entity::community::ActiveModel {
            id: ActiveValue::Unchanged(id),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(icon_url) = param.icon_url {
            active.icon_url = ActiveValue::Set(icon_url);
        }
        if let Some(invite_code) = param.invite_code {
            active.invite_code = ActiveValue::Set(invite_code);
        }
        if let Some(member_count) = param.member_count {
            active.member_count = ActiveValue::Set(member_count.max(0));
        }
        if let Some(tags) = tags {
            active.tags = ActiveValue::Set(tags.to_column());
        }

        let entity = active.update(self.db).await?;

        Community::from_entity(entity)
    }

    /// Sets the active flag.
    ///
    /// # Returns
    /// - `Ok(true)` - The row existed and was updated
    /// - `Ok(false)` - No community with that ID
    pub async fn set_active(
        &self,
        id: i32,
        is_active: bool,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Community::update_many()
            .col_expr(Column::IsActive, Expr::value(is_active))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts the active communities held by an owner.
    pub async fn count_active_by_owner(&self, owner_id: u64) -> Result<u64, AppError> {
        let count = entity::prelude::Community::find()
            .filter(Column::OwnerId.eq(owner_id.to_string()))
            .filter(Column::IsActive.eq(true))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Gets every community held by an owner, inactive ones included, newest first.
    pub async fn get_by_owner(&self, owner_id: u64) -> Result<Vec<Community>, AppError> {
        let entities = entity::prelude::Community::find()
            .filter(Column::OwnerId.eq(owner_id.to_string()))
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Community::from_entity).collect()
    }

    /// Searches active communities by tag overlap.
    ///
    /// A community matches when every keyword equals one of its tags. No keywords matches
    /// every active community.
    ///
    /// # Returns
    /// - `Ok((Vec<Community>, u64))` - The requested page and the total match count
    /// - `Err(AppError)` - Database or conversion error
    pub async fn search(
        &self,
        param: &SearchCommunitiesParam,
    ) -> Result<(Vec<Community>, u64), AppError> {
        let mut query = entity::prelude::Community::find().filter(Column::IsActive.eq(true));

        if !param.keywords.is_empty() {
            let mut every_tag = Condition::all();
            for keyword in &param.keywords {
                every_tag = every_tag.add(
                    Column::Tags.like(LikeExpr::new(tag_pattern(keyword)).escape('\\')),
                );
            }
            query = query.filter(every_tag);
        }

        query = match param.sort {
            CommunitySort::LastBump => {
                query.order_by_with_nulls(Column::LastBumpAt, Order::Desc, NullOrdering::Last)
            }
            CommunitySort::MemberCount => query.order_by_desc(Column::MemberCount),
            CommunitySort::Name => query.order_by_asc(Column::Name),
        }
        .order_by_asc(Column::Id);

        let paginator = query.paginate(self.db, param.per_page);
        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page).await?;

        let communities = entities
            .into_iter()
            .map(Community::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((communities, total))
    }

    /// Claims the community's bump window at `now`.
    ///
    /// Single conditional write: succeeds only while the community is active and its last
    /// bump is at least one cooldown window old. As the first statement of a transaction it
    /// takes the write lock, so concurrent callers serialize on it and at most one observes
    /// a modified row per window.
    ///
    /// # Returns
    /// - `Ok(true)` - `last_bump_at` was set to `now`
    /// - `Ok(false)` - Community missing, inactive, or still cooling down
    pub async fn try_mark_bumped(
        &self,
        external_id: u64,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let cutoff = now - server_cooldown();

        let result = entity::prelude::Community::update_many()
            .col_expr(Column::LastBumpAt, Expr::value(now))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::ExternalId.eq(external_id.to_string()))
            .filter(Column::IsActive.eq(true))
            .filter(
                Condition::any()
                    .add(Column::LastBumpAt.is_null())
                    .add(Column::LastBumpAt.lte(cutoff)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Refreshes gateway-reported metadata of a registered community.
    ///
    /// # Returns
    /// - `Ok(true)` - A registered community was updated
    /// - `Ok(false)` - The guild is not registered
    pub async fn refresh_guild_metadata(
        &self,
        param: GuildSnapshotParam,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Community::update_many()
            .col_expr(Column::Name, Expr::value(param.name))
            .col_expr(Column::IconUrl, Expr::value(param.icon_url))
            .col_expr(Column::MemberCount, Expr::value(param.member_count.max(0)))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::ExternalId.eq(param.external_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deactivates active communities with no activity since `cutoff`.
    ///
    /// Activity is the last bump, or the creation time for never-bumped communities.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of communities deactivated
    pub async fn deactivate_idle(
        &self,
        cutoff: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<u64, AppError> {
        let result = entity::prelude::Community::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::IsActive.eq(true))
            .filter(
                Condition::any()
                    .add(Column::LastBumpAt.lt(cutoff))
                    .add(
                        Condition::all()
                            .add(Column::LastBumpAt.is_null())
                            .add(Column::CreatedAt.lt(cutoff)),
                    ),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// LIKE pattern (escape character `\`) matching one element of the stored JSON tag array.
fn tag_pattern(keyword: &str) -> String {
    let element = serde_json::Value::from(keyword).to_string();
    let mut escaped = String::with_capacity(element.len() + 2);

    escaped.push('%');
    for c in element.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');

    escaped
}
