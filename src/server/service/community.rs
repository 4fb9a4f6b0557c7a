//! Community registry service.
//!
//! Owner-facing writes (register, edit, deactivate), the public directory search, and
//! the maintenance paths driven by the bot gateway and the scheduler.

use chrono::{DateTime, TimeDelta, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::community::CommunityRepository,
    error::AppError,
    model::community::{
        Community, CreateCommunityParam, GuildSnapshotParam, ManageCapability,
        PaginatedCommunities, SearchCommunitiesParam, Tags, UpdateCommunityParam,
        MAX_ACTIVE_PER_OWNER,
    },
};

pub struct CommunityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommunityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a guild in the directory.
    ///
    /// An inactive row already held by the same owner is reactivated with the new metadata
    /// and keeps its bump history.
    ///
    /// # Arguments
    /// - `owner_id` - Discord ID of the registering user
    /// - `capability` - The user's standing in the guild
    /// - `param` - Listing metadata; tags are normalized here
    /// - `now` - Registration time
    ///
    /// # Returns
    /// - `Ok(Community)` - The created or reactivated community
    /// - `Err(AppError::Forbidden)` - User neither owns nor administers the guild
    /// - `Err(AppError::BadRequest)` - Invalid metadata or tags, or owner already holds three active communities
    /// - `Err(AppError::Conflict)` - Guild is registered by another owner or already active
    pub async fn register(
        &self,
        owner_id: u64,
        capability: ManageCapability,
        param: CreateCommunityParam,
        now: DateTime<Utc>,
    ) -> Result<Community, AppError> {
        if !capability.allows_management() {
            return Err(AppError::Forbidden(
                "Only the server owner or an administrator can register this server".to_string(),
            ));
        }

        validate_listing(&param.name, &param.invite_code)?;
        let tags = Tags::normalize(&param.tags)?;

        let txn = self.db.begin().await?;
        let repo = CommunityRepository::new(&txn);

        let existing = repo.find_by_external_id(param.external_id).await?;
        if let Some(existing) = &existing {
            if existing.owner_id != owner_id {
                return Err(AppError::Conflict(
                    "This server is already registered by another user".to_string(),
                ));
            }
            if existing.is_active {
                return Err(AppError::Conflict(
                    "This server is already registered".to_string(),
                ));
            }
        }

        if repo.count_active_by_owner(owner_id).await? >= MAX_ACTIVE_PER_OWNER {
            return Err(AppError::BadRequest(format!(
                "You can register at most {} active servers",
                MAX_ACTIVE_PER_OWNER
            )));
        }

        let community = match existing {
            Some(existing) => {
                tracing::info!(
                    "Reactivating community {} for owner {}",
                    existing.external_id,
                    owner_id
                );
                repo.reactivate(existing.id, param, &tags, now).await?
            }
            None => repo.create(owner_id, param, &tags, now).await?,
        };

        txn.commit().await?;

        Ok(community)
    }

    /// Applies an owner edit to a community listing.
    ///
    /// # Returns
    /// - `Ok(Community)` - The updated community
    /// - `Err(AppError::NotFound)` - Guild not registered
    /// - `Err(AppError::Forbidden)` - Caller does not own the listing
    /// - `Err(AppError::BadRequest)` - Invalid tags or blank name/invite
    pub async fn update(
        &self,
        owner_id: u64,
        external_id: u64,
        param: UpdateCommunityParam,
        now: DateTime<Utc>,
    ) -> Result<Community, AppError> {
        let repo = CommunityRepository::new(self.db);
        let community = self.owned(&repo, owner_id, external_id).await?;

        validate_listing(
            param.name.as_deref().unwrap_or(&community.name),
            param.invite_code.as_deref().unwrap_or(&community.invite_code),
        )?;
        let tags = param.tags.as_ref().map(Tags::normalize).transpose()?;

        repo.update(community.id, param, tags.as_ref(), now).await
    }

    /// Soft-deletes an owner's community.
    ///
    /// The row and its bump history are kept; the guild can be registered again by the
    /// same owner.
    pub async fn deactivate(
        &self,
        owner_id: u64,
        external_id: u64,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let repo = CommunityRepository::new(self.db);
        let community = self.owned(&repo, owner_id, external_id).await?;

        repo.set_active(community.id, false, now).await?;

        Ok(())
    }

    /// Lists every community held by the owner, inactive ones included.
    pub async fn list_owned(&self, owner_id: u64) -> Result<Vec<Community>, AppError> {
        CommunityRepository::new(self.db).get_by_owner(owner_id).await
    }

    /// Searches the public directory.
    pub async fn search(
        &self,
        param: SearchCommunitiesParam,
    ) -> Result<PaginatedCommunities, AppError> {
        let repo = CommunityRepository::new(self.db);
        let (communities, total) = repo.search(&param).await?;

        let total_pages = total.div_ceil(param.per_page.max(1));

        Ok(PaginatedCommunities {
            communities,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Refreshes stored metadata from a gateway guild snapshot.
    ///
    /// # Returns
    /// - `Ok(true)` - The guild is registered and was refreshed
    /// - `Ok(false)` - The guild is not registered
    pub async fn refresh_guild(
        &self,
        snapshot: GuildSnapshotParam,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        CommunityRepository::new(self.db)
            .refresh_guild_metadata(snapshot, now)
            .await
    }

    /// Deactivates communities with no activity in the last `inactive_after_days` days.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of communities deactivated
    pub async fn deactivate_idle(
        &self,
        inactive_after_days: i64,
        now: DateTime<Utc>,
    ) -> Result<u64, AppError> {
        let cutoff = now - TimeDelta::days(inactive_after_days);

        CommunityRepository::new(self.db)
            .deactivate_idle(cutoff, now)
            .await
    }

    async fn owned(
        &self,
        repo: &CommunityRepository<'_, DatabaseConnection>,
        owner_id: u64,
        external_id: u64,
    ) -> Result<Community, AppError> {
        let community = repo
            .find_by_external_id(external_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Server not registered".to_string()))?;

        if community.owner_id != owner_id {
            return Err(AppError::Forbidden(
                "Only the owner can manage this server listing".to_string(),
            ));
        }

        Ok(community)
    }
}

fn validate_listing(name: &str, invite_code: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Server name is required".to_string()));
    }
    if invite_code.trim().is_empty() {
        return Err(AppError::BadRequest("Invite code is required".to_string()));
    }

    Ok(())
}
