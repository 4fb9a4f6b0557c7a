//! Bump transaction.
//!
//! A bump claims the community's window with a conditional write, re-checks the user
//! window under the same write lock, then appends to the ledger. Both writes commit
//! together or not at all.

use std::time::Duration;

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{bump_event::BumpEventRepository, community::CommunityRepository},
    error::{internal::InternalError, AppError},
    model::bump::{user_cooldown, BumpOutcome, BumpReceipt, Denial, Remaining, Verdict},
    service::cooldown::CooldownService,
    util::timeout::with_timeout,
};

/// Upper bound on conditional-write attempts for a single bump.
///
/// A lost race is normally explained by a concurrent successful bump and ends in a
/// cooldown denial; retries only cover races with transactions that rolled back.
pub const MAX_BUMP_ATTEMPTS: u32 = 3;

enum Attempt {
    Committed(BumpReceipt),
    Denied(Denial),
    LostRace,
}

pub struct BumpService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> BumpService<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Attempts to bump a community on behalf of a user.
    ///
    /// # Arguments
    /// - `external_id` - Discord guild ID of the community
    /// - `user_id` - Discord ID of the bumping user
    /// - `now` - Bump time, written to both `last_bump_at` and the ledger
    ///
    /// # Returns
    /// - `Ok(BumpOutcome::Bumped)` - Both writes committed
    /// - `Ok(BumpOutcome::Denied)` - Not registered or cooling down; nothing written
    /// - `Err(AppError)` - Storage failure, timeout, or exhausted retries; nothing written
    pub async fn attempt_bump(
        &self,
        external_id: u64,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> Result<BumpOutcome, AppError> {
        for attempt in 1..=MAX_BUMP_ATTEMPTS {
            match with_timeout(self.timeout, self.try_commit(external_id, user_id, now)).await? {
                Attempt::Committed(receipt) => {
                    tracing::info!(
                        "Community {} bumped by user {} at {}",
                        external_id,
                        user_id,
                        receipt.bumped_at
                    );
                    return Ok(BumpOutcome::Bumped(receipt));
                }
                Attempt::Denied(denial) => {
                    tracing::debug!(
                        "Bump of community {} by user {} denied: {:?}",
                        external_id,
                        user_id,
                        denial
                    );
                    return Ok(BumpOutcome::Denied(denial));
                }
                Attempt::LostRace => {
                    tracing::debug!(
                        "Bump of community {} by user {} lost write race (attempt {}/{})",
                        external_id,
                        user_id,
                        attempt,
                        MAX_BUMP_ATTEMPTS
                    );
                }
            }
        }

        Err(InternalError::BumpContention {
            external_id,
            attempts: MAX_BUMP_ATTEMPTS,
        }
        .into())
    }

    async fn try_commit(
        &self,
        external_id: u64,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> Result<Attempt, AppError> {
        let txn = self.db.begin().await?;
        let community_repo = CommunityRepository::new(&txn);

        if !community_repo.try_mark_bumped(external_id, now).await? {
            txn.rollback().await?;

            // Nothing was claimed; explain the refusal from committed state.
            let verdict = CooldownService::new(self.db, self.timeout)
                .evaluate(external_id, user_id, now)
                .await?;

            return Ok(match verdict {
                Verdict::Denied(denial) => Attempt::Denied(denial),
                Verdict::Allowed => Attempt::LostRace,
            });
        }

        let community = match community_repo.find_active_by_external_id(external_id).await? {
            Some(community) => community,
            None => {
                txn.rollback().await?;
                return Ok(Attempt::LostRace);
            }
        };

        let ledger = BumpEventRepository::new(&txn);
        let last_user_bump = ledger
            .latest_for_user_since(user_id, now - user_cooldown())
            .await?;

        if let Some(remaining) =
            last_user_bump.and_then(|event| Remaining::until(event.bumped_at + user_cooldown(), now))
        {
            txn.rollback().await?;
            return Ok(Attempt::Denied(Denial::UserCooldown { remaining }));
        }

        ledger.create(community.id, user_id, now).await?;
        txn.commit().await?;

        Ok(Attempt::Committed(BumpReceipt {
            community_name: community.name,
            bumped_at: now,
        }))
    }
}
