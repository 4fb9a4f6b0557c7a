//! Cooldown evaluation for bump admission control.
//!
//! `evaluate_cooldown` is the pure decision over registry and ledger state; it is shared
//! by the read-only cooldown check and the bump transaction. `CooldownService` loads that
//! state under the storage timeout.

use std::time::Duration;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{bump_event::BumpEventRepository, community::CommunityRepository},
    error::AppError,
    model::{
        bump::{server_cooldown, user_cooldown, BumpEvent, Denial, Remaining, Verdict},
        community::Community,
    },
    util::timeout::with_timeout,
};

/// Decides whether a bump is allowed at `now`.
///
/// The server window is checked strictly before the user window, so a caller blocked by
/// both is told about the server cooldown.
///
/// # Arguments
/// - `community` - Registry row for the guild, if any
/// - `last_user_bump` - The user's most recent ledger entry, if any
/// - `now` - Evaluation time
pub fn evaluate_cooldown(
    community: Option<&Community>,
    last_user_bump: Option<&BumpEvent>,
    now: DateTime<Utc>,
) -> Verdict {
    let community = match community {
        Some(community) if community.is_active => community,
        _ => return Verdict::Denied(Denial::NotRegistered),
    };

    if let Some(remaining) = community
        .last_bump_at
        .and_then(|at| Remaining::until(at + server_cooldown(), now))
    {
        return Verdict::Denied(Denial::ServerCooldown {
            community_name: community.name.clone(),
            remaining,
        });
    }

    if let Some(remaining) =
        last_user_bump.and_then(|event| Remaining::until(event.bumped_at + user_cooldown(), now))
    {
        return Verdict::Denied(Denial::UserCooldown { remaining });
    }

    Verdict::Allowed
}

pub struct CooldownService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> CooldownService<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Evaluates both cooldown windows without writing anything.
    ///
    /// # Returns
    /// - `Ok(Verdict)` - Allowed or the denial reason with remaining wait
    /// - `Err(AppError)` - Storage failure or timeout
    pub async fn evaluate(
        &self,
        external_id: u64,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> Result<Verdict, AppError> {
        let (community, last_user_bump) =
            with_timeout(self.timeout, self.load_state(external_id, user_id, now)).await?;

        Ok(evaluate_cooldown(
            community.as_ref(),
            last_user_bump.as_ref(),
            now,
        ))
    }

    async fn load_state(
        &self,
        external_id: u64,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> Result<(Option<Community>, Option<BumpEvent>), AppError> {
        let community = CommunityRepository::new(self.db)
            .find_active_by_external_id(external_id)
            .await?;

        if community.is_none() {
            return Ok((None, None));
        }

        let last_user_bump = BumpEventRepository::new(self.db)
            .latest_for_user_since(user_id, now - user_cooldown())
            .await?;

        Ok((community, last_user_bump))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn community(last_bump_at: Option<DateTime<Utc>>) -> Community {
        let entity = test_utils::fixture::community_entity_builder()
            .name("Rustaceans")
            .last_bump_at(last_bump_at)
            .build();

        Community::from_entity(entity).unwrap()
    }

    fn user_bump(bumped_at: DateTime<Utc>) -> BumpEvent {
        BumpEvent {
            id: 1,
            community_id: 99,
            user_id: 500,
            bumped_at,
        }
    }

    #[test]
    fn missing_community_is_not_registered() {
        assert_eq!(
            evaluate_cooldown(None, None, now()),
            Verdict::Denied(Denial::NotRegistered)
        );
    }

    #[test]
    fn inactive_community_is_not_registered() {
        let mut inactive = community(None);
        inactive.is_active = false;

        assert_eq!(
            evaluate_cooldown(Some(&inactive), None, now()),
            Verdict::Denied(Denial::NotRegistered)
        );
    }

    #[test]
    fn never_bumped_community_has_no_server_cooldown() {
        assert_eq!(
            evaluate_cooldown(Some(&community(None)), None, now()),
            Verdict::Allowed
        );
    }

    #[test]
    fn bump_thirty_minutes_ago_blocks_for_remaining_half_hour() {
        let verdict = evaluate_cooldown(
            Some(&community(Some(now() - TimeDelta::minutes(30)))),
            None,
            now(),
        );

        let Verdict::Denied(Denial::ServerCooldown { remaining, .. }) = verdict else {
            panic!("expected server cooldown, got {:?}", verdict);
        };
        assert_eq!(remaining.seconds(), 1800);
        assert_eq!(remaining.minutes(), 30);
    }

    #[test]
    fn bump_ninety_minutes_ago_is_allowed() {
        let verdict = evaluate_cooldown(
            Some(&community(Some(now() - TimeDelta::minutes(90)))),
            None,
            now(),
        );

        assert_eq!(verdict, Verdict::Allowed);
    }

    #[test]
    fn server_window_closes_exactly_after_one_hour() {
        let verdict = evaluate_cooldown(
            Some(&community(Some(now() - TimeDelta::hours(1)))),
            None,
            now(),
        );

        assert_eq!(verdict, Verdict::Allowed);
    }

    #[test]
    fn recent_user_bump_blocks_with_user_cooldown() {
        let verdict = evaluate_cooldown(
            Some(&community(Some(now() - TimeDelta::minutes(90)))),
            Some(&user_bump(now() - TimeDelta::minutes(10))),
            now(),
        );

        let Verdict::Denied(Denial::UserCooldown { remaining }) = verdict else {
            panic!("expected user cooldown, got {:?}", verdict);
        };
        assert_eq!(remaining.seconds(), 6600);
    }

    #[test]
    fn server_cooldown_takes_precedence_over_user_cooldown() {
        let verdict = evaluate_cooldown(
            Some(&community(Some(now() - TimeDelta::minutes(5)))),
            Some(&user_bump(now() - TimeDelta::minutes(5))),
            now(),
        );

        assert!(matches!(
            verdict,
            Verdict::Denied(Denial::ServerCooldown { .. })
        ));
    }

    #[test]
    fn sub_second_remaining_is_reported_as_one_second() {
        let verdict = evaluate_cooldown(
            Some(&community(Some(
                now() - TimeDelta::hours(1) + TimeDelta::milliseconds(1),
            ))),
            None,
            now(),
        );

        let Verdict::Denied(denial) = verdict else {
            panic!("expected denial");
        };
        assert_eq!(denial.remaining().map(|r| r.seconds()), Some(1));
    }
}
