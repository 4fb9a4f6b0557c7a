//! Domain models for bump admission control
//!
//! Holds the cooldown windows, the verdicts produced by the cooldown evaluator and the
//! bump transaction, and the canonical user-facing copy for each outcome.

use chrono::{DateTime, TimeDelta, Utc};

use crate::{
    model::bump::{BumpResponseDto, CooldownCheckDto, VerifyServerDto},
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// Length of the per-community cooldown window in seconds.
pub const SERVER_COOLDOWN_SECS: i64 = 60 * 60;

/// Length of the per-user cooldown window in seconds.
pub const USER_COOLDOWN_SECS: i64 = 2 * 60 * 60;

pub fn server_cooldown() -> TimeDelta {
    TimeDelta::seconds(SERVER_COOLDOWN_SECS)
}

pub fn user_cooldown() -> TimeDelta {
    TimeDelta::seconds(USER_COOLDOWN_SECS)
}

/// A recorded successful bump.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpEvent {
    pub id: i32,
    pub community_id: i32,
    pub user_id: u64,
    pub bumped_at: DateTime<Utc>,
}

impl BumpEvent {
    pub fn from_entity(entity: entity::bump_event::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            community_id: entity.community_id,
            user_id: parse_u64_from_string(entity.user_id)?,
            bumped_at: entity.bumped_at,
        })
    }
}

/// Time left before a cooldown window closes.
///
/// Always rounded up to whole seconds so a blocked caller is never told to wait zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    seconds: u64,
}

impl Remaining {
    /// Builds the remaining wait until `until`, or `None` when `now` is already past it.
    pub fn until(until: DateTime<Utc>, now: DateTime<Utc>) -> Option<Self> {
        if now >= until {
            return None;
        }

        let delta = until - now;
        let mut seconds = delta.num_seconds();
        if delta.subsec_nanos() > 0 {
            seconds += 1;
        }

        Some(Self {
            seconds: seconds.max(1) as u64,
        })
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Whole minutes, rounded up.
    pub fn minutes(&self) -> u64 {
        self.seconds.div_ceil(60)
    }
}

/// Reason a bump is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    /// No community with this ID, or it has been deactivated.
    NotRegistered,
    /// The community was bumped less than an hour ago.
    ServerCooldown {
        community_name: String,
        remaining: Remaining,
    },
    /// The user bumped some community less than two hours ago.
    UserCooldown { remaining: Remaining },
}

impl Denial {
    pub fn remaining(&self) -> Option<Remaining> {
        match self {
            Self::NotRegistered => None,
            Self::ServerCooldown { remaining, .. } | Self::UserCooldown { remaining } => {
                Some(*remaining)
            }
        }
    }

    pub fn is_cooldown(&self) -> bool {
        !matches!(self, Self::NotRegistered)
    }

    pub fn message(&self) -> String {
        match self {
            Self::NotRegistered => NOT_REGISTERED_MESSAGE.to_string(),
            Self::ServerCooldown {
                community_name,
                remaining,
            } => format!(
                "⏰ **{}** was bumped recently!\n\n\
                 ⌛ Next bump available in: **{}**\n\n\
                 📋 Cooldown: 1 hour per server",
                community_name,
                format_minutes(remaining.minutes())
            ),
            Self::UserCooldown { remaining } => format!(
                "⏰ You bumped recently!\n\n\
                 ⌛ You can bump again in: **{}**\n\n\
                 📋 Cooldown: 2 hours per user",
                format_minutes(remaining.minutes())
            ),
        }
    }
}

pub const NOT_REGISTERED_MESSAGE: &str = "❌ This server has not been registered on the platform yet! \
     Ask the server owner to register it on our website.";

pub const INTERNAL_FAILURE_MESSAGE: &str = "❌ Internal error. Please try again in a few minutes.";

pub const READY_MESSAGE: &str = "✅ Ready to bump!";

fn format_minutes(minutes: u64) -> String {
    if minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{} minutes", minutes)
    }
}

/// Result of evaluating both cooldown windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Denied(Denial),
}

impl Verdict {
    pub fn into_dto(self) -> CooldownCheckDto {
        match self {
            Self::Allowed => CooldownCheckDto {
                can_bump: true,
                server_cooldown: None,
                user_cooldown: None,
                message: READY_MESSAGE.to_string(),
            },
            Self::Denied(denial) => {
                let message = denial.message();
                let (server_cooldown, user_cooldown) = match &denial {
                    Denial::NotRegistered => (None, None),
                    Denial::ServerCooldown { remaining, .. } => (Some(remaining.minutes()), None),
                    Denial::UserCooldown { remaining } => (None, Some(remaining.minutes())),
                };

                CooldownCheckDto {
                    can_bump: false,
                    server_cooldown,
                    user_cooldown,
                    message,
                }
            }
        }
    }
}

/// A committed bump.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpReceipt {
    pub community_name: String,
    pub bumped_at: DateTime<Utc>,
}

impl BumpReceipt {
    pub fn message(&self) -> String {
        format!(
            "🚀 **{}** was bumped successfully!\n\n\
             ✅ Next server bump available in: **1 hour**\n\
             🔄 You can use /bump again in: **2 hours**\n\n\
             💡 Keep the server active by bumping regularly!",
            self.community_name
        )
    }
}

/// Result of a bump attempt that reached a decision.
///
/// Storage faults are reported separately as `AppError`.
#[derive(Debug, Clone, PartialEq)]
pub enum BumpOutcome {
    Bumped(BumpReceipt),
    Denied(Denial),
}

impl BumpOutcome {
    pub fn message(&self) -> String {
        match self {
            Self::Bumped(receipt) => receipt.message(),
            Self::Denied(denial) => denial.message(),
        }
    }

    pub fn into_dto(self) -> BumpResponseDto {
        BumpResponseDto {
            success: matches!(self, Self::Bumped(_)),
            message: self.message(),
        }
    }
}

/// Registration status of a community.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub registered: bool,
    /// `None` when not registered.
    pub active: Option<bool>,
    pub name: Option<String>,
}

impl Verification {
    pub fn message(&self) -> &'static str {
        match self.active {
            None => "This server is not registered on the platform.",
            Some(true) => "Server registered and active!",
            Some(false) => "Server registered but inactive.",
        }
    }

    pub fn into_dto(self) -> VerifyServerDto {
        VerifyServerDto {
            registered: self.registered,
            message: self.message().to_string(),
            active: self.active,
            name: self.name,
        }
    }
}
