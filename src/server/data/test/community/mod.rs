use crate::server::{
    data::community::CommunityRepository,
    error::AppError,
    model::community::{
        CommunitySort, CreateCommunityParam, GuildSnapshotParam, SearchCommunitiesParam, Tags,
        UpdateCommunityParam,
    },
};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory, factory::community::CommunityFactory};

mod create;
mod deactivate_idle;
mod find_by_external_id;
mod refresh_guild_metadata;
mod search;
mod try_mark_bumped;
mod update;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn create_param(external_id: u64) -> CreateCommunityParam {
    CreateCommunityParam {
        external_id,
        name: "Rustaceans".to_string(),
        description: "Systems programming chat".to_string(),
        icon_url: None,
        invite_code: "rustaceans".to_string(),
        member_count: 1200,
        tags: vec!["rust".to_string()],
    }
}
