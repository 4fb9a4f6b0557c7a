use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::{deserialize_u64_from_string, serialize_u64_as_string};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommunityDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub external_id: u64,
    pub name: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub invite_code: String,
    pub member_count: i32,
    pub tags: Vec<String>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    #[schema(value_type = Option<i64>)]
    pub last_bump_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedCommunitiesDto {
    pub communities: Vec<CommunityDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Directory ordering.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CommunitySortDto {
    /// Most recently bumped first; never-bumped communities last.
    #[default]
    #[serde(alias = "recent")]
    Bump,
    /// Largest member count first.
    Members,
    /// Alphabetical by name.
    Name,
}

#[derive(Deserialize, Debug, Clone, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommunitySearchQuery {
    /// Whitespace separated keywords matched against tags.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub sort: CommunitySortDto,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    12
}
