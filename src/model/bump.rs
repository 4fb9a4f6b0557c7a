use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{deserialize_u64_from_string, serialize_u64_as_string};

/// Bump request sent by the bot (or any other dispatcher) for a guild.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BumpRequestDto {
    #[serde(
        alias = "guildId",
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub community_external_id: u64,
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub user_id: u64,
    #[serde(default)]
    pub username: String,
    /// Channel the bump was issued from; only used for logging.
    #[serde(default)]
    pub channel_id: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BumpResponseDto {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CooldownCheckRequestDto {
    #[serde(
        alias = "guildId",
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub community_external_id: u64,
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub user_id: u64,
}

/// Cooldown verdict. Remaining waits are whole minutes, rounded up.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CooldownCheckDto {
    pub can_bump: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_cooldown: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_cooldown: Option<u64>,
    pub message: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyServerRequestDto {
    #[serde(
        alias = "guildId",
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub community_external_id: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VerifyServerDto {
    pub registered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub message: String,
}
