//! Domain & parameter models for community registry operations
//!
//! Defines the community domain model, tag normalization rules, the owner capability
//! predicate, and the parameter models for registry writes and directory search.

use chrono::{DateTime, Utc};
use serenity::all::Permissions;

use crate::{
    model::community::{CommunityDto, CommunitySortDto, PaginatedCommunitiesDto},
    server::{
        error::{internal::InternalError, AppError},
        util::parse::parse_u64_from_string,
    },
};

/// Maximum number of tags per community.
pub const MAX_TAGS: usize = 5;

/// Maximum length of a single tag, in characters.
pub const MAX_TAG_LENGTH: usize = 20;

/// Maximum number of active communities a single owner may hold.
pub const MAX_ACTIVE_PER_OWNER: u64 = 3;

/// A registered Discord server listed in the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Community {
    pub id: i32,
    /// Discord guild ID.
    pub external_id: u64,
    pub name: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub invite_code: String,
    pub member_count: i32,
    /// Discord ID of the owning user.
    pub owner_id: u64,
    pub tags: Tags,
    pub is_active: bool,
    /// Time of the most recent successful bump, `None` until the first one.
    pub last_bump_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Community {
    /// Converts an entity model to the community domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Community)` - The converted community domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored guild or owner ID is not a u64
    /// - `Err(AppError::InternalErr(MalformedTags))` - Stored tags are not a JSON string array
    pub fn from_entity(entity: entity::community::Model) -> Result<Self, AppError> {
        let external_id = parse_u64_from_string(entity.external_id)?;
        let owner_id = parse_u64_from_string(entity.owner_id)?;
        let tags = Tags::from_column(entity.tags)?;

        Ok(Self {
            id: entity.id,
            external_id,
            name: entity.name,
            description: entity.description,
            icon_url: entity.icon_url,
            invite_code: entity.invite_code,
            member_count: entity.member_count,
            owner_id,
            tags,
            is_active: entity.is_active,
            last_bump_at: entity.last_bump_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> CommunityDto {
        CommunityDto {
            external_id: self.external_id,
            name: self.name,
            description: self.description,
            icon_url: self.icon_url,
            invite_code: self.invite_code,
            member_count: self.member_count,
            tags: self.tags.into_vec(),
            last_bump_at: self.last_bump_at,
        }
    }
}

/// Normalized community tags.
///
/// At most [`MAX_TAGS`] entries, each trimmed, lowercased, non-empty, at most
/// [`MAX_TAG_LENGTH`] characters and unique. Insertion order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tags(Vec<String>);

impl Tags {
    /// Normalizes raw user input into a tag set.
    ///
    /// # Returns
    /// - `Ok(Tags)` - Normalized tags
    /// - `Err(AppError::BadRequest)` - A tag is too long or more than five distinct tags remain
    pub fn normalize<I, S>(raw: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: Vec<String> = Vec::new();

        for tag in raw {
            let tag = tag.as_ref().trim().to_lowercase();
            if tag.is_empty() || tags.contains(&tag) {
                continue;
            }
            if tag.chars().count() > MAX_TAG_LENGTH {
                return Err(AppError::BadRequest(format!(
                    "Tag '{}' exceeds {} characters",
                    tag, MAX_TAG_LENGTH
                )));
            }
            tags.push(tag);
        }

        if tags.len() > MAX_TAGS {
            return Err(AppError::BadRequest(format!(
                "A community can have at most {} tags",
                MAX_TAGS
            )));
        }

        Ok(Self(tags))
    }

    /// Decodes the JSON array stored in the `tags` column.
    pub fn from_column(value: String) -> Result<Self, AppError> {
        match serde_json::from_str::<Vec<String>>(&value) {
            Ok(tags) => Ok(Self(tags)),
            Err(source) => Err(InternalError::MalformedTags { value, source }.into()),
        }
    }

    /// Encodes the tags for the `tags` column.
    pub fn to_column(&self) -> String {
        serde_json::Value::from(self.0.clone()).to_string()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Capability predicate supplied by the identity collaborator.
///
/// A Discord user may manage a community listing when they own the guild or hold the
/// `ADMINISTRATOR` permission bit in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManageCapability {
    pub is_owner: bool,
    /// Raw permission bitfield as reported by Discord's `/users/@me/guilds`.
    pub permissions: u64,
}

impl ManageCapability {
    pub fn allows_management(&self) -> bool {
        self.is_owner || Permissions::from_bits_truncate(self.permissions).administrator()
    }
}

/// Parameters for registering a community
#[derive(Debug, Clone)]
pub struct CreateCommunityParam {
    pub external_id: u64,
    pub name: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub invite_code: String,
    pub member_count: i32,
    /// Raw tags, normalized by the service.
    pub tags: Vec<String>,
}

/// Parameters for updating an existing community
///
/// Only provided fields are updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateCommunityParam {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Outer option indicates presence, inner option the nullable value.
    pub icon_url: Option<Option<String>>,
    pub invite_code: Option<String>,
    pub member_count: Option<i32>,
    pub tags: Option<Vec<String>>,
}

/// Guild metadata refreshed from the Discord gateway.
#[derive(Debug, Clone)]
pub struct GuildSnapshotParam {
    pub external_id: u64,
    pub name: String,
    pub icon_url: Option<String>,
    pub member_count: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommunitySort {
    #[default]
    LastBump,
    MemberCount,
    Name,
}

impl From<CommunitySortDto> for CommunitySort {
    fn from(dto: CommunitySortDto) -> Self {
        match dto {
            CommunitySortDto::Bump => Self::LastBump,
            CommunitySortDto::Members => Self::MemberCount,
            CommunitySortDto::Name => Self::Name,
        }
    }
}

/// Parameters for searching the public directory
#[derive(Debug, Clone)]
pub struct SearchCommunitiesParam {
    /// Lowercased keywords; a community matches when every keyword equals one of its tags.
    pub keywords: Vec<String>,
    pub sort: CommunitySort,
    /// Page number (0-indexed).
    pub page: u64,
    pub per_page: u64,
}

impl SearchCommunitiesParam {
    /// Splits a free-text query into lowercased keywords.
    pub fn keywords_from_query(query: Option<&str>) -> Vec<String> {
        query
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }
}

/// One page of directory search results
#[derive(Debug, Clone)]
pub struct PaginatedCommunities {
    pub communities: Vec<Community>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedCommunities {
    pub fn into_dto(self) -> PaginatedCommunitiesDto {
        PaginatedCommunitiesDto {
            communities: self.communities.into_iter().map(Community::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
