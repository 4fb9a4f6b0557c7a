use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        community::{CommunitySearchQuery, PaginatedCommunitiesDto},
    },
    server::{
        error::AppError,
        model::community::SearchCommunitiesParam,
        service::community::CommunityService,
        state::AppState,
    },
};

/// Tag for grouping directory endpoints in OpenAPI documentation
pub static COMMUNITY_TAG: &str = "community";

/// Largest page size the directory serves.
const MAX_ENTRIES: u64 = 50;

/// List active communities in the directory.
///
/// Keywords in `q` are matched against community tags; a community is listed when any
/// keyword equals one of its tags.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Keywords, sort order and pagination
///
/// # Returns
/// - `200 OK` - One page of matching communities
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/communities",
    tag = COMMUNITY_TAG,
    params(CommunitySearchQuery),
    responses(
        (status = 200, description = "Successfully retrieved communities", body = PaginatedCommunitiesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_communities(
    State(state): State<AppState>,
    Query(query): Query<CommunitySearchQuery>,
) -> Result<Json<PaginatedCommunitiesDto>, AppError> {
    let service = CommunityService::new(&state.db);

    let param = SearchCommunitiesParam {
        keywords: SearchCommunitiesParam::keywords_from_query(query.q.as_deref()),
        sort: query.sort.into(),
        page: query.page,
        per_page: query.entries.clamp(1, MAX_ENTRIES),
    };

    let communities = service.search(param).await?;

    Ok(Json(communities.into_dto()))
}
