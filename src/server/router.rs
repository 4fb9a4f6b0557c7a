use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER},
        HeaderName, Method,
    },
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        bump::{
            BumpRequestDto, BumpResponseDto, CooldownCheckDto, CooldownCheckRequestDto,
            VerifyServerDto, VerifyServerRequestDto,
        },
        community::{CommunityDto, CommunitySortDto, PaginatedCommunitiesDto},
    },
    server::{
        controller::{
            bump::{bump, check_cooldown, verify_server},
            community::list_communities,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Bumpboard API", description = "Discord community directory with bump cooldowns"),
    paths(
        crate::server::controller::bump::bump,
        crate::server::controller::bump::check_cooldown,
        crate::server::controller::bump::verify_server,
        crate::server::controller::community::list_communities,
    ),
    components(schemas(
        BumpRequestDto,
        BumpResponseDto,
        CooldownCheckRequestDto,
        CooldownCheckDto,
        VerifyServerRequestDto,
        VerifyServerDto,
        CommunityDto,
        CommunitySortDto,
        PaginatedCommunitiesDto,
        ErrorDto,
    ))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bump", post(bump))
        .route("/check-cooldown", post(check_cooldown))
        .route("/verify-server", post(verify_server))
        .route("/api/communities", get(list_communities))
}

/// Builds the complete HTTP application with state, docs and middleware applied.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
        .expose_headers([RETRY_AFTER])
}
