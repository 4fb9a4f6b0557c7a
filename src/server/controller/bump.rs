use axum::{
    extract::State,
    http::{header::RETRY_AFTER, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::{
    model::bump::{
        BumpRequestDto, BumpResponseDto, CooldownCheckDto, CooldownCheckRequestDto,
        VerifyServerDto, VerifyServerRequestDto,
    },
    server::{
        model::bump::{BumpOutcome, Denial, INTERNAL_FAILURE_MESSAGE},
        service::{
            bump::BumpService, cooldown::CooldownService, verification::VerificationService,
        },
        state::AppState,
    },
};

/// Tag for grouping bump endpoints in OpenAPI documentation
pub static BUMP_TAG: &str = "bump";

/// Bump a community.
///
/// Claims the community's one hour window and the user's two hour window, recording the
/// bump when both are clear. Cooldown refusals are not errors and carry the remaining
/// wait in the message and the `Retry-After` header.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Guild and user the bump is made for
///
/// # Returns
/// - `200 OK` - Bump recorded
/// - `400 Bad Request` - Community not registered or inactive
/// - `429 Too Many Requests` - Community or user cooldown still running
/// - `500 Internal Server Error` - Storage failure or timeout; safe to retry
#[utoipa::path(
    post,
    path = "/bump",
    tag = BUMP_TAG,
    request_body = BumpRequestDto,
    responses(
        (status = 200, description = "Bump recorded", body = BumpResponseDto),
        (status = 400, description = "Community not registered", body = BumpResponseDto),
        (status = 429, description = "Cooldown active", body = BumpResponseDto,
            headers(("Retry-After" = u64, description = "Seconds until the blocking window closes"))),
        (status = 500, description = "Internal server error", body = BumpResponseDto)
    ),
)]
pub async fn bump(State(state): State<AppState>, Json(payload): Json<BumpRequestDto>) -> Response {
    let service = BumpService::new(&state.db, state.storage_timeout);

    match service
        .attempt_bump(payload.community_external_id, payload.user_id, Utc::now())
        .await
    {
        Ok(outcome) => {
            if let BumpOutcome::Bumped(_) = &outcome {
                tracing::info!(
                    "Community {} bumped by {} ({}) from channel {}",
                    payload.community_external_id,
                    payload.username,
                    payload.user_id,
                    payload.channel_id.as_deref().unwrap_or("unknown")
                );
            }

            bump_response(outcome)
        }
        Err(err) => {
            if err.is_storage_failure() {
                tracing::warn!(
                    "Storage unavailable for bump of community {} by {}: {}",
                    payload.community_external_id,
                    payload.user_id,
                    err
                );
            } else {
                tracing::error!(
                    "Bump of community {} by {} ({}) failed: {}",
                    payload.community_external_id,
                    payload.username,
                    payload.user_id,
                    err
                );
            }

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(BumpResponseDto {
                    success: false,
                    message: INTERNAL_FAILURE_MESSAGE.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn bump_response(outcome: BumpOutcome) -> Response {
    let (status, retry_after) = match &outcome {
        BumpOutcome::Bumped(_) => (StatusCode::OK, None),
        BumpOutcome::Denied(Denial::NotRegistered) => (StatusCode::BAD_REQUEST, None),
        BumpOutcome::Denied(denial) => (
            StatusCode::TOO_MANY_REQUESTS,
            denial.remaining().map(|remaining| remaining.seconds()),
        ),
    };
    let body = Json(outcome.into_dto());

    match retry_after {
        Some(seconds) => (status, [(RETRY_AFTER, seconds.to_string())], body).into_response(),
        None => (status, body).into_response(),
    }
}

/// Check whether a bump would be allowed.
///
/// Read-only counterpart of `/bump`. Remaining waits are whole minutes, rounded up.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Guild and user to check
///
/// # Returns
/// - `200 OK` - Verdict, including for storage failures which report `canBump: false`
#[utoipa::path(
    post,
    path = "/check-cooldown",
    tag = BUMP_TAG,
    request_body = CooldownCheckRequestDto,
    responses(
        (status = 200, description = "Cooldown verdict", body = CooldownCheckDto)
    ),
)]
pub async fn check_cooldown(
    State(state): State<AppState>,
    Json(payload): Json<CooldownCheckRequestDto>,
) -> Json<CooldownCheckDto> {
    let service = CooldownService::new(&state.db, state.storage_timeout);

    match service
        .evaluate(payload.community_external_id, payload.user_id, Utc::now())
        .await
    {
        Ok(verdict) => Json(verdict.into_dto()),
        Err(err) => {
            tracing::error!(
                "Cooldown check for community {} failed: {}",
                payload.community_external_id,
                err
            );

            Json(CooldownCheckDto {
                can_bump: false,
                server_cooldown: None,
                user_cooldown: None,
                message: INTERNAL_FAILURE_MESSAGE.to_string(),
            })
        }
    }
}

/// Check whether a guild is registered.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Guild to look up
///
/// # Returns
/// - `200 OK` - Registration status; storage failures report `registered: false`
#[utoipa::path(
    post,
    path = "/verify-server",
    tag = BUMP_TAG,
    request_body = VerifyServerRequestDto,
    responses(
        (status = 200, description = "Registration status", body = VerifyServerDto)
    ),
)]
pub async fn verify_server(
    State(state): State<AppState>,
    Json(payload): Json<VerifyServerRequestDto>,
) -> Json<VerifyServerDto> {
    let service = VerificationService::new(&state.db, state.storage_timeout);

    match service.verify(payload.community_external_id).await {
        Ok(verification) => Json(verification.into_dto()),
        Err(err) => {
            tracing::error!(
                "Verification of community {} failed: {}",
                payload.community_external_id,
                err
            );

            Json(VerifyServerDto {
                registered: false,
                active: None,
                name: None,
                message: INTERNAL_FAILURE_MESSAGE.to_string(),
            })
        }
    }
}
