use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;

use application::{
    FollowingDto, LikerDto, LikesDto, LoginDto, PublicationDto, PublicationTextDto,
    RegistrationDto, UserDto,
};

use crate::{error::ApiError, state::AppState};

pub const STATUS_MESSAGE: &str = "OpenChat: OK!";
pub const FOLLOWING_CREATED_MESSAGE: &str = "Following created.";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status))
        .route("/login", post(login))
        .route("/users", get(users).post(register_user))
        .route(
            "/users/{user_id}/timeline",
            get(timeline).post(add_publication),
        )
        .route("/users/{user_id}/wall", get(wall))
        .route("/followings", post(create_following))
        .route("/followings/{user_id}/followees", get(followers))
        .route("/publications/{publication_id}/like", post(like_publication))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn status() -> &'static str {
    STATUS_MESSAGE
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<Json<UserDto>, ApiError> {
    let receptionist = state.receptionist.lock().await;
    Ok(Json(receptionist.login(payload)?))
}

async fn users(State(state): State<AppState>) -> Result<Json<Vec<UserDto>>, ApiError> {
    let receptionist = state.receptionist.lock().await;
    Ok(Json(receptionist.users()?))
}

async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegistrationDto>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let mut receptionist = state.receptionist.lock().await;
    let dto = receptionist.register_user(payload)?;
    Ok((StatusCode::CREATED, Json(dto)))
}

async fn timeline(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<PublicationDto>>, ApiError> {
    let receptionist = state.receptionist.lock().await;
    Ok(Json(receptionist.timeline_of(&user_id)?))
}

async fn add_publication(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<PublicationTextDto>,
) -> Result<(StatusCode, Json<PublicationDto>), ApiError> {
    let mut receptionist = state.receptionist.lock().await;
    let dto = receptionist.add_publication(&user_id, payload)?;
    Ok((StatusCode::CREATED, Json(dto)))
}

async fn wall(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<PublicationDto>>, ApiError> {
    let receptionist = state.receptionist.lock().await;
    Ok(Json(receptionist.wall_of(&user_id)?))
}

async fn create_following(
    State(state): State<AppState>,
    Json(payload): Json<FollowingDto>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let mut receptionist = state.receptionist.lock().await;
    receptionist.followings(payload)?;
    Ok((StatusCode::CREATED, FOLLOWING_CREATED_MESSAGE))
}

/// 返回关注该用户的人
async fn followers(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let receptionist = state.receptionist.lock().await;
    Ok(Json(receptionist.followers_of(&user_id)?))
}

async fn like_publication(
    State(state): State<AppState>,
    Path(publication_id): Path<String>,
    Json(payload): Json<LikerDto>,
) -> Result<Json<LikesDto>, ApiError> {
    let mut receptionist = state.receptionist.lock().await;
    Ok(Json(
        receptionist.like_publication_identified_as(&publication_id, payload)?,
    ))
}
