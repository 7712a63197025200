use crate::domain::model::{Credentials, NewUser};
use crate::transport::http::handlers::common::json_422;
use crate::transport::http::types::{
    AppState, MessageResponse, UserResponse, MSG_LOGIN_OK, MSG_USER_REGISTERED,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/register",
    request_body = NewUser,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Email already registered", body = MessageResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = MessageResponse)
    )
)]
pub async fn register_handler(
    State(state): State<AppState>,
    request: Result<Json<NewUser>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(e, r#"{"name","email","walletAddress","role": "government" | "bidder"}"#).into_response();
        }
    };

    match state.service.register(request) {
        Ok(user) => (
            StatusCode::CREATED,
            Json(UserResponse {
                message: MSG_USER_REGISTERED.to_string(),
                user,
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = Credentials,
    responses(
        (status = 200, description = "Credentials matched a registered user", body = UserResponse),
        (status = 401, description = "No user matches both email and wallet", body = MessageResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = MessageResponse)
    )
)]
pub async fn login_handler(
    State(state): State<AppState>,
    request: Result<Json<Credentials>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, r#"{"email","walletAddress"}"#).into_response(),
    };

    match state.service.login(request) {
        Ok(user) => Json(UserResponse {
            message: MSG_LOGIN_OK.to_string(),
            user,
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
