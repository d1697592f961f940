use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Form,
};

use crate::{
    dto::auth_dto::{LoginPayload, TokenResponse},
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/token",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Token issued", body = Json<TokenResponse>),
        (status = 401, description = "Unknown mobile number or wrong password")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Form(payload): Form<LoginPayload>,
) -> Result<impl IntoResponse> {
    let token = state
        .auth_service
        .authenticate(&payload.username, &payload.password)
        .await?;
    Ok(Json(TokenResponse::bearer(token)))
}
