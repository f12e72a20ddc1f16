use axum::extract::Json;
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::shared::api_response::{ok, ApiResult, AppError};
use crate::system::auth::extractor::CurrentUser;
use crate::system::{auth::jwt, users::service as user_service};

/// POST /api/system/auth/login
pub async fn login(Json(request): Json<LoginRequest>) -> ApiResult<LoginResponse> {
    request.validate().map_err(AppError::Validation)?;

    let user = user_service::verify_credentials(&request.username, &request.password)
        .await?
        .ok_or(AppError::Unauthenticated)?;

    let access_token = jwt::generate_access_token(&user.id, &user.username, user.is_admin).await?;
    let refresh_token = user_service::issue_refresh_token(&user.id).await?;

    tracing::info!("User {} logged in", user.username);
    ok(LoginResponse {
        access_token,
        refresh_token,
        user: user.into(),
    })
}

/// POST /api/system/auth/refresh
pub async fn refresh(Json(request): Json<RefreshRequest>) -> ApiResult<RefreshResponse> {
    let user_id = user_service::refresh_token_owner(&request.refresh_token)
        .await?
        .ok_or(AppError::Unauthenticated)?;

    let user = user_service::get_by_id(&user_id)
        .await?
        .filter(|u| u.is_active)
        .ok_or(AppError::Unauthenticated)?;

    let access_token = jwt::generate_access_token(&user.id, &user.username, user.is_admin).await?;
    ok(RefreshResponse { access_token })
}

/// POST /api/system/auth/logout
pub async fn logout(Json(request): Json<RefreshRequest>) -> ApiResult<()> {
    user_service::revoke_refresh_token(&request.refresh_token).await?;
    ok(())
}

/// GET /api/system/auth/me
pub async fn current_user(CurrentUser(claims): CurrentUser) -> ApiResult<UserInfo> {
    let user = user_service::get_by_id(&claims.sub)
        .await?
        .ok_or_else(|| AppError::not_found("Usuario no encontrado"))?;
    ok(user.into())
}
