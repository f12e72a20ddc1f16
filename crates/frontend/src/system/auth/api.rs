use contracts::shared::envelope::{decode_envelope, decode_envelope_unit, ApiError};
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    request.validate().map_err(ApiError::Validation)?;

    let response = Request::post(&api_url("/api/system/auth/login"))
        .json(&request)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    let status = response.status();
    // Wrong credentials answer 401 with a readable message
    if status == 401 {
        return Err(ApiError::Backend("Usuario o contraseña incorrectos".into()));
    }
    let body = response.text().await.map_err(network)?;
    decode_envelope(status, &body)
}

/// New access token from the refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/api/system/auth/refresh"))
        .json(&request)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    let status = response.status();
    let body = response.text().await.map_err(network)?;
    decode_envelope(status, &body)
}

/// Revoke the refresh token
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/api/system/auth/logout"))
        .json(&request)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    let status = response.status();
    let body = response.text().await.map_err(network)?;
    decode_envelope_unit(status, &body)
}

pub async fn get_current_user(access_token: &str) -> Result<UserInfo, ApiError> {
    let response = Request::get(&api_url("/api/system/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(network)?;

    let status = response.status();
    let body = response.text().await.map_err(network)?;
    decode_envelope(status, &body)
}
