//! Calls to the backend
//!
//! Every response is an `ApiEnvelope`; these helpers attach the bearer token,
//! decode the envelope and turn every failure into an `ApiError`.

use contracts::shared::envelope::{decode_envelope, decode_envelope_unit, ApiError};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

/// Backend base URL: same host as the page, port 3000
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Full URL of an API path, e.g. `api_url("/crud/libros")`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn read(response: gloo_net::http::Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    Ok((status, body))
}

async fn send(builder: RequestBuilder) -> Result<(u16, String), ApiError> {
    let response = with_auth(builder).send().await.map_err(network)?;
    read(response).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<(u16, String), ApiError> {
    let request = with_auth(builder)
        .json(body)
        .map_err(|e| ApiError::Malformed(e.to_string()))?;
    let response = request.send().await.map_err(network)?;
    read(response).await
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let (status, body) = send(Request::get(&api_url(path))).await?;
    decode_envelope(status, &body)
}

/// Like `get`, with 404 meaning "nothing there yet"
pub async fn get_optional<T: DeserializeOwned>(path: &str) -> Result<Option<T>, ApiError> {
    let (status, body) = send(Request::get(&api_url(path))).await?;
    if status == 404 {
        return Ok(None);
    }
    decode_envelope(status, &body).map(Some)
}

pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let (status, text) = send_json(Request::post(&api_url(path)), body).await?;
    decode_envelope(status, &text)
}

/// POST whose response carries no payload
pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let (status, text) = send_json(Request::post(&api_url(path)), body).await?;
    decode_envelope_unit(status, &text)
}

pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let (status, text) = send_json(Request::put(&api_url(path)), body).await?;
    decode_envelope(status, &text)
}

/// PUT without a body (state toggles)
pub async fn put_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let (status, body) = send(Request::put(&api_url(path))).await?;
    decode_envelope(status, &body)
}

pub async fn delete_unit(path: &str) -> Result<(), ApiError> {
    let (status, body) = send(Request::delete(&api_url(path))).await?;
    decode_envelope_unit(status, &body)
}
