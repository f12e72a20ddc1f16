use axum::{body::Body, extract::Request, http::HeaderMap, middleware::Next, response::Response};

use crate::shared::api_response::AppError;

/// Token of an `Authorization: Bearer ...` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Middleware that requires a valid access token
pub async fn require_auth(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let token = bearer_token(req.headers()).ok_or(AppError::Unauthenticated)?;

    let claims = super::jwt::validate_token(token).await.map_err(|e| {
        tracing::debug!("Rejected token: {}", e);
        AppError::Unauthenticated
    })?;

    // Handlers read the claims through `CurrentUser`
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert("Authorization", HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert("Authorization", HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);

        headers.insert("Authorization", HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }
}
