//! Response envelope shared by every endpoint
//!
//! `{ "status": "success" | "error", "message"?: string, "data": ... }`
//!
//! The backend of the original deployment sometimes prefixed the JSON with
//! HTML-formatted warnings. `parse_lenient` recovers the embedded JSON object
//! in that case. This is a workaround for a backend defect and should go away
//! once no server emits such bodies.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

static EMBEDDED_JSON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\{.*\}").expect("embedded JSON pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: ApiStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: ApiStatus::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Success,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Error,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Payload of a successful envelope
    pub fn into_result(self) -> Result<T, ApiError> {
        match self.status {
            ApiStatus::Error => Err(ApiError::Backend(
                self.message.unwrap_or_else(|| "Error del servidor".to_string()),
            )),
            ApiStatus::Success => self
                .data
                .ok_or_else(|| ApiError::Malformed("respuesta sin datos".to_string())),
        }
    }

    /// Only checks the status; for mutations whose `data` is irrelevant
    pub fn into_unit_result(self) -> Result<(), ApiError> {
        match self.status {
            ApiStatus::Error => Err(ApiError::Backend(
                self.message.unwrap_or_else(|| "Error del servidor".to_string()),
            )),
            ApiStatus::Success => Ok(()),
        }
    }
}

/// `data` of create/upsert responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedId {
    pub id: i64,
}

/// Failure of a backend call as seen by the console
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request could not be sent or no response arrived
    Network(String),
    /// Non-2xx status without a readable envelope
    Http(u16),
    /// Session missing or expired
    Unauthorized,
    /// Body is neither JSON nor HTML-wrapped JSON
    Malformed(String),
    /// Envelope with status "error"
    Backend(String),
    /// Rejected on the client before sending
    Validation(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Error de conexión: {}", e),
            ApiError::Http(code) => write!(f, "Error HTTP {}", code),
            ApiError::Unauthorized => write!(f, "Sesión caducada, vuelva a iniciar sesión"),
            ApiError::Malformed(e) => write!(f, "Respuesta no válida del servidor: {}", e),
            ApiError::Backend(msg) => write!(f, "{}", msg),
            ApiError::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// First `{ ... }` block of a body (greedy up to the last closing brace)
pub fn extract_embedded_json(body: &str) -> Option<&str> {
    EMBEDDED_JSON.find(body).map(|m| m.as_str())
}

/// Parse JSON, falling back to the JSON object embedded in an HTML body
pub fn parse_lenient<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<T>(body) {
        Ok(v) => Ok(v),
        Err(first) => {
            let embedded = extract_embedded_json(body)
                .ok_or_else(|| ApiError::Malformed(first.to_string()))?;
            serde_json::from_str::<T>(embedded).map_err(|e| ApiError::Malformed(e.to_string()))
        }
    }
}

/// Like `parse_lenient`, returning `fallback` when nothing can be recovered
pub fn parse_lenient_or<T: DeserializeOwned>(body: &str, fallback: T) -> T {
    parse_lenient(body).unwrap_or(fallback)
}

/// Decode an HTTP response into the payload of its envelope
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    match parse_lenient::<ApiEnvelope<T>>(body) {
        Ok(envelope) => envelope.into_result(),
        Err(_) if !(200..300).contains(&status) => Err(ApiError::Http(status)),
        Err(e) => Err(e),
    }
}

/// Decode an HTTP response whose payload is not needed
pub fn decode_envelope_unit(status: u16, body: &str) -> Result<(), ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    match parse_lenient::<ApiEnvelope<serde_json::Value>>(body) {
        Ok(envelope) => envelope.into_unit_result(),
        Err(_) if !(200..300).contains(&status) => Err(ApiError::Http(status)),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_envelope() {
        let body = r#"{"status":"success","data":[1,2,3]}"#;
        let data: Vec<i32> = decode_envelope(200, body).unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_error_envelope_keeps_message() {
        let body = r#"{"status":"error","message":"Editorial no encontrada","data":null}"#;
        let err = decode_envelope::<Vec<i32>>(404, body).unwrap_err();
        assert_eq!(err, ApiError::Backend("Editorial no encontrada".into()));
    }

    #[test]
    fn test_html_wrapped_json_is_recovered() {
        let body = "<br />\n<b>Warning</b>: Undefined index in <b>/srv/api.php</b><br />\n\
                    {\"status\":\"success\",\"data\":{\"id\":12}}";
        let created: CreatedId = decode_envelope(200, body).unwrap();
        assert_eq!(created.id, 12);
    }

    #[test]
    fn test_unrecoverable_body() {
        let err = decode_envelope::<CreatedId>(200, "<html>Fatal error</html>").unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
        assert_eq!(
            decode_envelope::<CreatedId>(502, "Bad gateway").unwrap_err(),
            ApiError::Http(502)
        );
        assert_eq!(parse_lenient_or::<Vec<i32>>("<p>nope</p>", vec![]), Vec::<i32>::new());
    }

    #[test]
    fn test_unauthorized_short_circuits() {
        let body = r#"{"status":"error","message":"token","data":null}"#;
        assert_eq!(decode_envelope_unit(401, body), Err(ApiError::Unauthorized));
    }

    #[test]
    fn test_unit_result_ignores_missing_data() {
        assert!(decode_envelope_unit(200, r#"{"status":"success","data":null}"#).is_ok());
        assert!(decode_envelope_unit(200, r#"{"status":"success"}"#).is_ok());
    }
}
