//! HTTP client for the DelPresence backend.
//!
//! Wraps a [`reqwest::Client`] with the base URL, bearer token and the
//! backend's JSON envelope:
//!
//! ```text
//! {"status": "success", "message": "...", "data": <payload>}
//! {"status": "error",   "message": "..."}
//! ```
//!
//! Every call runs inside an `api.request` span and carries a fresh
//! `X-Request-Id` header. Tokens whose `exp` claim has passed are rejected
//! before anything is sent.

use std::fmt;
use std::time::Instant;

use chrono::Utc;
use delpresence_auth::{TokenStore, check_not_expired};
use delpresence_config::ApiConfig;
use delpresence_core::ApiError;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{Instrument, debug, warn};
use uuid::Uuid;

use crate::api_request_span;
use crate::utils::tracing::{ErrorExt, record_http_status};

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Typed access to the DelPresence REST API.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig, token: Option<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// Builds a client from `API_URL` and the stored token, if any.
    pub fn from_env() -> Result<Self, ApiError> {
        let config = ApiConfig::from_env();
        let token = TokenStore::from_env()?.load();
        Self::new(&config, token)
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            check_not_expired(token, Utc::now())?;
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    /// GET a payload that must be present.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path)?;
        required(self.send(Method::GET, path, builder).await?, path)
    }

    /// GET a list; a `null` or missing payload is an empty list.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        self.get_list_with(path, &[]).await
    }

    /// GET a list with query parameters.
    pub async fn get_list_with<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, ApiError> {
        let builder = self.request(Method::GET, path)?.query(query);
        Ok(self
            .send::<Vec<T>>(Method::GET, path, builder)
            .await?
            .unwrap_or_default())
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path)?.json(body);
        required(self.send(Method::POST, path, builder).await?, path)
    }

    /// POST where the response payload, if any, is not needed.
    pub async fn post_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path)?.json(body);
        self.send::<Value>(Method::POST, path, builder).await?;
        Ok(())
    }

    /// POST whose payload may be omitted by the backend.
    pub async fn post_optional<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path)?.json(body);
        self.send(Method::POST, path, builder).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, path)?.json(body);
        required(self.send(Method::PUT, path, builder).await?, path)
    }

    /// PUT without a body, used for state transitions such as closing a session.
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        let builder = self.request(Method::PUT, path)?;
        self.send(Method::PUT, path, builder).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, path)?;
        self.send::<Value>(Method::DELETE, path, builder).await?;
        Ok(())
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        let request_id = Uuid::new_v4();
        let span = api_request_span!(method, path, request_id);
        let span_handle = span.clone();

        async move {
            let start = Instant::now();
            let response = builder
                .header(REQUEST_ID_HEADER, request_id.to_string())
                .send()
                .await
                .log_error("request failed before a response")?;

            let status = response.status();
            record_http_status(&span_handle, status.as_u16());
            let body = response.bytes().await?;
            let latency_ms = start.elapsed().as_millis();

            match decode_envelope(status, &body) {
                Ok(data) => {
                    debug!(status = status.as_u16(), latency_ms, "Request completed");
                    Ok(data)
                }
                Err(error) => {
                    warn!(status = status.as_u16(), latency_ms, %error, "Request rejected");
                    Err(error)
                }
            }
        }
        .instrument(span)
        .await
    }
}

fn required<T>(data: Option<T>, path: &str) -> Result<T, ApiError> {
    data.ok_or_else(|| ApiError::parse(format!("response from {path} has no data")))
}

/// Extracts the human-readable message from an error body.
fn error_message(body: &[u8]) -> Option<String> {
    if let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) {
        return ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string);
    }
    let text = String::from_utf8_lossy(body).trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Turns a response into its payload.
///
/// Bodies that are not an envelope (a bare array, or an object with neither
/// `data` nor `status` plus `message`) are decoded as the payload itself. An
/// empty body yields `None`.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<Option<T>, ApiError> {
    if !status.is_success() {
        let message = error_message(body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
        return Err(ApiError::api(status.as_u16(), message));
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: Value = serde_json::from_slice(body)?;
    let is_envelope = value
        .as_object()
        .is_some_and(|map| {
            map.contains_key("data")
                || (map.contains_key("status")
                    && (map.contains_key("message") || map.contains_key("error")))
        });
    if !is_envelope {
        return Ok(Some(serde_json::from_value(value)?));
    }

    let Value::Object(mut map) = value else {
        return Ok(None);
    };

    if let Some(envelope_status) = map.get("status").and_then(Value::as_str)
        && envelope_status != "success"
    {
        let message = error_message(body).unwrap_or_else(|| envelope_status.to_string());
        return Err(ApiError::api(status.as_u16(), message));
    }

    match map.remove("data") {
        None | Some(Value::Null) => Ok(None),
        Some(data) => Ok(Some(serde_json::from_value(data)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Room {
        id: u64,
        name: String,
    }

    fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<Option<T>, ApiError> {
        decode_envelope(StatusCode::from_u16(status).unwrap(), body.as_bytes())
    }

    #[test]
    fn test_decode_success_envelope() {
        let room: Option<Room> = decode(
            200,
            r#"{"status":"success","message":"ok","data":{"id":1,"name":"GD 511"}}"#,
        )
        .unwrap();
        assert_eq!(
            room,
            Some(Room {
                id: 1,
                name: "GD 511".to_string()
            })
        );
    }

    #[test]
    fn test_decode_bare_payload() {
        let rooms: Option<Vec<Room>> = decode(200, r#"[{"id":2,"name":"Lab 1"}]"#).unwrap();
        assert_eq!(rooms.unwrap().len(), 1);
    }

    #[test]
    fn test_decode_null_data_and_empty_body() {
        let none: Option<Vec<Room>> = decode(200, r#"{"status":"success","data":null}"#).unwrap();
        assert!(none.is_none());
        let empty: Option<Value> = decode(204, "").unwrap();
        assert!(empty.is_none());
    }

    #[test]
    fn test_decode_error_status_uses_message() {
        let err = decode::<Value>(409, r#"{"status":"error","message":"course already exists"}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Api { status: 409, ref message } if message == "course already exists"
        ));
    }

    #[test]
    fn test_decode_error_falls_back_to_error_field_and_reason() {
        let err = decode::<Value>(400, r#"{"error":"invalid day"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Api { ref message, .. } if message == "invalid day"));

        let err = decode::<Value>(404, "").unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 404, ref message } if message == "Not Found"));
    }

    #[test]
    fn test_decode_non_success_envelope_on_http_200() {
        let err = decode::<Value>(200, r#"{"status":"error","message":"schedule conflict"}"#)
            .unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 200, .. }));
    }

    #[test]
    fn test_decode_shape_mismatch_is_parse_error() {
        let err = decode::<Room>(200, r#"{"status":"success","data":{"id":"x"}}"#).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn test_client_trims_base_url_and_redacts_token() {
        let client = ApiClient::new(&ApiConfig::new("http://localhost:9000/"), Some("t".into()))
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(client.url("/api/admin/rooms"), "http://localhost:9000/api/admin/rooms");
        assert!(!format!("{client:?}").contains("\"t\""));
    }

    #[test]
    fn test_blank_token_is_dropped() {
        let client = ApiClient::new(&ApiConfig::default(), Some("  ".into())).unwrap();
        assert!(!client.has_token());
    }
}
