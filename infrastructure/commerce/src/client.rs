use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use business::domain::errors::GatewayError;
use business::domain::product::value_objects::MediaBase;

/// Selector understood by the backend's single endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Products,
    Product,
    Categories,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Products => "products",
            Action::Product => "product",
            Action::Categories => "categories",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shared HTTP client for the commerce backend.
pub struct CommerceClient {
    pub client: Client,
    pub api_url: String,
    pub media: MediaBase,
}

impl CommerceClient {
    pub fn new(api_url: String, base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_url,
            media: MediaBase::new(base_url),
        }
    }

    /// Builds the query pairs for one call: the action first, then its
    /// parameters.
    pub fn query(action: Action, params: &[(&'static str, String)]) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(params.len() + 1);
        query.push(("action", action.as_str().to_string()));
        query.extend(params.iter().cloned());
        query
    }

    /// Issues `GET <api_url>?action=…` and returns the decoded JSON body.
    pub async fn fetch(
        &self,
        action: Action,
        params: &[(&'static str, String)],
    ) -> Result<Value, GatewayError> {
        let query = Self::query(action, params);
        tracing::debug!(action = %action, ?params, "commerce request");

        let response = self
            .client
            .get(&self.api_url)
            .header(CONTENT_TYPE, "application/json")
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(action = %action, error = %e, "commerce request failed");
                GatewayError::transport(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::transport(e.to_string()))?;

        interpret_response(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            &body,
        )
        .inspect_err(|e| tracing::warn!(action = %action, error = %e, "commerce call failed"))
    }
}

/// Reads one backend response.
///
/// A non-success status wins over the body; otherwise a truthy top-level
/// `error` field marks the call as failed regardless of status.
pub fn interpret_response(status: u16, reason: &str, body: &str) -> Result<Value, GatewayError> {
    if !(200..300).contains(&status) {
        return Err(GatewayError::status(status, reason));
    }

    let data: Value =
        serde_json::from_str(body).map_err(|e| GatewayError::decode(e.to_string()))?;

    match data.get("error") {
        Some(error) if is_truthy(error) => Err(GatewayError::backend(error_message(error))),
        _ => Ok(data),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn error_message(error: &Value) -> String {
    match error {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_put_action_first_in_query() {
        let query = CommerceClient::query(
            Action::Products,
            &[("limit", "12".to_string()), ("page", "2".to_string())],
        );

        assert_eq!(
            query,
            vec![
                ("action", "products".to_string()),
                ("limit", "12".to_string()),
                ("page", "2".to_string()),
            ]
        );
    }

    #[test]
    fn should_return_body_when_status_is_success() {
        let data = interpret_response(200, "OK", r#"{"items":[],"total_count":0}"#).unwrap();
        assert_eq!(data, json!({"items": [], "total_count": 0}));
    }

    #[test]
    fn should_fail_with_status_when_response_is_not_success() {
        let error = interpret_response(404, "Not Found", "<html>nope</html>").unwrap_err();

        assert_eq!(error, GatewayError::status(404, "Not Found"));
        assert_eq!(error.to_string(), "API Error: 404 Not Found");
    }

    #[test]
    fn should_fail_with_backend_message_when_body_carries_error() {
        let error = interpret_response(200, "OK", r#"{"error":"Product not found"}"#).unwrap_err();

        assert_eq!(error.to_string(), "API Error: Product not found");
    }

    #[test]
    fn should_read_nested_error_message() {
        let error =
            interpret_response(200, "OK", r#"{"error":{"message":"Invalid action"}}"#).unwrap_err();

        assert_eq!(error, GatewayError::backend("Invalid action"));
    }

    #[test]
    fn should_ignore_falsy_error_field() {
        assert!(interpret_response(200, "OK", r#"{"error":null,"items":[]}"#).is_ok());
        assert!(interpret_response(200, "OK", r#"{"error":"","items":[]}"#).is_ok());
        assert!(interpret_response(200, "OK", r#"{"error":false,"items":[]}"#).is_ok());
    }

    #[test]
    fn should_fail_with_decode_error_when_body_is_not_json() {
        let error = interpret_response(200, "OK", "Fatal error: ...").unwrap_err();
        assert!(matches!(error, GatewayError::Decode(_)));
    }

    #[test]
    fn should_build_client_with_media_base() {
        let client = CommerceClient::new(
            "http://127.0.0.1:8082/api.php".to_string(),
            "http://127.0.0.1:8082/".to_string(),
            Duration::from_secs(5),
        );

        assert_eq!(client.api_url, "http://127.0.0.1:8082/api.php");
        assert_eq!(client.media.as_str(), "http://127.0.0.1:8082");
    }
}
