//! JSON Fetch Module
//!
//! One GET request, body parsed as JSON. No retries, no timeout and no status
//! check: a non-2xx response with a JSON body is returned like any other.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Result;

/// Fetches `url` and parses the response body as JSON.
///
/// # Errors
/// - [`UtilError::Network`](crate::error::UtilError::Network) if the request
///   or body transfer fails
/// - [`UtilError::Parse`](crate::error::UtilError::Parse) if the body is not
///   valid JSON for `T`
pub async fn fetch_json_response<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = reqwest::get(url).await?;
    parse_json_body(response).await
}

/// Same as [`fetch_json_response`], sending through a caller-owned client.
pub async fn fetch_json_with<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    let response = client.get(url).send().await?;
    parse_json_body(response).await
}

async fn parse_json_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let url = response.url().clone();
    let body = response.bytes().await?;

    debug!("Fetched {} ({}, {} bytes)", url, status, body.len());

    Ok(serde_json::from_slice(&body)?)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UtilError;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::{json, Value};

    /// Serves a fixed set of routes on an ephemeral port, returning the base URL.
    async fn spawn_server() -> String {
        let app = Router::new()
            .route(
                "/transactions",
                get(|| async { Json(json!([{"version": "42", "hash": "0xabc"}])) }),
            )
            .route(
                "/missing",
                get(|| async {
                    (
                        StatusCode::NOT_FOUND,
                        Json(json!({"message": "account not found", "error_code": "account_not_found"})),
                    )
                }),
            )
            .route("/html", get(|| async { "<html>not json</html>" }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fetch_json_success() {
        let base = spawn_server().await;

        let body: Value = fetch_json_response(&format!("{}/transactions", base))
            .await
            .unwrap();
        assert_eq!(body[0]["version"], "42");
    }

    #[tokio::test]
    async fn test_fetch_json_ignores_status() {
        let base = spawn_server().await;

        let body: Value = fetch_json_response(&format!("{}/missing", base))
            .await
            .unwrap();
        assert_eq!(body["error_code"], "account_not_found");
    }

    #[tokio::test]
    async fn test_fetch_non_json_is_parse_error() {
        let base = spawn_server().await;

        let result: Result<Value> = fetch_json_response(&format!("{}/html", base)).await;
        assert!(matches!(result, Err(UtilError::Parse(_))));
    }

    #[tokio::test]
    async fn test_fetch_typed_mismatch_is_parse_error() {
        let base = spawn_server().await;

        let result: Result<Vec<u64>> = fetch_json_response(&format!("{}/transactions", base)).await;
        assert!(matches!(result, Err(UtilError::Parse(_))));
    }

    #[tokio::test]
    async fn test_fetch_with_client() {
        let base = spawn_server().await;
        let client = Client::new();

        let body: Vec<crate::transaction::Transaction> =
            fetch_json_with(&client, &format!("{}/transactions", base))
                .await
                .unwrap();
        assert_eq!(body[0].version.as_deref(), Some("42"));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_network_error() {
        // Grab a free port, then close it
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result: Result<Value> = fetch_json_response(&format!("http://{}/", addr)).await;
        assert!(matches!(result, Err(UtilError::Network(_))));
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_is_network_error() {
        let result: Result<Value> = fetch_json_response("not a url").await;
        assert!(matches!(result, Err(UtilError::Network(_))));
    }
}
