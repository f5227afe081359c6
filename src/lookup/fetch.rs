// src/lookup/fetch.rs
// =============================================================================
// This module fetches a single order from the order service.
//
// Strategy:
// - Join "/api/order/{encoded id}" onto the base URL (absolute path, so any
//   path on the base URL is replaced, just like a browser resolving it)
// - Send one GET request, no retries and no timeout
// - 2xx: parse the body as JSON and hand it back untouched
// - anything else: report the status code, never read the body
//
// Every failure becomes a LookupError variant so the caller can turn it into
// a message for the user.
// =============================================================================

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use super::OrderId;

/// Path prefix of the order endpoint on the service.
pub const ORDER_PATH_PREFIX: &str = "/api/order/";

/// Everything that can stop a lookup from producing an order.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The identifier was empty after trimming, nothing was requested
    #[error("order id is empty")]
    EmptyId,
    /// The service answered with a non-success status
    #[error("service answered HTTP {}", .0.as_u16())]
    Status(StatusCode),
    /// The request never completed, or the body was not valid JSON
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request URL could not be built from the base URL
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

// Client for the order endpoint
//
// Holds one reqwest Client (connection pool) and the service base URL.
// Cloning is cheap, reqwest's Client is reference counted internally.
#[derive(Debug, Clone)]
pub struct OrderClient {
    http: Client,
    base: Url,
}

impl OrderClient {
    pub fn new(base: Url) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("failed to create HTTP client")?;

        Ok(OrderClient { http, base })
    }

    /// Full request URL for an order, e.g. http://localhost:8081/api/order/abc%20123
    pub fn order_url(&self, id: &OrderId) -> Result<Url, url::ParseError> {
        self.base
            .join(&format!("{}{}", ORDER_PATH_PREFIX, id.encoded()))
    }

    // Fetches one order
    //
    // Returns the decoded JSON body on success. The shape of the body is
    // owned by the service, so it stays an opaque serde_json::Value.
    pub async fn fetch(&self, id: &OrderId) -> Result<Value, LookupError> {
        let url = self.order_url(id)?;
        debug!(order_uid = id.as_str(), %url, "requesting order");

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(order_uid = id.as_str(), error = %e, "order service unreachable");
                return Err(e.into());
            }
        };

        let status = response.status();
        debug!(order_uid = id.as_str(), status = status.as_u16(), "order service responded");

        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        match response.json::<Value>().await {
            Ok(order) => Ok(order),
            Err(e) => {
                warn!(order_uid = id.as_str(), error = %e, "response body is not valid JSON");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubServer;
    use serde_json::json;

    fn client_for(base: &Url) -> OrderClient {
        OrderClient::new(base.clone()).unwrap()
    }

    #[test]
    fn test_order_url_encodes_id() {
        let client = client_for(&Url::parse("http://localhost:8081").unwrap());
        let id: OrderId = "abc 123".parse().unwrap();

        let url = client.order_url(&id).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8081/api/order/abc%20123");
    }

    #[test]
    fn test_order_url_replaces_base_path() {
        let client = client_for(&Url::parse("http://orders.local:9000/ui/index.html").unwrap());
        let id: OrderId = "b563feb7b2b84b6test".parse().unwrap();

        let url = client.order_url(&id).unwrap();
        assert_eq!(url.path(), "/api/order/b563feb7b2b84b6test");
        assert_eq!(url.port(), Some(9000));
    }

    #[tokio::test]
    async fn test_fetch_returns_json_body() {
        let server = StubServer::start(200, r#"{"order_uid":"1","items":[{"price":453}]}"#).await;
        let client = client_for(&server.base);
        let id: OrderId = "1".parse().unwrap();

        let order = client.fetch(&id).await.unwrap();
        assert_eq!(order, json!({"order_uid": "1", "items": [{"price": 453}]}));
        assert_eq!(server.requests(), vec!["/api/order/1".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_sends_encoded_path() {
        let server = StubServer::start(200, "{}").await;
        let client = client_for(&server.base);
        let id: OrderId = "abc 123".parse().unwrap();

        client.fetch(&id).await.unwrap();
        assert_eq!(server.requests(), vec!["/api/order/abc%20123".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_reports_http_status() {
        let server = StubServer::start(404, "404 page not found").await;
        let client = client_for(&server.base);
        let id: OrderId = "missing".parse().unwrap();

        let result = client.fetch(&id).await;
        assert!(matches!(result, Err(LookupError::Status(StatusCode::NOT_FOUND))));
    }

    #[tokio::test]
    async fn test_fetch_invalid_json_is_transport_error() {
        let server = StubServer::start(200, "not json").await;
        let client = client_for(&server.base);
        let id: OrderId = "1".parse().unwrap();

        let result = client.fetch(&id).await;
        assert!(matches!(result, Err(LookupError::Transport(_))));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let base = StubServer::closed_base().await;
        let client = client_for(&base);
        let id: OrderId = "1".parse().unwrap();

        let result = client.fetch(&id).await;
        assert!(matches!(result, Err(LookupError::Transport(_))));
    }
}
