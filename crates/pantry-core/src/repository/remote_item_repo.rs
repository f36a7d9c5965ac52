//! Remote Item Repository
//!
//! HTTP implementation over a PostgREST-style hosted table
//! (`{url}/rest/v1/{table}`), authenticated with the project API key.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};

use crate::config::RemoteConfig;
use crate::domain::{DomainError, DomainResult, ItemId, NewPantryItem, PantryItem};
use super::traits::ItemRepository;

pub struct RemoteItemRepository {
    client: Client,
    config: RemoteConfig,
}

impl RemoteItemRepository {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.config.base_url(), self.config.table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }
}

#[async_trait]
impl ItemRepository for RemoteItemRepository {
    async fn list_all(&self) -> DomainResult<Vec<PantryItem>> {
        let request = self.client.get(self.table_url()).query(&[("select", "*")]);
        let response = self.authorized(request).send().await.map_err(network_error)?;
        let response = ensure_success(response, server_error).await?;

        let items: Vec<PantryItem> = response.json().await.map_err(network_error)?;
        log::info!("[remote] fetched {} items from {}", items.len(), self.config.table);
        Ok(items)
    }

    async fn insert_many(&self, items: &[NewPantryItem]) -> DomainResult<()> {
        if items.is_empty() {
            return Ok(());
        }

        let request = self
            .client
            .post(self.table_url())
            .header("Prefer", "return=minimal")
            .json(items);
        let response = self.authorized(request).send().await.map_err(network_error)?;
        ensure_success(response, insert_error).await?;

        log::info!("[remote] inserted {} items into {}", items.len(), self.config.table);
        Ok(())
    }

    async fn delete_by_id(&self, id: &ItemId) -> DomainResult<()> {
        let filter = format!("eq.{}", id);
        let request = self.client.delete(self.table_url()).query(&[("id", filter.as_str())]);
        let response = self.authorized(request).send().await.map_err(network_error)?;
        ensure_success(response, server_error).await?;

        log::info!("[remote] deleted item {} from {}", id, self.config.table);
        Ok(())
    }
}

fn network_error(e: reqwest::Error) -> DomainError {
    DomainError::Network(e.to_string())
}

fn server_error(status: StatusCode, message: String) -> DomainError {
    DomainError::Server {
        status: status.as_u16(),
        message,
    }
}

/// Client errors on insert are payload rejections
fn insert_error(status: StatusCode, message: String) -> DomainError {
    if status.is_client_error() {
        DomainError::Validation(message)
    } else {
        server_error(status, message)
    }
}

/// Pass successful responses through, turn the rest into `DomainError`
/// carrying the server's own message
async fn ensure_success(
    response: Response,
    to_error: fn(StatusCode, String) -> DomainError,
) -> DomainResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            log::warn!("[remote] could not read {} response body: {}", status, e);
            String::new()
        }
    };
    let message = server_message(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
    log::warn!("[remote] request failed with {}: {}", status, message);
    Err(to_error(status, message))
}

/// PostgREST errors are `{ "message": ..., "code": ..., ... }`; anything
/// else is passed through raw
pub(super) fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .or_else(|| Some(body.to_string())),
        Err(_) => Some(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_prefers_message_field() {
        let body = r#"{"code":"23502","details":null,"message":"null value in column \"nome\""}"#;
        assert_eq!(server_message(body).as_deref(), Some("null value in column \"nome\""));
    }

    #[test]
    fn test_server_message_raw_fallbacks() {
        assert_eq!(server_message("Bad Gateway").as_deref(), Some("Bad Gateway"));
        assert_eq!(server_message(r#"{"error":"x"}"#).as_deref(), Some(r#"{"error":"x"}"#));
        assert_eq!(server_message("  "), None);
    }

    #[test]
    fn test_insert_error_classes() {
        assert!(matches!(
            insert_error(StatusCode::BAD_REQUEST, "bad".into()),
            DomainError::Validation(_)
        ));
        assert!(matches!(
            insert_error(StatusCode::SERVICE_UNAVAILABLE, "down".into()),
            DomainError::Server { status: 503, .. }
        ));
    }

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let repo = RemoteItemRepository::new(RemoteConfig::new(
            "https://example.supabase.co/",
            "key",
            "itens_despensa",
        ));
        assert_eq!(repo.table_url(), "https://example.supabase.co/rest/v1/itens_despensa");
    }
}
