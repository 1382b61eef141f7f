// src/api/client.rs
//! HTTP client for the Notion API.
//!
//! A thin wrapper around reqwest that adds authentication and the pinned
//! API version, plus the [`NotionRepository`](super::NotionRepository)
//! implementation built on top of it. Credentials are looked up per request,
//! so a missing token surfaces as an error on the call that needed it.

use super::pagination::fetch_all_pages;
use super::parser::parse_api_response;
use super::types::{NotionPage, PaginatedResponse, PropertyBag};
use crate::config::NotionSettings;
use crate::constants::NOTION_API_VERSION;
use crate::error::AppError;
use crate::types::{BlockId, DatabaseId, PageId};
use reqwest::{header, Client, RequestBuilder, Response};
use serde::Serialize;
use serde_json::{json, Value};

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    settings: NotionSettings,
}

impl NotionHttpClient {
    /// Creates a new HTTP client; credentials are read from `settings` on use.
    pub fn new(settings: NotionSettings) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers())
            .build()?;
        Ok(Self { client, settings })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_API_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        headers
    }

    pub fn settings(&self) -> &NotionSettings {
        &self.settings
    }

    fn url(&self, endpoint: &str) -> Result<String, AppError> {
        Ok(format!(
            "{}/{}",
            self.settings.api_base_url()?.as_base(),
            endpoint
        ))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let api_key = self.settings.api_key()?;
        Ok(request.bearer_auth(api_key.as_str()).send().await?)
    }

    /// Makes a GET request to the specified endpoint (path without base URL).
    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = self.url(endpoint)?;
        log::debug!("GET {}", url);
        self.send(self.client.get(url)).await
    }

    /// Makes a POST request with JSON body to the specified endpoint.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = self.url(endpoint)?;
        log::debug!("POST {}", url);
        self.send(self.client.post(url).json(body)).await
    }

    /// Makes a PATCH request with JSON body to the specified endpoint.
    pub async fn patch<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, AppError> {
        let url = self.url(endpoint)?;
        log::debug!("PATCH {}", url);
        self.send(self.client.patch(url).json(body)).await
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn query_database(&self, database: &DatabaseId) -> Result<Vec<NotionPage>, AppError> {
        let endpoint = format!("databases/{}/query", database.to_dashed());
        let result = fetch_all_pages(
            |page_size, cursor| {
                let endpoint = endpoint.clone();
                async move {
                    let mut query = json!({ "page_size": page_size });
                    if let Some(cursor) = cursor {
                        query["start_cursor"] = json!(cursor);
                    }
                    let response = self.post(&endpoint, &query).await?;
                    let result = extract_response_text(response).await?;
                    parse_api_response::<PaginatedResponse<NotionPage>>(result)
                }
            },
        )
        .await?;

        log::info!(
            "Queried database {}: {} page(s) in {} request(s)",
            database,
            result.items.len(),
            result.pages_fetched
        );
        Ok(result.items)
    }

    async fn retrieve_page(&self, page: &PageId) -> Result<NotionPage, AppError> {
        let response = self.get(&format!("pages/{}", page.to_dashed())).await?;
        let result = extract_response_text(response).await?;
        parse_api_response(result)
    }

    async fn retrieve_children(&self, parent: &BlockId) -> Result<Vec<Value>, AppError> {
        let endpoint = format!("blocks/{}/children", parent.to_dashed());
        let result = fetch_all_pages(
            |page_size, cursor| {
                let mut endpoint = format!("{}?page_size={}", endpoint, page_size);
                if let Some(cursor) = cursor {
                    endpoint.push_str(&format!("&start_cursor={}", cursor));
                }
                async move {
                    let response = self.get(&endpoint).await?;
                    let result = extract_response_text(response).await?;
                    parse_api_response::<PaginatedResponse<Value>>(result)
                }
            },
        )
        .await?;
        Ok(result.items)
    }

    async fn create_page(
        &self,
        database: &DatabaseId,
        properties: &PropertyBag,
    ) -> Result<NotionPage, AppError> {
        let body = json!({
            "parent": { "database_id": database.to_dashed() },
            "properties": properties,
        });
        let response = self.post("pages", &body).await?;
        let result = extract_response_text(response).await?;
        parse_api_response(result)
    }

    async fn update_page(
        &self,
        page: &PageId,
        properties: &PropertyBag,
    ) -> Result<NotionPage, AppError> {
        let body = json!({ "properties": properties });
        let response = self
            .patch(&format!("pages/{}", page.to_dashed()), &body)
            .await?;
        let result = extract_response_text(response).await?;
        parse_api_response(result)
    }

    async fn archive_page(&self, page: &PageId) -> Result<NotionPage, AppError> {
        let body = json!({ "archived": true });
        let response = self
            .patch(&format!("pages/{}", page.to_dashed()), &body)
            .await?;
        let result = extract_response_text(response).await?;
        parse_api_response(result)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text along with status and URL metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::NotionRepository;

    #[tokio::test]
    async fn test_missing_token_fails_before_any_request() {
        let settings = NotionSettings {
            prompts_database: Some("0123456789abcdef0123456789abcdef".to_string()),
            // Unroutable; reaching the network would hang or fail differently.
            api_base_url: Some("http://127.0.0.1:9".to_string()),
            ..NotionSettings::default()
        };
        let client = NotionHttpClient::new(settings).unwrap();
        let database = client.settings().prompts_database().unwrap();

        let err = client.query_database(&database).await.unwrap_err();
        assert!(matches!(err, AppError::MissingConfiguration(_)));
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_reported() {
        let settings = NotionSettings {
            token: Some("secret_abcdefghijklmnopqrstuvwxyz".to_string()),
            api_base_url: Some("ftp://example.com".to_string()),
            ..NotionSettings::default()
        };
        let client = NotionHttpClient::new(settings).unwrap();
        let err = client.retrieve_page(&PageId::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::MissingConfiguration(_)));
    }
}
