// src/app/client.rs
//! REST client for the prompt directory server.

use super::state::Action;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::AppError;
use crate::model::{Category, CategoryDraft, PromptDraft, PromptItem};
use crate::types::ValidatedUrl;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Talks to the `/api` routes of a running server.
#[derive(Clone)]
pub struct DirectoryClient {
    client: Client,
    base_url: ValidatedUrl,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    details: Option<String>,
}

impl DirectoryClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: ValidatedUrl::parse(base_url)?,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url.as_base(), path)
    }

    /// Fetches prompts and categories concurrently.
    pub async fn load(&self) -> Result<(Vec<PromptItem>, Vec<Category>), AppError> {
        futures::try_join!(self.list_prompts(), self.list_categories())
    }

    /// Runs [`load`](Self::load) and turns the outcome into a state action.
    pub async fn reload(&self) -> Action {
        match self.load().await {
            Ok((prompts, categories)) => Action::Loaded {
                prompts,
                categories,
            },
            Err(e) => {
                log::error!("Failed to load directory: {}", e);
                Action::LoadFailed(e.to_string())
            }
        }
    }

    pub async fn list_prompts(&self) -> Result<Vec<PromptItem>, AppError> {
        self.get("prompts").await
    }

    pub async fn create_prompt(&self, draft: &PromptDraft) -> Result<PromptItem, AppError> {
        self.send_json(self.client.post(self.url("prompts")), draft).await
    }

    pub async fn update_prompt(&self, id: &str, draft: &PromptDraft) -> Result<PromptItem, AppError> {
        let url = self.url(&format!("prompts/{}", id));
        self.send_json(self.client.put(url), draft).await
    }

    pub async fn delete_prompt(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("prompts/{}", id)).await
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.get("categories").await
    }

    pub async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, AppError> {
        self.send_json(self.client.post(self.url("categories")), draft).await
    }

    pub async fn update_category(
        &self,
        id: &str,
        draft: &CategoryDraft,
    ) -> Result<Category, AppError> {
        let url = self.url(&format!("categories/{}", id));
        self.send_json(self.client.put(url), draft).await
    }

    pub async fn delete_category(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("categories/{}", id)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.client.get(self.url(path)).send().await?;
        decode(response).await
    }

    async fn send_json<B, T>(&self, request: reqwest::RequestBuilder, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = request.json(body).send().await?;
        decode(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), AppError> {
        let response = self.client.delete(self.url(path)).send().await?;
        decode::<serde_json::Value>(response).await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody {
            error,
            details: Some(details),
        }) => format!("{}: {}", error, details),
        Ok(ErrorBody { error, .. }) => error,
        Err(_) => body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect(),
    };
    Err(AppError::RemoteRequest {
        url,
        status: status.as_u16(),
        message,
    })
}
