// src/server/handlers/mod.rs
pub mod categories;
pub mod notion;
pub mod prompts;

use super::error::RouteError;
use axum::extract::FromRequest;
use serde::Serialize;

/// JSON request body whose rejection is reported as a [`RouteError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(RouteError))]
pub struct JsonBody<T>(pub T);

/// Body of a successful delete.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub success: bool,
}

impl Deleted {
    pub const RESPONSE: Deleted = Deleted { success: true };
}
