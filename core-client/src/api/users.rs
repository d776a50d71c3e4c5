//! User administration endpoints.

use crate::error::Result;
use crate::pipeline::RequestPipeline;
use crate::types::Principal;
use serde::Serialize;

const USERS_ENDPOINT: &str = "/api/v1/users";

/// Payload for creating an account. Superuser only.
#[derive(Debug, Clone, Serialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
}

/// Partial account update; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
}

#[derive(Serialize)]
struct PageQuery {
    skip: u32,
    limit: u32,
}

/// Client for the account endpoints.
#[derive(Clone)]
pub struct UsersApi {
    pipeline: RequestPipeline,
}

impl UsersApi {
    pub fn new(pipeline: RequestPipeline) -> Self {
        Self { pipeline }
    }

    pub async fn list(&self, skip: u32, limit: u32) -> Result<Vec<Principal>> {
        self.pipeline
            .get_query(USERS_ENDPOINT, &PageQuery { skip, limit })
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Principal> {
        self.pipeline.get(&format!("{}/{}", USERS_ENDPOINT, id)).await
    }

    pub async fn create(&self, user: &UserCreate) -> Result<Principal> {
        self.pipeline.post(USERS_ENDPOINT, user).await
    }

    pub async fn update(&self, id: i64, update: &UserUpdate) -> Result<Principal> {
        self.pipeline
            .put(&format!("{}/{}", USERS_ENDPOINT, id), update)
            .await
    }

    /// Delete an account; the service returns the removed resource.
    pub async fn delete(&self, id: i64) -> Result<Principal> {
        self.pipeline.delete(&format!("{}/{}", USERS_ENDPOINT, id)).await
    }

    /// The account behind the current credential.
    pub async fn me(&self) -> Result<Principal> {
        self.pipeline.get(&format!("{}/me", USERS_ENDPOINT)).await
    }

    /// Update the current account.
    pub async fn update_me(&self, update: &UserUpdate) -> Result<Principal> {
        self.pipeline
            .put(&format!("{}/me", USERS_ENDPOINT), update)
            .await
    }
}
