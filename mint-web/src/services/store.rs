//! Registration record store.
//!
//! [`SupabaseStore`] talks to the hosted table over the PostgREST HTTP API:
//!
//! ```text
//! POST {url}/rest/v1/nft_entries                          insert one row
//! GET  {url}/rest/v1/nft_entries?select=*&order=created_at.desc
//! ```
//!
//! Wallet uniqueness is enforced by the table, not here. A rejected insert whose
//! error code is `23505` surfaces as [`StoreError::Conflict`].

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use shared::dto::registration::{NewRegistration, RegistrationEntry, StoreErrorBody};

use crate::config::StoreConfig;
use crate::error::{ConfigError, StoreError};

/// Remote storage for registration entries.
#[async_trait(?Send)]
pub trait RegistrationStore {
    /// Insert a single registration.
    async fn insert(&self, entry: &NewRegistration) -> Result<(), StoreError>;

    /// Every registration, newest first.
    async fn fetch_all(&self) -> Result<Vec<RegistrationEntry>, StoreError>;
}

/// PostgREST-backed store.
#[derive(Clone, Debug)]
pub struct SupabaseStore {
    config: Result<StoreConfig, ConfigError>,
}

impl SupabaseStore {
    /// Build from a possibly missing configuration; every call fails with
    /// [`StoreError::NotConfigured`] when it is missing.
    pub fn from_config(config: &Result<StoreConfig, ConfigError>) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn config(&self) -> Result<&StoreConfig, StoreError> {
        self.config.as_ref().map_err(|e| StoreError::NotConfigured(e.clone()))
    }

    fn authorize(builder: RequestBuilder, config: &StoreConfig) -> RequestBuilder {
        builder
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {}", config.anon_key))
    }
}

#[async_trait(?Send)]
impl RegistrationStore for SupabaseStore {
    async fn insert(&self, entry: &NewRegistration) -> Result<(), StoreError> {
        let config = self.config()?;

        let request = Self::authorize(Request::post(&config.table_endpoint()), config)
            .header("Prefer", "return=minimal")
            .json(&[entry])
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(rejection(response).await);
        }
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<RegistrationEntry>, StoreError> {
        let config = self.config()?;

        let response = Self::authorize(Request::get(&config.table_endpoint()), config)
            .query([("select", "*"), ("order", "created_at.desc")])
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(rejection(response).await);
        }

        response
            .json::<Vec<RegistrationEntry>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

async fn rejection(response: Response) -> StoreError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    classify_rejection(status, &body)
}

/// Map a non-success reply onto [`StoreError`].
pub fn classify_rejection(status: u16, body: &str) -> StoreError {
    match serde_json::from_str::<StoreErrorBody>(body) {
        Ok(err) if err.is_unique_violation() => StoreError::Conflict,
        Ok(err) if !err.message.is_empty() => StoreError::Rejected {
            status,
            message: err.message,
        },
        _ => StoreError::Rejected {
            status,
            message: if body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                body.trim().to_string()
            },
        },
    }
}
