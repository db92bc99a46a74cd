//! Typed HTTP client for the JSON API, the counterpart of the browser-side
//! data hooks: one method per endpoint, server error payloads surfaced as a
//! structured error. No retries, no caching, no request de-duplication.

use crate::resource::{CategoryResource, ContactResource, CustomerResource};
use crate::response::Message;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connection refused, timeout, malformed body).
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    /// Structured error from the API (validation, not-found, server failure).
    #[error("api error (HTTP {status}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        /// Field-keyed messages on validation failures.
        details: Option<serde_json::Value>,
    },
}

/// Customer write body, same shape for create and update.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerPayload {
    pub name: String,
    pub reference: String,
    pub customer_category_id: i64,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Contact write body.
#[derive(Debug, Clone, Serialize)]
pub struct ContactPayload {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the API prefix, e.g. `http://localhost:3000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn get_customer_categories(&self) -> Result<Vec<CategoryResource>, ClientError> {
        let res = self
            .http
            .get(self.url("/customer-categories"))
            .send()
            .await?;
        Self::parse(res).await
    }

    pub async fn get_customers(
        &self,
        search: Option<&str>,
        category_id: Option<i64>,
    ) -> Result<Vec<CustomerResource>, ClientError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(s) = search {
            query.push(("search", s.to_string()));
        }
        if let Some(id) = category_id {
            query.push(("category_id", id.to_string()));
        }
        let res = self
            .http
            .get(self.url("/customers"))
            .query(&query)
            .send()
            .await?;
        Self::parse(res).await
    }

    pub async fn get_customer(&self, id: i64) -> Result<CustomerResource, ClientError> {
        let res = self
            .http
            .get(self.url(&format!("/customers/{}", id)))
            .send()
            .await?;
        Self::parse(res).await
    }

    pub async fn create_customer(
        &self,
        payload: &CustomerPayload,
    ) -> Result<CustomerResource, ClientError> {
        let res = self
            .http
            .post(self.url("/customers"))
            .json(payload)
            .send()
            .await?;
        Self::parse(res).await
    }

    pub async fn update_customer(
        &self,
        id: i64,
        payload: &CustomerPayload,
    ) -> Result<CustomerResource, ClientError> {
        let res = self
            .http
            .put(self.url(&format!("/customers/{}", id)))
            .json(payload)
            .send()
            .await?;
        Self::parse(res).await
    }

    pub async fn delete_customer(&self, id: i64) -> Result<Message, ClientError> {
        let res = self
            .http
            .delete(self.url(&format!("/customers/{}", id)))
            .send()
            .await?;
        Self::parse(res).await
    }

    pub async fn get_contacts(&self, customer_id: i64) -> Result<Vec<ContactResource>, ClientError> {
        let res = self
            .http
            .get(self.url(&format!("/customers/{}/contacts", customer_id)))
            .send()
            .await?;
        Self::parse(res).await
    }

    pub async fn create_contact(
        &self,
        payload: &ContactPayload,
    ) -> Result<ContactResource, ClientError> {
        let res = self
            .http
            .post(self.url("/contacts"))
            .json(payload)
            .send()
            .await?;
        Self::parse(res).await
    }

    pub async fn get_contact(&self, id: i64) -> Result<ContactResource, ClientError> {
        let res = self
            .http
            .get(self.url(&format!("/contacts/{}", id)))
            .send()
            .await?;
        Self::parse(res).await
    }

    pub async fn update_contact(
        &self,
        id: i64,
        payload: &ContactPayload,
    ) -> Result<ContactResource, ClientError> {
        let res = self
            .http
            .put(self.url(&format!("/contacts/{}", id)))
            .json(payload)
            .send()
            .await?;
        Self::parse(res).await
    }

    pub async fn delete_contact(&self, id: i64) -> Result<Message, ClientError> {
        let res = self
            .http
            .delete(self.url(&format!("/contacts/{}", id)))
            .send()
            .await?;
        Self::parse(res).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn parse<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ClientError> {
        let status = res.status();
        if status.is_success() {
            return Ok(res.json::<T>().await?);
        }
        let body: serde_json::Value = res.json().await.unwrap_or(serde_json::Value::Null);
        let code = body
            .pointer("/error/code")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown")
            .to_string();
        let message = body
            .pointer("/error/message")
            .and_then(|v| v.as_str())
            .unwrap_or("request failed")
            .to_string();
        let details = body
            .pointer("/error/details")
            .cloned()
            .filter(|v| !v.is_null());
        Err(ClientError::Api {
            status: status.as_u16(),
            code,
            message,
            details,
        })
    }
}
