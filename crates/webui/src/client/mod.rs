//! REST clients for the three managed collections.
//!
//! Every call is one request/response round trip: no retries, no timeouts
//! beyond the transport's own, and failures are returned unchanged.

pub mod gloo;
pub mod resource;

use crate::{error::ApiError, model::RecordId};
use derive_where::derive_where;
use log::debug;
use std::marker::PhantomData;

pub use self::gloo::GlooTransport;
pub use resource::{DepartmentResource, EnrollmentResource, Resource, StudentResource};

pub type StudentClient<T = GlooTransport> = ResourceClient<StudentResource, T>;
pub type DepartmentClient<T = GlooTransport> = ResourceClient<DepartmentResource, T>;
pub type EnrollmentClient<T = GlooTransport> = ResourceClient<EnrollmentResource, T>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// JSON payload, if any.
    pub body: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single HTTP request. Runs on the browser's event loop, so
/// implementations need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// CRUD client for one resource collection.
#[derive_where(Clone, Debug; T)]
pub struct ResourceClient<R, T> {
    base_url: String,
    transport: T,
    resource: PhantomData<R>,
}

impl<R: Resource, T: Transport> ResourceClient<R, T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            resource: PhantomData,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}/{endpoint}", self.base_url, R::COLLECTION)
    }

    async fn exchange(
        &self,
        method: Method,
        url: String,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        debug!("{method} {url}");
        let response = self
            .transport
            .send(HttpRequest { method, url, body })
            .await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response.body)
    }

    /// Collection fetch, in backend order.
    pub async fn list(&self) -> Result<Vec<R::Entity>, ApiError> {
        let body = self.exchange(Method::Get, self.url(R::LIST), None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get(&self, id: RecordId) -> Result<R::Entity, ApiError> {
        let url = self.url(&format!("{}/{id}", R::GET));
        let body = self.exchange(Method::Get, url, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Returns the stored entity with its backend-assigned identity.
    pub async fn create(&self, entity: &R::Entity) -> Result<R::Entity, ApiError> {
        let payload = serde_json::to_string(entity)?;
        let body = self
            .exchange(Method::Post, self.url(R::CREATE), Some(payload))
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Sends the full entity, identity included.
    pub async fn update(&self, entity: &R::Entity) -> Result<R::Entity, ApiError> {
        if R::id(entity).is_none() {
            return Err(ApiError::MissingId);
        }
        let payload = serde_json::to_string(entity)?;
        let body = self
            .exchange(Method::Put, self.url(R::UPDATE), Some(payload))
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        let url = self.url(&format!("{}/{id}", R::DELETE));
        self.exchange(Method::Delete, url, None).await?;
        Ok(())
    }
}
