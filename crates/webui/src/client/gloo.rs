//! Browser transport using the Fetch API through `gloo::net`.

use super::{HttpRequest, HttpResponse, Method, Resource, ResourceClient, Transport};
use crate::{config, error::ApiError};
use gloo::net::http::Request;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        }
        .header("Accept", "application/json");

        let response = match request.body {
            Some(body) => {
                builder
                    .header("Content-Type", "application/json")
                    .body(body)?
                    .send()
                    .await?
            }
            None => builder.send().await?,
        };

        let status = response.status();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

impl<R: Resource> ResourceClient<R, GlooTransport> {
    /// Client pointed at the configured backend.
    pub fn from_config() -> Self {
        Self::new(config::get().api_url.clone(), GlooTransport)
    }
}
