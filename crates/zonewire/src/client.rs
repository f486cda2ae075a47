//! HTTP transport for the zones API
//!
//! `RestClient` owns the reqwest connection pool, endpoint, credentials
//! and the pagination toggle shared by all operations. It knows nothing
//! about individual resources; the typed operations live on the service
//! values it hands out (see [`crate::zones::ZonesService`]).

use std::time::Duration;

use reqwest::{header, Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ZoneError;
use crate::pagination::next_link;
use crate::zones::ZonesService;

/// One decoded page of an API response.
///
/// `next` is the continuation pointer taken from the response's `Link`
/// header; `None` means this was the final page.
pub(crate) struct Page<T> {
    pub(crate) body: T,
    pub(crate) next: Option<String>,
}

/// Structured error payload the API attaches to failed requests.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

/// Client for a zones API endpoint.
///
/// Cheap to clone and safe to share across tasks; each operation runs its
/// HTTP calls sequentially and keeps no state on the client.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
    api_token: String,
    follow_pagination: bool,
}

impl RestClient {
    /// Create a client for the API at `base_url`, authenticating with
    /// `api_token`.
    ///
    /// Pagination following is enabled by default; see
    /// [`RestClient::follow_pagination`].
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Result<Self, ZoneError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.into(),
            follow_pagination: true,
        })
    }

    /// Enable or disable following of `rel="next"` pagination links.
    ///
    /// When disabled, list and get operations return exactly the first
    /// page of data even if the server indicates more is available.
    pub fn follow_pagination(mut self, follow: bool) -> Self {
        self.follow_pagination = follow;
        self
    }

    pub(crate) fn follows_pagination(&self) -> bool {
        self.follow_pagination
    }

    /// Operations on the `zones` endpoint.
    pub fn zones(&self) -> ZonesService<'_> {
        ZonesService::new(self)
    }

    /// Resolve `path_or_url` against the configured endpoint.
    ///
    /// Pagination follow-ups arrive as absolute URIs and are used
    /// verbatim; everything else is an API-relative path.
    fn url_for(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            path_or_url.to_string()
        } else {
            format!("{}/{}", self.base_url, path_or_url)
        }
    }

    /// Issue a request and decode the JSON response body, capturing the
    /// continuation pointer from the `Link` header.
    pub(crate) async fn request_json<T, B>(
        &self,
        method: Method,
        path_or_url: &str,
        body: Option<&B>,
    ) -> Result<Page<T>, ZoneError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path_or_url, body).await?;

        let next = response
            .headers()
            .get(header::LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(next_link);

        let text = response.text().await?;
        let body = serde_json::from_str(&text)?;

        Ok(Page { body, next })
    }

    /// Issue a request and discard any response body.
    pub(crate) async fn request_empty(
        &self,
        method: Method,
        path: &str,
    ) -> Result<(), ZoneError> {
        self.send(method, path, None::<&()>).await?;
        Ok(())
    }

    async fn send<B>(
        &self,
        method: Method,
        path_or_url: &str,
        body: Option<&B>,
    ) -> Result<Response, ZoneError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url_for(path_or_url);

        debug!("zones API request: {} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.api_token),
            )
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        if let Ok(payload) = serde_json::from_str::<ApiMessage>(&error_body) {
            return Err(ZoneError::Api {
                status: status.as_u16(),
                message: payload.message,
            });
        }
        Err(ZoneError::Api {
            status: status.as_u16(),
            message: error_body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RestClient {
        RestClient::new("https://api.example.net/v1", "test_token").unwrap()
    }

    #[test]
    fn test_relative_path_is_joined_to_endpoint() {
        assert_eq!(
            client().url_for("zones"),
            "https://api.example.net/v1/zones"
        );
        assert_eq!(
            client().url_for("zones/example.com"),
            "https://api.example.net/v1/zones/example.com"
        );
    }

    #[test]
    fn test_absolute_uri_is_used_verbatim() {
        let uri = "https://api.example.net/v1/zones?after=b&limit=2";
        assert_eq!(client().url_for(uri), uri);
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = RestClient::new("https://api.example.net/v1/", "test_token").unwrap();
        assert_eq!(client.url_for("zones"), "https://api.example.net/v1/zones");
    }

    #[test]
    fn test_follow_pagination_defaults_on() {
        assert!(client().follows_pagination());
        assert!(!client().follow_pagination(false).follows_pagination());
    }
}
