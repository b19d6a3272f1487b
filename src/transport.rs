//! Shared request construction and dispatch for all resource clients.

use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{query::Query, Error};

/// Production API host.
pub(crate) const API_HOST: &str = "https://api.track.toggl.com";

/// Fixed literal the provider expects in the password slot of basic auth.
const BASIC_AUTH_PASSWORD: &str = "api_token";

/// How an endpoint treats a 404 response.
///
/// Most Toggl endpoints report "not found" for resources the caller simply
/// does not have, so reads map it to an empty result. The stop endpoint is
/// the one exception and treats it as a failure.
#[derive(Clone, Copy)]
enum NotFound {
    /// 404 yields an empty result, no error.
    Empty,
    /// 404 is an error like any other non-success status.
    Error,
}

/// A resolved endpoint: HTTP method plus path with placeholders filled in.
pub(crate) struct Endpoint {
    method: Method,
    path: String,
}

impl Endpoint {
    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
        }
    }
    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
        }
    }
    pub(crate) fn patch(path: impl Into<String>) -> Self {
        Self {
            method: Method::PATCH,
            path: path.into(),
        }
    }
    pub(crate) fn put(path: impl Into<String>) -> Self {
        Self {
            method: Method::PUT,
            path: path.into(),
        }
    }
    pub(crate) fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            path: path.into(),
        }
    }
}

/// Builds authenticated requests and interprets response statuses. Holds the
/// only state shared between resource clients: the base URL, the immutable
/// credential, and the HTTP engine.
pub(crate) struct Transport {
    base_url: Url,
    token: String,
    http: reqwest::Client,
}

impl Transport {
    pub(crate) fn new(token: &str, base_url: Url) -> Self {
        Self {
            base_url,
            token: token.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Issues the request and decodes the body into `T` on an accepted
    /// status. A 404 is an empty result, `Ok(None)`.
    pub(crate) async fn dispatch<T, Q, B>(
        &self,
        endpoint: Endpoint,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Option<T>, Error>
    where
        T: DeserializeOwned,
        Q: Query,
        B: Serialize + ?Sized,
    {
        let (status, body) = self.execute(endpoint, query, body).await?;
        if !accept(status, &body, NotFound::Empty)? {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&body)?))
    }

    /// Like [`dispatch`](Self::dispatch) but with no empty-result case: a
    /// 404 is an error like any other non-success status.
    pub(crate) async fn dispatch_strict<T, Q, B>(
        &self,
        endpoint: Endpoint,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
        B: Serialize + ?Sized,
    {
        let (status, body) = self.execute(endpoint, query, body).await?;
        accept(status, &body, NotFound::Error)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Like [`dispatch`](Self::dispatch) but discards the response body.
    /// Used by operations whose success response carries no payload.
    pub(crate) async fn dispatch_no_content<Q>(
        &self,
        endpoint: Endpoint,
        query: Option<&Q>,
    ) -> Result<(), Error>
    where
        Q: Query,
    {
        let (status, body) = self.execute::<Q, ()>(endpoint, query, None).await?;
        accept(status, &body, NotFound::Empty)?;
        Ok(())
    }

    async fn execute<Q, B>(
        &self,
        endpoint: Endpoint,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<(StatusCode, String), Error>
    where
        Q: Query,
        B: Serialize + ?Sized,
    {
        let mut url = self.base_url.clone();
        url.set_path(&endpoint.path);
        let url = match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        };

        let mut req = self
            .http
            .request(endpoint.method, url)
            .basic_auth(&self.token, Some(BASIC_AUTH_PASSWORD))
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        Ok((status, body))
    }
}

/// Returns `Ok(true)` when the body should be decoded, `Ok(false)` for a 404
/// that maps to an empty result.
fn accept(status: StatusCode, body: &str, not_found: NotFound) -> Result<bool, Error> {
    if status.is_success() {
        return Ok(true);
    }
    if status == StatusCode::NOT_FOUND {
        if let NotFound::Empty = not_found {
            return Ok(false);
        }
    }
    tracing::error!(
        "unexpected response status {}: {}",
        status,
        truncate_body(body)
    );
    Err(Error::UnexpectedStatus {
        status: status.as_u16(),
    })
}

/// Checks a required identifier before any request is issued.
pub(crate) fn require<T>(value: Option<T>, name: &'static str) -> Result<T, Error> {
    value.ok_or_else(|| {
        tracing::error!("{} is required", name);
        Error::MissingParameter(name)
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // back off to a char boundary so multibyte bodies cannot panic the slice
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
