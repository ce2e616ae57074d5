//! API gateway for the Coordina REST backend.
//!
//! One configured client; every outgoing request re-reads the session store
//! and attaches the bearer token when one is present. Requests without a
//! session proceed unauthenticated - the backend is the authority on what
//! needs a token. There is no response interceptor: each domain service
//! interprets its own status/body through the [`ApiError`] taxonomy.
//!
//! Transport is browser `fetch` on wasm32 and `reqwest` elsewhere; both
//! funnel into the same status/body epilogue so error normalization behaves
//! identically on every target.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::SessionStore;

/// How a request failed, before any service-level interpretation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a usable response (DNS, refused, aborted).
    #[error("could not reach the server: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("{}", message.as_deref().unwrap_or("request rejected by the server"))]
    Status { status: u16, message: Option<String> },
    /// The backend answered 2xx with a body we could not decode.
    #[error("unexpected response from the server: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[cfg(target_arch = "wasm32")]
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Error bodies across all resources share at most a `message` field.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// The single HTTP client every domain service goes through.
pub struct ApiClient {
    base_url: String,
    session: Arc<dyn SessionStore>,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::Client,
}

impl ApiClient {
    /// Build a client for `base_url` (no trailing slash needed). Relative
    /// bases are valid in the browser (same-origin fetch); on native targets
    /// they cannot work, so flag them early.
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> Self {
        let base_url = base_url.into();
        if url::Url::parse(&base_url).is_err() {
            #[cfg(not(target_arch = "wasm32"))]
            tracing::warn!("API base URL {base_url:?} is not absolute; native requests will fail");
            #[cfg(target_arch = "wasm32")]
            tracing::debug!("Using same-origin API base {base_url:?}");
        }
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            #[cfg(not(target_arch = "wasm32"))]
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer_token(&self) -> Option<String> {
        self.session.load().map(|credential| credential.token)
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.request::<(), R>(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<R> {
        self.request(Method::Post, path, Some(body)).await
    }

    /// POST with an empty body (`/auth/renew` takes no payload).
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.request::<(), R>(Method::Post, path, None).await
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<R> {
        self.request(Method::Put, path, Some(body)).await
    }

    pub async fn patch<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<R> {
        self.request(Method::Patch, path, Some(body)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.request::<(), R>(Method::Delete, path, None).await
    }

    async fn request<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<R> {
        let payload = match body {
            Some(body) => {
                Some(serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?)
            }
            None => None,
        };
        let (status, text) = self.send(method, &self.endpoint(path), payload).await?;
        decode_response(status, &text)
    }

    /// Native transport: reqwest.
    #[cfg(not(target_arch = "wasm32"))]
    async fn send(
        &self,
        method: Method,
        url: &str,
        payload: Option<String>,
    ) -> ApiResult<(u16, String)> {
        let method = match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut request = self
            .http
            .request(method, url)
            .header("Content-Type", "application/json");
        if let Some(token) = self.bearer_token() {
            request = request.bearer_auth(token);
        }
        if let Some(payload) = payload {
            request = request.body(payload);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok((status, text))
    }

    /// Browser transport: fetch.
    #[cfg(target_arch = "wasm32")]
    async fn send(
        &self,
        method: Method,
        url: &str,
        payload: Option<String>,
    ) -> ApiResult<(u16, String)> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Headers, Request, RequestInit, Response};

        let transport = |e: wasm_bindgen::JsValue| ApiError::Transport(format!("{e:?}"));

        let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".into()))?;

        let headers = Headers::new().map_err(transport)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(transport)?;
        if let Some(token) = self.bearer_token() {
            headers
                .set("Authorization", &format!("Bearer {token}"))
                .map_err(transport)?;
        }

        let opts = RequestInit::new();
        opts.set_method(method.as_str());
        opts.set_headers(&headers);
        if let Some(payload) = payload {
            opts.set_body(&wasm_bindgen::JsValue::from_str(&payload));
        }

        let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;

        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport)?;
        let response: Response = response_value
            .dyn_into()
            .map_err(|_| ApiError::Transport("not a Response".into()))?;

        let status = response.status();
        let text_value = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?;
        let text = text_value.as_string().unwrap_or_default();

        Ok((status, text))
    }
}

/// Shared status/body epilogue for both transports.
fn decode_response<R: DeserializeOwned>(status: u16, text: &str) -> ApiResult<R> {
    if (200..300).contains(&status) {
        // Empty success bodies decode as null (e.g. 204 on delete)
        let body = if text.trim().is_empty() { "null" } else { text };
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let message = serde_json::from_str::<ErrorBody>(text)
            .ok()
            .and_then(|body| body.message);
        Err(ApiError::Status { status, message })
    }
}
