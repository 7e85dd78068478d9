//! REST calls against the product/account backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`]; pages only
//! issue requests from client effects and event handlers.
//!
//! DESIGN
//! ======
//! Each call takes the bearer token explicitly. Callers read it from the
//! session immediately before sending, so a request never carries a token
//! that was cleared by a logout earlier in the same tick.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{LoginRequest, LoginResponse, Page, Shoe};
use crate::forms::FormFields;
use crate::util::listing::ShoeQuery;

const LOGIN_ENDPOINT: &str = "/api/login/";
const REGISTER_ENDPOINT: &str = "/api/register/";
const SHOES_ENDPOINT: &str = "/api/shoeDetails/";

fn shoe_endpoint(id: u64) -> String {
    format!("{SHOES_ENDPOINT}{id}/")
}

fn shoe_list_endpoint(query: &ShoeQuery) -> String {
    format!("{SHOES_ENDPOINT}?{}", query.to_query_string())
}

/// `Authorization` header value for the backend's token scheme.
#[cfg(any(test, feature = "hydrate"))]
fn authorization_value(token: &str) -> String {
    format!("Token {token}")
}

/// Text fields plus attached files for a multipart request.
#[derive(Clone, Debug, Default)]
pub struct MultipartBody {
    fields: FormFields,
    #[cfg(feature = "hydrate")]
    files: Vec<(String, web_sys::File)>,
}

impl MultipartBody {
    pub fn new(fields: FormFields) -> Self {
        Self {
            fields,
            #[cfg(feature = "hydrate")]
            files: Vec::new(),
        }
    }

    /// Attach `file` under the multipart field `name`.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn attach(mut self, name: impl Into<String>, file: web_sys::File) -> Self {
        self.files.push((name.into(), file));
        self
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    #[cfg(feature = "hydrate")]
    fn to_form_data(&self) -> Result<web_sys::FormData, ApiError> {
        let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
        let data = web_sys::FormData::new().map_err(js_err)?;
        for (name, value) in &self.fields {
            data.append_with_str(name, value).map_err(js_err)?;
        }
        for (name, file) in &self.files {
            data.append_with_blob_and_filename(name, file, &file.name())
                .map_err(js_err)?;
        }
        Ok(data)
    }
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::{ApiError, authorization_value};

    pub(super) fn authorize(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", &authorization_value(token)),
            None => builder,
        }
    }

    pub(super) fn network(err: gloo_net::Error) -> ApiError {
        log::warn!("request failed: {err}");
        ApiError::Network(err.to_string())
    }

    pub(super) async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let raw = resp.text().await.unwrap_or_default();
        log::warn!("{} rejected with {status}", resp.url());
        Err(ApiError::rejected(status, &raw))
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let resp = ensure_ok(resp).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Exchange email/password for a token and profile via `POST /api/login/`.
///
/// # Errors
///
/// Network failure, a rejected login (DRF error body), or an undecodable
/// response.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(request)
            .map_err(transport::network)?
            .send()
            .await
            .map_err(transport::network)?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, LOGIN_ENDPOINT);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via multipart `POST /api/register/`.
///
/// # Errors
///
/// Network failure or a rejected registration (field errors in the body).
pub async fn register(body: &MultipartBody) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .body(body.to_form_data()?)
            .map_err(transport::network)?
            .send()
            .await
            .map_err(transport::network)?;
        transport::ensure_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (body, REGISTER_ENDPOINT);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one page of products.
///
/// # Errors
///
/// Network failure, rejection, or an undecodable page envelope.
pub async fn list_shoes(token: Option<&str>, query: &ShoeQuery) -> Result<Page<Shoe>, ApiError> {
    let url = shoe_list_endpoint(query);
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::authorize(gloo_net::http::Request::get(&url), token)
            .send()
            .await
            .map_err(transport::network)?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, url);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single product.
///
/// # Errors
///
/// Network failure, rejection (404 for unknown ids), or an undecodable record.
pub async fn fetch_shoe(token: Option<&str>, id: u64) -> Result<Shoe, ApiError> {
    let url = shoe_endpoint(id);
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::authorize(gloo_net::http::Request::get(&url), token)
            .send()
            .await
            .map_err(transport::network)?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, url);
        Err(ApiError::Unavailable)
    }
}

/// Create a product via multipart `POST`.
///
/// # Errors
///
/// Network failure or a rejected record.
pub async fn create_shoe(token: Option<&str>, body: &MultipartBody) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::authorize(gloo_net::http::Request::post(SHOES_ENDPOINT), token)
            .body(body.to_form_data()?)
            .map_err(transport::network)?
            .send()
            .await
            .map_err(transport::network)?;
        transport::ensure_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, body);
        Err(ApiError::Unavailable)
    }
}

/// Partially update a product via multipart `PATCH`; omitted images are kept.
///
/// # Errors
///
/// Network failure or a rejected record.
pub async fn update_shoe(token: Option<&str>, id: u64, body: &MultipartBody) -> Result<(), ApiError> {
    let url = shoe_endpoint(id);
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::authorize(gloo_net::http::Request::patch(&url), token)
            .body(body.to_form_data()?)
            .map_err(transport::network)?
            .send()
            .await
            .map_err(transport::network)?;
        transport::ensure_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, url, body);
        Err(ApiError::Unavailable)
    }
}

/// Delete a product.
///
/// # Errors
///
/// Network failure or rejection.
pub async fn delete_shoe(token: Option<&str>, id: u64) -> Result<(), ApiError> {
    let url = shoe_endpoint(id);
    #[cfg(feature = "hydrate")]
    {
        let resp = transport::authorize(gloo_net::http::Request::delete(&url), token)
            .send()
            .await
            .map_err(transport::network)?;
        transport::ensure_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, url);
        Err(ApiError::Unavailable)
    }
}
