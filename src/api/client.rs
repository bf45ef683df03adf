use std::sync::Arc;

use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::{error_message_from_body, ApiError};
use crate::config::ApiConfig;
use crate::session::TokenProvider;

/// Thin JSON client for the Villa Perez backend. Injects the session's
/// bearer token when one is present, unwraps error bodies into
/// [`ApiError`], and leaves endpoint knowledge to the per-resource modules.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: HttpClient,
    session: Arc<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Arc<dyn TokenProvider>) -> Self {
        Self {
            base_url: config.base_url.clone(),
            http: HttpClient::new(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.builder(Method::GET, path), true).await
    }

    /// GET without credentials. The announcements endpoint keys its
    /// visibility rules off the absence of a token.
    pub async fn get_public<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.builder(Method::GET, path), false).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.builder(Method::POST, path).json(body), true)
            .await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.builder(Method::PUT, path).json(body), true)
            .await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.builder(Method::PATCH, path).json(body), true)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.builder(Method::DELETE, path), true).await
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        mut builder: RequestBuilder,
        with_auth: bool,
    ) -> Result<T, ApiError> {
        if with_auth {
            if let Some(token) = self.session.token() {
                builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
            }
        }

        let response = builder.send().await.map_err(ApiError::from_reqwest)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::from_reqwest)?;

        if !status.is_success() {
            debug!("request failed with {}: {}", status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message_from_body(&body, status),
            });
        }

        // Some endpoints answer 200 with an empty body; deserialize those
        // as JSON null so `()` and Option targets work.
        let payload = if body.trim().is_empty() {
            "null"
        } else {
            body.as_str()
        };
        serde_json::from_str(payload).map_err(|err| ApiError::Decode(err.to_string()))
    }
}
