use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{header::HeaderMap, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    api::types::{ApiError, UserResponse},
    config,
    utils::storage as storage_utils,
};

/// Characters left untouched inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    fn auth_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = storage_utils::read_item(storage_utils::ACCESS_TOKEN_KEY) {
            match format!("Bearer {}", token).parse() {
                Ok(value) => {
                    headers.insert(reqwest::header::AUTHORIZATION, value);
                }
                Err(_) => log::warn!("stored access token is not a valid header value"),
            }
        }
        headers
    }

    /// Attaches credentials and sends; transport failures become `REQUEST_FAILED`.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .headers(Self::auth_headers())
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::handle_unauthorized_status(response.status());
        Ok(response)
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("API returned 401, clearing stored session");
            storage_utils::remove_items(&[
                storage_utils::ACCESS_TOKEN_KEY,
                storage_utils::CURRENT_USER_KEY,
            ]);
        }
    }

    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from(response).await)
        }
    }

    pub(crate) async fn expect_success(response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn error_from(response: Response) -> ApiError {
        let status = response.status();
        match response.json::<ApiError>().await {
            Ok(error) => error,
            Err(_) => ApiError::from_status(status.as_u16()),
        }
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/auth/me", base_url)))
            .await?;
        Self::decode(response).await
    }
}

pub(crate) fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}
