//! HTTP client for network-based API calls
//!
//! Attaches the session's bearer token to every request and decodes the
//! standard response envelope. A 401 triggers exactly one refresh-then-retry;
//! when the refresh itself fails the session is cleared and the caller gets
//! [`ClientError::SessionExpired`] to force a re-login.

use crate::{ClientConfig, ClientError, ClientResult, Session};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::client::{RefreshRequest, TokenPair};
use shared::error::{AppError, ErrorCode};
use shared::response::ApiResponse;

/// HTTP client for making network requests to the hotel API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl HttpClient {
    /// Create a new HTTP client from configuration and a session handle
    pub fn new(config: &ClientConfig, session: Session) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    /// The session this client authenticates with
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // ========== Request plumbing ==========

    async fn send_once<B, Q>(
        &self,
        method: &Method,
        url: &str,
        body: Option<&B>,
        query: Option<&Q>,
    ) -> ClientResult<reqwest::Response>
    where
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        let mut request = self.client.request(method.clone(), url);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = self.session.access_token() {
            request = request.header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", token),
            );
        }
        Ok(request.send().await?)
    }

    async fn request_raw<B, Q>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: Option<&Q>,
    ) -> ClientResult<(StatusCode, String)>
    where
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        let mut response = self.send_once(&method, &url, body, query).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            self.refresh_session().await?;
            tracing::debug!(%url, "retrying request after token refresh");
            response = self.send_once(&method, &url, body, query).await?;
        }

        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }

    async fn request<T, B, Q>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: Option<&Q>,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        let (status, text) = self.request_raw(method, path, body, query).await?;
        decode_envelope(status, &text)
    }

    async fn request_unit<B, Q>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: Option<&Q>,
    ) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        let (status, text) = self.request_raw(method, path, body, query).await?;
        decode_unit_envelope(status, &text)
    }

    /// Exchange the refresh token for a new token pair
    ///
    /// Any failure clears the session: the spent access token cannot be
    /// trusted and the caller must send the user back to login.
    async fn refresh_session(&self) -> ClientResult<()> {
        let Some(refresh_token) = self.session.refresh_token() else {
            self.session.clear();
            return Err(ClientError::SessionExpired);
        };

        tracing::debug!("access token rejected, attempting refresh");
        let request = RefreshRequest { refresh_token };
        let response = self
            .client
            .post(self.url("api/auth/refresh"))
            .json(&request)
            .send()
            .await;

        let tokens: TokenPair = match response {
            Ok(response) => {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                match decode_envelope(status, &text) {
                    Ok(tokens) => tokens,
                    Err(err) => {
                        tracing::warn!(error = %err, "token refresh rejected");
                        self.session.clear();
                        return Err(ClientError::SessionExpired);
                    }
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "token refresh unreachable");
                self.session.clear();
                return Err(ClientError::SessionExpired);
            }
        };

        self.session.set_tokens(tokens);
        tracing::debug!("session refreshed");
        Ok(())
    }

    // ========== Request methods ==========

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request::<T, (), ()>(Method::GET, path, None, None).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.request::<T, (), Q>(Method::GET, path, None, Some(query)).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request::<T, B, ()>(Method::POST, path, Some(body), None).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request::<T, (), ()>(Method::POST, path, None, None).await
    }

    /// Make a POST request whose response carries no data
    pub async fn post_unit<B>(&self, path: &str, body: &B) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.request_unit::<B, ()>(Method::POST, path, Some(body), None).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request::<T, B, ()>(Method::PUT, path, Some(body), None).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        self.request_unit::<(), ()>(Method::DELETE, path, None, None).await
    }
}

/// Decode a response body against the standard envelope
///
/// Success bodies must carry `data`; error bodies surface the server message
/// verbatim, falling back to a generic message when no envelope is present.
fn decode_envelope<T: DeserializeOwned>(status: StatusCode, body: &str) -> ClientResult<T> {
    if status.is_success() {
        let envelope: ApiResponse<T> = serde_json::from_str(body)
            .map_err(|err| ClientError::InvalidResponse(format!("malformed envelope: {}", err)))?;
        return envelope.into_data().map_err(ClientError::from);
    }
    Err(decode_error(status, body))
}

/// Decode a data-less response body against the standard envelope
fn decode_unit_envelope(status: StatusCode, body: &str) -> ClientResult<()> {
    if status.is_success() {
        // An empty body counts as acknowledgement.
        if body.trim().is_empty() {
            return Ok(());
        }
        let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(body)
            .map_err(|err| ClientError::InvalidResponse(format!("malformed envelope: {}", err)))?;
        return envelope.into_unit().map_err(ClientError::from);
    }
    Err(decode_error(status, body))
}

fn decode_error(status: StatusCode, body: &str) -> ClientError {
    match serde_json::from_str::<ApiResponse<serde_json::Value>>(body) {
        Ok(envelope) => match envelope.as_error() {
            Some(err) => err.into(),
            // Error status with a success envelope: trust the status.
            None => ClientError::Api(AppError::with_message(
                ErrorCode::Unknown,
                format!("request failed with status {}", status),
            )),
        },
        Err(_) => ClientError::Api(AppError::with_message(
            ErrorCode::Unknown,
            format!("request failed with status {}", status),
        )),
    }
}
