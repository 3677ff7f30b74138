//! # Campus Client
//!
//! Thin typed client over the campus marketplace REST API. It holds no
//! authority of its own: every rule it reflects (who may edit, what is
//! valid) is re-checked server-side, and the client merely surfaces the
//! server's answers.

mod view;

pub use view::ViewState;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use campus_shared::ErrorResponse;
use campus_shared::dto::{
    AuthResponse, CreateListingRequest, ListingQuery, ListingResponse, LoginRequest,
    MeResponse, MessageResponse, RegisterRequest, UpdateListingRequest, UserSummary,
};

/// Client-side errors: either the server answered with an error body, or
/// the request never completed.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{title}: {detail}")]
    Api {
        status: u16,
        title: String,
        detail: String,
    },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    fn from_error_body(fallback_status: u16, body: Option<ErrorResponse>) -> Self {
        match body {
            Some(err) => Self::Api {
                status: err.status,
                title: err.title,
                detail: err.detail.unwrap_or_default(),
            },
            None => Self::Api {
                status: fallback_status,
                title: "Unexpected server response".to_string(),
                detail: String::new(),
            },
        }
    }
}

/// Typed API client. Stores the bearer token after a successful
/// register or login and attaches it to protected calls.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: normalize_base_url(base_url.into()),
            token: None,
        }
    }

    /// Whether a token is held. A convenience for hiding actions in a
    /// view; the server enforces authentication regardless.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Drop the held token (logout). Stateless server-side: the token
    /// itself stays valid until it expires.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn handle<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.json::<ErrorResponse>().await.ok();
        Err(ClientError::from_error_body(status.as_u16(), body))
    }

    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserSummary, ClientError> {
        let body = RegisterRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        };
        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&body)
            .send()
            .await?;

        let auth: AuthResponse = Self::handle(response).await?;
        self.token = Some(auth.token);
        Ok(auth.user)
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<UserSummary, ClientError> {
        let body = LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        };
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&body)
            .send()
            .await?;

        let auth: AuthResponse = Self::handle(response).await?;
        self.token = Some(auth.token);
        Ok(auth.user)
    }

    pub async fn me(&self) -> Result<UserSummary, ClientError> {
        let response = self
            .with_auth(self.http.get(self.url("/api/auth/me")))
            .send()
            .await?;

        let me: MeResponse = Self::handle(response).await?;
        Ok(me.user)
    }

    pub async fn listings(&self, query: &ListingQuery) -> Result<Vec<ListingResponse>, ClientError> {
        let response = self
            .http
            .get(self.url("/api/products"))
            .query(query)
            .send()
            .await?;

        Self::handle(response).await
    }

    pub async fn listing(&self, id: Uuid) -> Result<ListingResponse, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/products/{id}")))
            .send()
            .await?;

        Self::handle(response).await
    }

    pub async fn create_listing(
        &self,
        listing: &CreateListingRequest,
    ) -> Result<ListingResponse, ClientError> {
        let response = self
            .with_auth(self.http.post(self.url("/api/products")))
            .json(listing)
            .send()
            .await?;

        Self::handle(response).await
    }

    pub async fn update_listing(
        &self,
        id: Uuid,
        update: &UpdateListingRequest,
    ) -> Result<ListingResponse, ClientError> {
        let response = self
            .with_auth(self.http.put(self.url(&format!("/api/products/{id}"))))
            .json(update)
            .send()
            .await?;

        Self::handle(response).await
    }

    pub async fn delete_listing(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        let response = self
            .with_auth(self.http.delete(self.url(&format!("/api/products/{id}"))))
            .send()
            .await?;

        Self::handle(response).await
    }

    pub async fn my_listings(&self) -> Result<Vec<ListingResponse>, ClientError> {
        let response = self
            .with_auth(self.http.get(self.url("/api/products/user/my-products")))
            .send()
            .await?;

        Self::handle(response).await
    }
}

fn normalize_base_url(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slashes_are_stripped() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.url("/api/products"), "http://localhost:8080/api/products");
    }

    #[test]
    fn token_lifecycle() {
        let mut client = ApiClient::new("http://localhost:8080");
        assert!(!client.is_authenticated());

        client.token = Some("tok".to_string());
        assert!(client.is_authenticated());

        client.clear_token();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn error_body_maps_to_api_error() {
        let body = ErrorResponse::bad_request("Invalid category");
        let err = ClientError::from_error_body(400, Some(body));

        match err {
            ClientError::Api { status, detail, .. } => {
                assert_eq!(status, 400);
                assert_eq!(detail, "Invalid category");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unparseable_error_body_keeps_the_status() {
        let err = ClientError::from_error_body(502, None);

        match err {
            ClientError::Api { status, .. } => assert_eq!(status, 502),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
