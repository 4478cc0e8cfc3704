//! User API client.
//!
//! [`UserApi`] is the seam commands talk to; [`HttpUserApi`] is the `reqwest`
//! implementation against `{api_url}/users`. Tests swap in an in-memory
//! implementation (see `test_utils`).

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url, header};

use crate::config::BusinessConfig;
use crate::user::UsersPayload;
use crate::{User, UserId};

#[derive(Debug, thiserror::Error)]
pub enum UserApiError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("API returned status: {status}")]
    Status { status: StatusCode },
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("invalid API url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("user id {0:?} cannot be used as a path segment")]
    InvalidId(UserId),
}

pub type ApiResult<T> = Result<T, UserApiError>;

/// Remote operations on student records.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// `GET /users`
    async fn get_users(&self) -> ApiResult<Vec<User>>;

    /// `PUT /users/{id}` with the whole record as body.
    async fn update_user(&self, id: UserId, user: &User) -> ApiResult<()>;

    /// `DELETE /users/{id}`
    async fn delete_user(&self, id: UserId) -> ApiResult<()>;
}

#[derive(Debug, Clone)]
pub struct HttpUserApi {
    client: Client,
    users_url: Url,
    auth_token: Option<String>,
}

impl HttpUserApi {
    pub fn new(config: &BusinessConfig) -> ApiResult<Self> {
        Self::with_timeout(
            config.api_url().as_str(),
            config.auth_token().map(str::to_owned),
            config.request_timeout,
        )
    }

    /// `api_url` is the `/api` root; `/users` is appended.
    pub fn with_timeout(
        api_url: &str,
        auth_token: Option<String>,
        timeout: Duration,
    ) -> ApiResult<Self> {
        let raw = format!("{}/users", api_url.trim_end_matches('/'));
        let users_url = Url::parse(&raw).map_err(|err| UserApiError::InvalidUrl {
            url: raw.clone(),
            reason: err.to_string(),
        })?;
        if users_url.cannot_be_a_base() {
            return Err(UserApiError::InvalidUrl {
                url: raw,
                reason: "url has no path to extend".to_owned(),
            });
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(UserApiError::Transport)?;

        Ok(Self {
            client,
            users_url,
            auth_token,
        })
    }

    pub fn users_url(&self) -> &str {
        self.users_url.as_str()
    }

    /// `{users_url}/{id}` with `id` percent-encoded as one path segment.
    fn user_url(&self, id: UserId) -> ApiResult<Url> {
        // `Url` drops dot segments on push, which would target the collection.
        if matches!(id.as_str(), "" | "." | "..") {
            return Err(UserApiError::InvalidId(id));
        }

        let mut url = self.users_url.clone();
        url.path_segments_mut()
            .map_err(|()| UserApiError::InvalidId(id))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => request.header(header::AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(UserApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UserApiError::Status { status });
        }
        Ok(response)
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn get_users(&self) -> ApiResult<Vec<User>> {
        let response = self.send(self.client.get(self.users_url.clone())).await?;
        let payload: UsersPayload = response.json().await.map_err(UserApiError::Decode)?;
        let users = payload.into_users();
        debug!("GET {} returned {} user(s)", self.users_url, users.len());
        Ok(users)
    }

    async fn update_user(&self, id: UserId, user: &User) -> ApiResult<()> {
        let url = self.user_url(id)?;
        self.send(self.client.put(url.clone()).json(user)).await?;
        debug!("PUT {url} succeeded");
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> ApiResult<()> {
        let url = self.user_url(id)?;
        self.send(self.client.delete(url.clone())).await?;
        debug!("DELETE {url} succeeded");
        Ok(())
    }
}
