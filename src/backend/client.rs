use crate::movies::{MoviePayload, MovieRecord};
use reqwest::{Client, Error as ReqwestError, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Movie not found")]
    NotFound { message: Option<String> },
    #[error("Not authorized")]
    Unauthorized { message: Option<String> },
    #[error("Backend returned status {status}")]
    Server { status: u16, message: Option<String> },
}

impl BackendError {
    /// Message supplied by the server in the error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            BackendError::NotFound { message }
            | BackendError::Unauthorized { message }
            | BackendError::Server { message, .. } => message.as_deref(),
            BackendError::Request(_) => None,
        }
    }
}

/// The system of record for persisted movies (allows mocking for tests)
#[async_trait::async_trait]
pub trait MovieBackend: Send + Sync {
    async fn list_movies(&self) -> Result<Vec<MovieRecord>, BackendError>;
    async fn get_movie(&self, movie_id: i64) -> Result<MovieRecord, BackendError>;
    async fn create_movie(
        &self,
        credential: &str,
        payload: &MoviePayload,
    ) -> Result<(), BackendError>;
    async fn update_movie(
        &self,
        credential: &str,
        movie_id: i64,
        payload: &MoviePayload,
    ) -> Result<(), BackendError>;
    async fn delete_movie(&self, credential: &str, movie_id: i64) -> Result<(), BackendError>;
}

/// Error body returned by the backend. `message` is either a string or a list
/// of strings depending on which layer rejected the request.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<serde_json::Value>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        match self.message? {
            serde_json::Value::String(text) if !text.trim().is_empty() => Some(text),
            serde_json::Value::Array(items) => {
                let parts: Vec<String> = items
                    .into_iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(", "))
                }
            }
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn movies_url(&self) -> String {
        format!("{}/movies", self.base_url)
    }

    fn movie_url(&self, movie_id: i64) -> String {
        format!("{}/movies/{}", self.base_url, movie_id)
    }

    pub async fn list(&self) -> Result<Vec<MovieRecord>, BackendError> {
        let url = self.movies_url();
        debug!("Backend: GET {}", url);
        let response = check_status(self.client.get(&url).send().await?).await?;
        let movies: Vec<MovieRecord> = response.json().await?;
        info!("Backend returned {} movie(s)", movies.len());
        Ok(movies)
    }

    pub async fn get(&self, movie_id: i64) -> Result<MovieRecord, BackendError> {
        let url = self.movie_url(movie_id);
        debug!("Backend: GET {}", url);
        let response = check_status(self.client.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    pub async fn create(
        &self,
        credential: &str,
        payload: &MoviePayload,
    ) -> Result<(), BackendError> {
        let url = self.movies_url();
        info!("Backend: POST {} (tmdb_id={})", url, payload.tmdb_id);
        debug!("Movie payload: {:?}", payload);
        let request = self.client.post(&url).bearer_auth(credential).json(payload);
        check_status(request.send().await?).await?;
        Ok(())
    }

    pub async fn update(
        &self,
        credential: &str,
        movie_id: i64,
        payload: &MoviePayload,
    ) -> Result<(), BackendError> {
        let url = self.movie_url(movie_id);
        info!("Backend: PATCH {} (tmdb_id={})", url, payload.tmdb_id);
        debug!("Movie payload: {:?}", payload);
        let request = self.client.patch(&url).bearer_auth(credential).json(payload);
        check_status(request.send().await?).await?;
        Ok(())
    }

    pub async fn delete(&self, credential: &str, movie_id: i64) -> Result<(), BackendError> {
        let url = self.movie_url(movie_id);
        info!("Backend: DELETE {}", url);
        let request = self.client.delete(&url).bearer_auth(credential);
        check_status(request.send().await?).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let err = error_for_status(status, &body);
    warn!("Backend error {}: {:?}", status, err.server_message());
    Err(err)
}

/// Map a non-success status and its raw body to an error, keeping any
/// server-supplied message.
fn error_for_status(status: StatusCode, body: &str) -> BackendError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message);

    match status {
        StatusCode::NOT_FOUND => BackendError::NotFound { message },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BackendError::Unauthorized { message },
        _ => BackendError::Server {
            status: status.as_u16(),
            message,
        },
    }
}

#[async_trait::async_trait]
impl MovieBackend for BackendClient {
    async fn list_movies(&self) -> Result<Vec<MovieRecord>, BackendError> {
        self.list().await
    }

    async fn get_movie(&self, movie_id: i64) -> Result<MovieRecord, BackendError> {
        self.get(movie_id).await
    }

    async fn create_movie(
        &self,
        credential: &str,
        payload: &MoviePayload,
    ) -> Result<(), BackendError> {
        self.create(credential, payload).await
    }

    async fn update_movie(
        &self,
        credential: &str,
        movie_id: i64,
        payload: &MoviePayload,
    ) -> Result<(), BackendError> {
        self.update(credential, movie_id, payload).await
    }

    async fn delete_movie(&self, credential: &str, movie_id: i64) -> Result<(), BackendError> {
        self.delete(credential, movie_id).await
    }
}
