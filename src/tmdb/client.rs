use crate::movies::SearchPage;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("API rate limit exceeded")]
    RateLimit,
    #[error("Invalid read access token")]
    InvalidToken,
    #[error("No TMDB read access token configured")]
    MissingToken,
    #[error("TMDB returned status {0}")]
    Status(u16),
}

/// Read-only access to the external movie catalog (allows mocking for tests)
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn search_movies(&self, query: &str, page: u32) -> Result<SearchPage, TmdbError>;
}

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    read_token: Option<String>,
    base_url: String,
}

impl std::fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.read_token.is_some())
            .finish()
    }
}

impl TmdbClient {
    pub fn new(read_token: Option<String>) -> Self {
        Self::with_base_url(read_token, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(read_token: Option<String>, base_url: String) -> Self {
        Self {
            client: Client::new(),
            read_token: read_token.filter(|t| !t.trim().is_empty()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn has_token(&self) -> bool {
        self.read_token.is_some()
    }

    /// Search movies by title, one page at a time
    pub async fn search(&self, query: &str, page: u32) -> Result<SearchPage, TmdbError> {
        let token = self.read_token.as_deref().ok_or(TmdbError::MissingToken)?;
        let url = format!("{}/search/movie", self.base_url);
        let page = page.max(1).to_string();

        info!("TMDB API: GET {} query='{}' page={}", url, query, page);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", query),
                ("include_adult", "false"),
                ("language", "en-US"),
                ("page", page.as_str()),
            ])
            .header("Accept", "application/json")
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            let search_page: SearchPage = response.json().await?;
            info!(
                "TMDB search returned {} result(s), page {} of {}",
                search_page.results.len(),
                search_page.page,
                search_page.total_pages
            );
            Ok(search_page)
        } else {
            let err = error_for_status(status);
            warn!("TMDB API error {}: {}", status, err);
            Err(err)
        }
    }
}

fn error_for_status(status: StatusCode) -> TmdbError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => TmdbError::RateLimit,
        StatusCode::UNAUTHORIZED => TmdbError::InvalidToken,
        _ => TmdbError::Status(status.as_u16()),
    }
}

#[async_trait::async_trait]
impl MovieCatalog for TmdbClient {
    async fn search_movies(&self, query: &str, page: u32) -> Result<SearchPage, TmdbError> {
        self.search(query, page).await
    }
}
