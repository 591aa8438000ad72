//! State machine behind the movie list view

use crate::backend::{BackendError, MovieBackend};
use crate::movies::MovieRecord;
use thiserror::Error;
use tracing::{error, info};

pub const DELETE_PROMPT: &str = "Are you sure that you want to delete this movie?";
pub const EMPTY_MESSAGE: &str = "No movies found. Add your first movie!";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch movies.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete movie.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("You must be logged in.")]
    AuthRequired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub movie_id: i64,
    pub credential: String,
}

impl DeleteRequest {
    pub async fn send(&self, backend: &dyn MovieBackend) -> Result<(), BackendError> {
        backend.delete_movie(&self.credential, self.movie_id).await
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieList {
    movies: Vec<MovieRecord>,
    loading: bool,
    error: Option<String>,
    deleting: Vec<i64>,
}

impl MovieList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_deleting(&self, movie_id: i64) -> bool {
        self.deleting.contains(&movie_id)
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Failures are logged and also shown, so an unreachable backend doesn't
    /// look like an empty catalog.
    pub fn finish_load(&mut self, result: Result<Vec<MovieRecord>, BackendError>) {
        self.loading = false;
        match result {
            Ok(movies) => {
                info!("Loaded {} movie(s)", movies.len());
                self.movies = movies;
            }
            Err(e) => {
                error!("Failed to fetch movies: {}", e);
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Start deleting `movie_id`. Returns `Ok(None)` when the user declined the
    /// confirmation prompt.
    pub fn begin_delete(
        &mut self,
        movie_id: i64,
        confirmed: bool,
        credential: Option<&str>,
    ) -> Result<Option<DeleteRequest>, ListError> {
        if !confirmed {
            return Ok(None);
        }

        let Some(credential) = credential.map(str::trim).filter(|c| !c.is_empty()) else {
            let err = ListError::AuthRequired;
            self.error = Some(err.to_string());
            return Err(err);
        };

        self.error = None;
        if !self.deleting.contains(&movie_id) {
            self.deleting.push(movie_id);
        }

        Ok(Some(DeleteRequest {
            movie_id,
            credential: credential.to_string(),
        }))
    }

    /// Removes the row only after the backend confirmed the delete.
    pub fn finish_delete(&mut self, movie_id: i64, result: Result<(), BackendError>) {
        self.deleting.retain(|id| *id != movie_id);
        match result {
            Ok(()) => {
                info!("Deleted movie {}", movie_id);
                self.movies.retain(|m| m.id != movie_id);
            }
            Err(e) => {
                error!("Failed to delete movie {}: {}", movie_id, e);
                self.error = Some(DELETE_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub async fn load(&mut self, backend: &dyn MovieBackend) {
        self.begin_load();
        let result = backend.list_movies().await;
        self.finish_load(result);
    }

    /// Returns whether a delete request was sent.
    pub async fn delete(
        &mut self,
        backend: &dyn MovieBackend,
        movie_id: i64,
        confirmed: bool,
        credential: Option<&str>,
    ) -> Result<bool, ListError> {
        let Some(request) = self.begin_delete(movie_id, confirmed, credential)? else {
            return Ok(false);
        };
        let result = request.send(backend).await;
        self.finish_delete(movie_id, result);
        Ok(true)
    }
}
