// Test support utilities for both unit and integration tests

use crate::backend::{BackendError, MovieBackend};
use crate::movies::{MoviePayload, MovieRecord, SearchPage, SearchResult};
use crate::tmdb::{MovieCatalog, TmdbError};
use std::collections::VecDeque;
use std::sync::Mutex;

pub fn sample_result(id: u64, title: &str) -> SearchResult {
    let slug = title.to_lowercase().replace(' ', "_");
    SearchResult {
        id,
        original_title: title.to_string(),
        overview: format!("Overview of {}", title),
        popularity: 50.5,
        release_date: "2010-07-15".to_string(),
        vote_average: 8.4,
        poster_path: Some(format!("/{}.jpg", slug)),
        backdrop_path: Some(format!("/{}_backdrop.jpg", slug)),
    }
}

pub fn sample_record(id: i64, title: &str) -> MovieRecord {
    let slug = title.to_lowercase().replace(' ', "_");
    MovieRecord {
        id,
        tmdb_id: 1000 + id as u64,
        title: title.to_string(),
        description: format!("Overview of {}", title),
        popularity: 12.25,
        release_date: "1995-12-15".to_string(),
        rating: 7.9,
        backdrop_path: format!("https://image.tmdb.org/t/p/original/{}_backdrop.jpg", slug),
        poster_path: format!("https://image.tmdb.org/t/p/original/{}.jpg", slug),
        is_featured: false,
    }
}

pub fn search_page(results: Vec<SearchResult>, total_pages: u32) -> SearchPage {
    SearchPage {
        page: 1,
        total_results: results.len() as u32,
        results,
        total_pages,
    }
}

/// In-memory catalog that replays queued responses and records every query
#[derive(Default)]
pub struct MockCatalog {
    responses: Mutex<VecDeque<Result<SearchPage, TmdbError>>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_page(&self, page: SearchPage) {
        self.responses.lock().unwrap().push_back(Ok(page));
    }

    pub fn push_error(&self, error: TmdbError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// `(query, page)` for every search received
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MovieCatalog for MockCatalog {
    async fn search_movies(&self, query: &str, page: u32) -> Result<SearchPage, TmdbError> {
        self.calls.lock().unwrap().push((query.to_string(), page));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(search_page(Vec::new(), 0)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    List,
    Get(i64),
    Create(String, MoviePayload),
    Update(String, i64, MoviePayload),
    Delete(String, i64),
}

/// In-memory backend holding movies by id and recording every call
#[derive(Default)]
pub struct MockBackend {
    movies: Mutex<Vec<MovieRecord>>,
    calls: Mutex<Vec<BackendCall>>,
    fail_list: Mutex<bool>,
    next_write_error: Mutex<Option<BackendError>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(movies: Vec<MovieRecord>) -> Self {
        let backend = Self::default();
        *backend.movies.lock().unwrap() = movies;
        backend
    }

    pub fn fail_list(&self) {
        *self.fail_list.lock().unwrap() = true;
    }

    /// The next create, update or delete fails with `error`
    pub fn fail_next_write(&self, error: BackendError) {
        *self.next_write_error.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn movies(&self) -> Vec<MovieRecord> {
        self.movies.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<(String, MoviePayload)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                BackendCall::Create(credential, payload) => Some((credential, payload)),
                _ => None,
            })
            .collect()
    }

    pub fn updated(&self) -> Vec<(String, i64, MoviePayload)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                BackendCall::Update(credential, id, payload) => Some((credential, id, payload)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: BackendCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn take_write_error(&self) -> Result<(), BackendError> {
        match self.next_write_error.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn record_from_payload(id: i64, payload: &MoviePayload) -> MovieRecord {
    MovieRecord {
        id,
        tmdb_id: payload.tmdb_id,
        title: payload.title.clone(),
        description: payload.description.clone(),
        popularity: payload.popularity,
        release_date: payload.release_date.clone(),
        rating: payload.rating,
        backdrop_path: payload.backdrop_path.clone(),
        poster_path: payload.poster_path.clone(),
        is_featured: payload.is_featured,
    }
}

#[async_trait::async_trait]
impl MovieBackend for MockBackend {
    async fn list_movies(&self) -> Result<Vec<MovieRecord>, BackendError> {
        self.record(BackendCall::List);
        if *self.fail_list.lock().unwrap() {
            return Err(BackendError::Server {
                status: 500,
                message: None,
            });
        }
        Ok(self.movies())
    }

    async fn get_movie(&self, movie_id: i64) -> Result<MovieRecord, BackendError> {
        self.record(BackendCall::Get(movie_id));
        self.movies
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == movie_id)
            .cloned()
            .ok_or(BackendError::NotFound { message: None })
    }

    async fn create_movie(
        &self,
        credential: &str,
        payload: &MoviePayload,
    ) -> Result<(), BackendError> {
        self.record(BackendCall::Create(credential.to_string(), payload.clone()));
        self.take_write_error()?;
        let mut movies = self.movies.lock().unwrap();
        let id = movies.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        movies.push(record_from_payload(id, payload));
        Ok(())
    }

    async fn update_movie(
        &self,
        credential: &str,
        movie_id: i64,
        payload: &MoviePayload,
    ) -> Result<(), BackendError> {
        self.record(BackendCall::Update(
            credential.to_string(),
            movie_id,
            payload.clone(),
        ));
        self.take_write_error()?;
        let mut movies = self.movies.lock().unwrap();
        let movie = movies
            .iter_mut()
            .find(|m| m.id == movie_id)
            .ok_or(BackendError::NotFound { message: None })?;
        *movie = record_from_payload(movie_id, payload);
        Ok(())
    }

    async fn delete_movie(&self, credential: &str, movie_id: i64) -> Result<(), BackendError> {
        self.record(BackendCall::Delete(credential.to_string(), movie_id));
        self.take_write_error()?;
        self.movies.lock().unwrap().retain(|m| m.id != movie_id);
        Ok(())
    }
}
