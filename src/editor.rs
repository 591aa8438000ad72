//! State machine behind the movie editor view.
//!
//! Every network-backed operation is split into a `begin_*` step that
//! validates and mutates state and returns a request, and a `finish_*` step
//! that applies the response. The UI runs the request on its own task in
//! between, so no state is borrowed across an await. The async `search`,
//! `save` and `load` drivers chain the three steps for non-UI callers.

use crate::backend::{BackendError, MovieBackend};
use crate::movies::{
    mapping, validate, FormField, FormState, MoviePayload, MovieRecord, SearchPage, SearchResult,
    ValidationError,
};
use crate::tmdb::{MovieCatalog, TmdbError};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const NO_RESULTS_MESSAGE: &str = "No movies found matching your search criteria.";
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch movies. Try again later.";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save movie. Please try again.";
pub const LOAD_FAILED_MESSAGE: &str = "Unable to fetch movie details.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Please provide a search term.")]
    EmptyQuery,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("You must be logged in.")]
    AuthRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit { movie_id: i64 },
}

impl EditorMode {
    pub fn movie_id(self) -> Option<i64> {
        match self {
            EditorMode::Create => None,
            EditorMode::Edit { movie_id } => Some(movie_id),
        }
    }
}

/// A search to run against the catalog. Only the response for the most
/// recently issued token is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub token: u64,
    pub query: String,
    pub page: u32,
}

impl SearchRequest {
    pub async fn send(&self, catalog: &dyn MovieCatalog) -> Result<SearchPage, TmdbError> {
        catalog.search_movies(&self.query, self.page).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub movie_id: Option<i64>,
    pub payload: MoviePayload,
    pub credential: String,
}

impl SaveRequest {
    pub async fn send(&self, backend: &dyn MovieBackend) -> Result<(), BackendError> {
        match self.movie_id {
            Some(movie_id) => {
                backend
                    .update_movie(&self.credential, movie_id, &self.payload)
                    .await
            }
            None => backend.create_movie(&self.credential, &self.payload).await,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub movie_id: i64,
}

impl LoadRequest {
    pub async fn send(&self, backend: &dyn MovieBackend) -> Result<MovieRecord, BackendError> {
        backend.get_movie(self.movie_id).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Persisted; the caller should return to the list
    Saved,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieEditor {
    mode: EditorMode,
    query: String,
    results: Vec<SearchResult>,
    selected: Option<SearchResult>,
    record: Option<MovieRecord>,
    form: FormState,
    current_page: u32,
    total_pages: u32,
    error: Option<String>,
    loading: bool,
    search_token: u64,
}

impl MovieEditor {
    pub fn new(mode: EditorMode) -> Self {
        Self {
            mode,
            query: String::new(),
            results: Vec::new(),
            selected: None,
            record: None,
            form: FormState::default(),
            current_page: 1,
            total_pages: 0,
            error: None,
            loading: false,
            search_token: 0,
        }
    }

    pub fn create() -> Self {
        Self::new(EditorMode::Create)
    }

    pub fn edit(movie_id: i64) -> Self {
        Self::new(EditorMode::Edit { movie_id })
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn selected(&self) -> Option<&SearchResult> {
        self.selected.as_ref()
    }

    /// The persisted record loaded in edit mode
    pub fn record(&self) -> Option<&MovieRecord> {
        self.record.as_ref()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.error = None;
    }

    /// Explicit search from the button or the Enter key. Always starts at page 1.
    pub fn submit_search(&mut self) -> Result<SearchRequest, EditorError> {
        self.current_page = 1;
        self.begin_search()
    }

    pub fn begin_search(&mut self) -> Result<SearchRequest, EditorError> {
        self.error = None;
        if self.query.trim().is_empty() {
            let err = EditorError::EmptyQuery;
            self.fail(err.to_string());
            return Err(err);
        }

        self.loading = true;
        self.results.clear();
        self.search_token += 1;
        debug!(
            "Search #{} for '{}' page {}",
            self.search_token, self.query, self.current_page
        );

        Ok(SearchRequest {
            token: self.search_token,
            query: self.query.clone(),
            page: self.current_page,
        })
    }

    pub fn finish_search(&mut self, token: u64, result: Result<SearchPage, TmdbError>) {
        if token != self.search_token {
            debug!(
                "Dropping stale search response #{} (latest is #{})",
                token, self.search_token
            );
            return;
        }

        self.loading = false;
        match result {
            Ok(page) if page.results.is_empty() => {
                self.total_pages = 0;
                self.fail(NO_RESULTS_MESSAGE);
            }
            Ok(page) => {
                self.total_pages = page.total_pages.max(1);
                self.results = page.results;
            }
            Err(e) => {
                warn!("Movie search failed: {}", e);
                self.fail(SEARCH_FAILED_MESSAGE);
            }
        }
    }

    /// Move to `page`, clamped to the known page range. Returns the search to
    /// run when the page actually changed.
    pub fn go_to_page(&mut self, page: u32) -> Option<SearchRequest> {
        let target = page.clamp(1, self.total_pages.max(1));
        if target == self.current_page {
            return None;
        }
        self.current_page = target;
        self.begin_search().ok()
    }

    pub fn next_page(&mut self) -> Option<SearchRequest> {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> Option<SearchRequest> {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Pick a search result. The form is overwritten from it, not merged.
    pub fn select(&mut self, result: SearchResult) {
        debug!("Selected TMDB movie {} '{}'", result.id, result.original_title);
        self.form = mapping::form_from_search_result(&result);
        self.selected = Some(result);
        self.error = None;
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value.into());
        self.error = None;
    }

    pub fn validate(&self) -> Result<MoviePayload, ValidationError> {
        validate(&self.form, self.selected.as_ref())
    }

    /// Validate and build the save request. `credential` is the session's
    /// access token; without one nothing is sent.
    pub fn begin_save(&mut self, credential: Option<&str>) -> Result<SaveRequest, EditorError> {
        let payload = match self.validate() {
            Ok(payload) => payload,
            Err(e) => {
                self.fail(e.to_string());
                return Err(e.into());
            }
        };

        let Some(credential) = credential.map(str::trim).filter(|c| !c.is_empty()) else {
            let err = EditorError::AuthRequired;
            self.fail(err.to_string());
            return Err(err);
        };

        self.loading = true;
        self.error = None;

        Ok(SaveRequest {
            movie_id: self.mode.movie_id(),
            payload,
            credential: credential.to_string(),
        })
    }

    pub fn finish_save(&mut self, result: Result<(), BackendError>) -> SaveOutcome {
        self.loading = false;
        match result {
            Ok(()) => {
                info!("Movie saved ({:?})", self.mode);
                SaveOutcome::Saved
            }
            Err(e) => {
                warn!("Saving movie failed: {}", e);
                let message = e.server_message().unwrap_or(SAVE_FAILED_MESSAGE).to_string();
                self.fail(message);
                SaveOutcome::Failed
            }
        }
    }

    /// Fetch request for the record being edited; `None` in create mode.
    pub fn begin_load(&mut self) -> Option<LoadRequest> {
        let movie_id = self.mode.movie_id()?;
        self.loading = true;
        self.error = None;
        Some(LoadRequest { movie_id })
    }

    pub fn finish_load(&mut self, result: Result<MovieRecord, BackendError>) {
        self.loading = false;
        match result {
            Ok(record) => {
                debug!("Loaded movie {} for editing", record.id);
                self.selected = Some(mapping::selection_from_record(&record));
                self.form = mapping::form_from_record(&record);
                self.record = Some(record);
            }
            Err(e) => {
                warn!("Loading movie {:?} failed: {}", self.mode.movie_id(), e);
                self.fail(LOAD_FAILED_MESSAGE);
            }
        }
    }

    /// Submit the current query from page 1 and apply the response.
    pub async fn search(&mut self, catalog: &dyn MovieCatalog) -> Result<(), EditorError> {
        let request = self.submit_search()?;
        self.run_search(catalog, request).await;
        Ok(())
    }

    pub async fn run_search(&mut self, catalog: &dyn MovieCatalog, request: SearchRequest) {
        let result = request.send(catalog).await;
        self.finish_search(request.token, result);
    }

    pub async fn save(
        &mut self,
        backend: &dyn MovieBackend,
        credential: Option<&str>,
    ) -> Result<SaveOutcome, EditorError> {
        let request = self.begin_save(credential)?;
        let result = request.send(backend).await;
        Ok(self.finish_save(result))
    }

    pub async fn load(&mut self, backend: &dyn MovieBackend) {
        if let Some(request) = self.begin_load() {
            let result = request.send(backend).await;
            self.finish_load(result);
        }
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            EditorMode::Create => "Add Movie",
            EditorMode::Edit { .. } => "Update Movie",
        }
    }

    pub fn save_label(&self) -> &'static str {
        if self.loading {
            return "Saving...";
        }
        match self.mode {
            EditorMode::Create => "Save Movie",
            EditorMode::Edit { .. } => "Update Movie",
        }
    }

    pub fn search_label(&self) -> &'static str {
        if self.loading {
            "Searching..."
        } else {
            "Search"
        }
    }

    /// The search panel only exists when adding a movie
    pub fn show_search(&self) -> bool {
        self.mode == EditorMode::Create
    }

    /// The query box is locked while a search is in flight
    pub fn can_edit_query(&self) -> bool {
        !self.loading
    }

    pub fn can_search(&self) -> bool {
        !self.loading && !self.query.trim().is_empty()
    }

    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn can_go_previous(&self) -> bool {
        !self.loading && self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        !self.loading && self.current_page < self.total_pages
    }

    pub fn is_selected(&self, tmdb_id: u64) -> bool {
        self.selected.as_ref().is_some_and(|s| s.id == tmdb_id)
    }

    pub fn poster_url(&self) -> Option<String> {
        let url = mapping::image_url(self.selected.as_ref()?.poster_path.as_deref());
        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    }
}
