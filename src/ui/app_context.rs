use crate::backend::BackendClient;
use crate::config::Config;
use crate::session::SessionStore;
use crate::tmdb::TmdbClient;
use dioxus::prelude::*;

/// Services shared by every view
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: Config,
    pub tmdb: TmdbClient,
    pub backend: BackendClient,
    pub session: SessionStore,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let tmdb = TmdbClient::with_base_url(
            config.tmdb_read_token.clone(),
            config.tmdb_base_url.clone(),
        );
        let backend = BackendClient::new(config.api_base_url.clone());
        let session = match &config.access_token_override {
            Some(token) => SessionStore::with_override(Some(token.clone())),
            None => SessionStore::new(),
        };

        Self {
            config,
            tmdb,
            backend,
            session,
        }
    }
}

/// Hook to access the shared services
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}
