//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::domain::repositories::UrlRepository;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn UrlRepository>, alias_length: usize) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(repository, alias_length)),
        }
    }
}
