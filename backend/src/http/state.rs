//! Application state for the HTTP server.

use std::sync::Arc;

use crate::engine::EphemerisEngine;
use crate::models::SignLocale;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Ephemeris engine, shared read-only
    pub engine: Arc<dyn EphemerisEngine>,
    /// Language of sign names in chart responses
    pub sign_locale: SignLocale,
}

impl AppState {
    /// Create a new application state with the given engine.
    pub fn new(engine: Arc<dyn EphemerisEngine>) -> Self {
        Self {
            engine,
            sign_locale: SignLocale::default(),
        }
    }

    pub fn with_sign_locale(mut self, locale: SignLocale) -> Self {
        self.sign_locale = locale;
        self
    }
}
