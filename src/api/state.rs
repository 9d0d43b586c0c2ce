//! Application state for the local analysis endpoint.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::ConfigLoader;
use crate::history::InMemoryHistory;

/// Shared application state.
///
/// Holds the loaded configuration and the archive of previously analyzed
/// periods for the lifetime of the session.
#[derive(Clone)]
pub struct AppState {
    /// The loaded analysis configuration.
    config: Arc<ConfigLoader>,
    /// Periods archived by earlier requests.
    history: Arc<Mutex<InMemoryHistory>>,
}

impl AppState {
    /// Creates a new application state with an empty history.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_history(config, InMemoryHistory::new())
    }

    /// Creates a new application state seeded with archived periods.
    pub fn with_history(config: ConfigLoader, history: InMemoryHistory) -> Self {
        Self {
            config: Arc::new(config),
            history: Arc::new(Mutex::new(history)),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Locks the period history.
    ///
    /// A poisoned lock still guards a consistent map, so the guard is
    /// recovered rather than propagated.
    pub fn history(&self) -> MutexGuard<'_, InMemoryHistory> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
