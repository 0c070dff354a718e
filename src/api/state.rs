//! Application state for the internship pay filter API.

use std::sync::Arc;

use crate::engine::Engine;

/// Shared application state.
///
/// Holds the engine, and with it the read-only reference table, behind an
/// `Arc` so every handler shares one copy.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<Engine>,
}

impl AppState {
    /// Creates a new application state around `engine`.
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}
