//! HTTP API module for the internship pay filter.
//!
//! This module provides the REST endpoints that categorize postings and
//! report threshold statistics over the loaded reference table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CategorizeRequest, ThresholdPercentageQuery};
pub use response::{ApiError, ApiErrorResponse, ThresholdPercentageResponse};
pub use state::AppState;
