//! HTTP API module for the incentive dashboard.
//!
//! This module provides the REST API endpoints for recording entries and
//! reading the aggregated dashboard views.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PersonQuery, ViewQuery};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
