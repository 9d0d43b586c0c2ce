//! Local HTTP endpoint for the analysis engine.
//!
//! This module exposes the engine to the presentation layer as a JSON
//! endpoint on the loopback interface.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AnalysisRequest;
pub use response::{AnalysisResponse, ApiError};
pub use state::AppState;
