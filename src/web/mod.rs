//! Web server module
//!
//! Provides the HTTP routers for the document-QA and search services.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::{qa_router, search_router};
pub use state::AppState;
