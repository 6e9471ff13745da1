//! Result types for search agent responses
//!
//! Results are produced by external collaborators; the gateway models the
//! common fields and passes everything else through untouched.

mod types;

pub use types::SearchResult;
