//! Search coordination module
//!
//! Delegates a query to the registered search agents, aggregates their
//! results, and handles timing.

mod executor;
mod models;

pub use executor::Coordinator;
pub use models::{AgentResponse, ConversationContext, Turn};
