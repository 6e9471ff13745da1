//! Configuration module for the agent gateway
//!
//! Handles loading and validating settings from YAML files and
//! environment variables. Settings are constructed once in `main` and
//! injected into the application state; there is no global accessor.

mod settings;

pub use settings::*;
