//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::App;

/// Creates an App with the default sample data.
pub fn test_app() -> App {
    App::new()
}
