//! # Core Application Logic
//!
//! This module contains Transito's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (view-models)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Classifiers (pure)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │  Mobile    │
//!     │  Adapter   │      │  Adapter   │      │  (future)  │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all view-model state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`booking`]: Seat pool, selection rules, sample departures
//! - [`trip`]: Trip status machine and driver dashboard data
//! - [`fleet`]: Occupancy/status classifiers and fleet sample data
//! - [`config`]: TOML configuration and resolution

pub mod action;
pub mod booking;
pub mod config;
pub mod fleet;
pub mod state;
pub mod trip;
