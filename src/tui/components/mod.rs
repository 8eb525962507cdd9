//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns show up here:
//!
//! - **Stateless components** receive all data as props and just draw:
//!   `NavBar`, `Hero`, `BookingSummary`, the driver and admin panels.
//! - **Cursor-carrying components** additionally take presentation state
//!   (a highlight index, a focus flag) owned by `TuiState`: `BusList`,
//!   `SeatGrid`, `DeparturesList`.
//!
//! Each component file contains its state types, rendering logic, and
//! tests. Components receive external data as "props" (struct fields),
//! not by reaching into global state, which keeps dependencies explicit
//! and the pieces testable with `TestBackend`.

pub mod admin;
pub mod booking;
pub mod bus_list;
pub mod driver;
pub mod hero;
pub mod nav_bar;
pub mod seat_map;

pub use booking::{BookingSummary, DeparturesList, RouteCard};
pub use bus_list::BusList;
pub use hero::Hero;
pub use nav_bar::NavBar;
pub use seat_map::SeatGrid;
