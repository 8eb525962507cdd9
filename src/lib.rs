//! Transito library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

use crate::core::state::Screen;

/// Startup view, as accepted on the command line.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum View {
    #[default]
    Home,
    Driver,
    Admin,
}

impl From<View> for Screen {
    fn from(view: View) -> Screen {
        match view {
            View::Home => Screen::Home,
            View::Driver => Screen::Driver,
            View::Admin => Screen::Admin,
        }
    }
}
