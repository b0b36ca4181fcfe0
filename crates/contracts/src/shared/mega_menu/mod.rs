//! Open/closed state machine behind each top-level navigation entry.
//!
//! The controller never touches the DOM. Timers, the outside-click listener
//! and navbar measurement come from a [`MenuHost`], and the resources it hands
//! out are guards: dropping them cancels the timer or detaches the listener.
//! Dropping the controller therefore releases everything it holds.

pub mod bar;
pub mod controller;
pub mod host;

#[cfg(test)]
pub(crate) mod fake_host;

pub use bar::MenuBar;
pub use controller::{MenuController, MenuEvent, MenuSettings};
pub use host::{CloseTicket, MenuHost, MenuMode, MenuState, MenuZone};
