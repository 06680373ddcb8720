//! Plain-text front end.
//!
//! - `TextView`: renders the board
//! - `TextController`: reads commands and drives a game to completion

pub mod controller;
pub mod view;

pub use controller::{ControllerError, Outcome, TextController};
pub use view::TextView;
