//! Card locations on the table.
//!
//! ## Key Types
//!
//! - `Pile`: a cascade, with per-card face-up tracking
//! - `Foundation`: a suit stack built up from the Ace
//! - `DrawPile`: the hidden stock and its visible draw window

pub mod draw;
pub mod foundation;
pub mod pile;

pub use draw::DrawPile;
pub use foundation::Foundation;
pub use pile::{Pile, Run};
