//! Move-legality rules.
//!
//! Each variant implements `RuleValidator`:
//! - `ClassicRules`: alternating colours, Kings to empty cascades
//! - `WhiteheadRules`: same colour, single-suit moves, any card to empty
//!
//! The engine consults the validator for every move but never interprets
//! variant-specific concepts directly.

pub mod classic;
pub mod validator;
pub mod whitehead;

pub use classic::ClassicRules;
pub use validator::RuleValidator;
pub use whitehead::WhiteheadRules;
