//! Countdown state models.
//!
//! - [`CountdownState`]: the descending counter, 5 down to 1.
//! - [`Stage`]: the linear state machine a run walks through, from the banner
//!   to termination.

mod stage;
mod state;

pub use stage::*;
pub use state::*;
