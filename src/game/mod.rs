//! Game session and word validation

mod rejection;
mod session;
pub mod validation;

pub use rejection::Rejection;
pub use session::{GameSession, SessionState, Submission};
pub use validation::{Rules, Verdict};
