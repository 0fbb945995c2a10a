//! Game rules and session state
//!
//! The validator is a pure function of the submission and a read-only view
//! of the round; the session applies its verdicts.

mod session;
pub mod validator;

pub use session::{Session, SessionEvent, SessionState};
pub use validator::{RoundView, validate};
