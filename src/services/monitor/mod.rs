pub mod engine;
pub mod state;

pub use engine::{HomeworkMonitor, PollError, PollOutcome};
pub use state::PollState;
