//! Motion coaching: the logic the UI's pose coach wraps around an external
//! pose estimator.
//!
//! The estimator, camera, and speech output stay outside this crate. What
//! lives here is pure: landmarks in, [`pose::PoseSignals`] out, plus the task
//! library, hold debouncing, and session statistics that consume them.

pub mod pose;
pub mod session;
pub mod tasks;

pub use pose::{Landmark, PoseError, PoseSignals};
pub use session::{HoldTracker, SessionStats};
pub use tasks::{CoachTask, PoseCheck};
