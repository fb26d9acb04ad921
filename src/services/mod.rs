//! Application services orchestrating the tracker's use cases.

mod session;
mod tracker;

pub use session::{SessionError, SessionResult, SessionService};
pub use tracker::{TaskOverview, TrackerError, TrackerResult, TrackerService};
