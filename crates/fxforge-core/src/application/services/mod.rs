//! Application services.

pub mod interview;
pub mod scaffold;

pub use interview::InterviewService;
pub use scaffold::{ScaffoldService, ScaffoldSummary};
