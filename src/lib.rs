// Library interface for raceboard
// This allows integration tests to access internal modules

pub mod dashboard;
pub mod errors;
pub mod report;
pub mod season;
pub mod writer;

// Re-export commonly used types
pub use dashboard::DashboardController;
pub use dashboard::view_model::{Screen, View};
pub use errors::RaceboardError;
pub use season::{Race, RaceResult, Season, StandingEntry};
