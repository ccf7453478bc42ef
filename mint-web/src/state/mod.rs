//! Page state: reactive sessions and the simulated live models

pub mod claim;
pub mod counter;
pub mod dashboard;
pub mod ticker;
pub mod wallet;
