//! Data transfer objects for the application layer.

mod summary_dto;

pub use summary_dto::{PerDoorSummary, SizeSummary};
