//! Core domain types and scoring logic.

pub mod price;
pub mod snapshot;
pub mod indicator;
pub mod ladder;
pub mod score;
pub mod diagnostics;
pub mod technical;
pub mod fundamental;
pub mod recommendation;
pub mod company;
pub mod report;
pub mod analysis;
pub mod format;
pub mod error;
