pub mod finalization;
pub mod rewards;
pub mod scoring;
