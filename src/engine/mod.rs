pub mod booking;
pub mod compatibility;
pub mod matching;
pub mod scoring;
