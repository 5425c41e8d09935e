//! Recoverable carousel errors.
//!
//! None of these are fatal. The engine logs them and hands them back so the
//! host can ignore or surface them as it sees fit.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("slide index {index} out of range (len {len})")]
    InvalidIndex { index: usize, len: usize },
    #[error("carousel has no slides")]
    EmptyCollection,
    #[error("autoplay interval must be positive, got {interval_ms} ms")]
    MisconfiguredInterval { interval_ms: u32 },
    #[error("invalid carousel config: {0}")]
    Config(String),
}
