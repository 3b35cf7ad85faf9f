//! Error types for STFT configuration and computation

use thiserror::Error;

/// Errors returned by configuration validation and STFT computation.
///
/// All failures are detected synchronously at the call that introduces
/// them; nothing is retried internally.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StftError {
    #[error("window length {window_length} exceeds signal length {signal_length}")]
    SignalTooShort {
        window_length: usize,
        signal_length: usize,
    },

    #[error("hop size must be at least 1")]
    InvalidHop,

    #[error("configuration yields no complete frames")]
    InvalidFrameCount,

    #[error("window length must be at least 2, got {length}")]
    InvalidWindowLength { length: usize },

    #[error("input signal has {actual} samples, expected at least {expected}")]
    InputTooShort { expected: usize, actual: usize },

    #[error("output matrix has shape {actual:?}, expected {expected:?}")]
    OutputShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}
