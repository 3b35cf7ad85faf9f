//! STFT configuration and engine

pub mod config;
pub mod engine;

pub use config::{StftConfig, StftMode};
pub use engine::StftEngine;
