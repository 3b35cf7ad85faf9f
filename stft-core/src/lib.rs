//! STFT Core - Short-Time Fourier Transform engine
//!
//! Slices a real-valued, fixed-length signal into overlapping frames,
//! windows each frame, runs a forward real FFT, and packs the per-frame
//! spectra into a caller-allocated `frame_count x transform_size/2`
//! complex matrix.

pub mod analysis;
pub mod error;
pub mod stft;
pub mod window;

pub use error::StftError;
pub use stft::{StftConfig, StftEngine, StftMode};
pub use window::{Window, WindowKind};

pub use num_complex::Complex32;
