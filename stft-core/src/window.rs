//! Analysis window generation for spectral analysis
//!
//! Windows taper each frame before the FFT to reduce spectral leakage.

use std::f32::consts::PI;

use crate::error::StftError;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    /// Hanning window: w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    /// Mainlobe width: 8π/M, sidelobe attenuation: ~44 dB
    Hanning,

    /// Hamming window: w[n] = 25/46 - (21/46)*cos(2πn/(M-1))
    /// Mainlobe width: 8π/M, sidelobe attenuation: ~53 dB
    Hamming,

    /// Blackman window, exact three-term coefficients
    /// a0 = 7938/18608, a1 = 9240/18608, a2 = 1430/18608
    Blackman,

    /// Blackman-Harris four-term window
    /// Sidelobe attenuation: ~92 dB
    BlackmanHarris,
}

/// An immutable table of window coefficients.
///
/// Generated once per engine at the transform size and never mutated
/// afterwards. Identical `(length, kind)` inputs always yield bit-identical
/// tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    kind: WindowKind,
    values: Vec<f32>,
}

impl Window {
    /// Generate window coefficients.
    ///
    /// Fails with [`StftError::InvalidWindowLength`] for `length < 2`, since
    /// every formula divides by `length - 1`.
    pub fn generate(length: usize, kind: WindowKind) -> Result<Self, StftError> {
        if length < 2 {
            return Err(StftError::InvalidWindowLength { length });
        }

        let denom = (length - 1) as f32;
        let mut values = Vec::with_capacity(length);

        match kind {
            WindowKind::Hanning => {
                for n in 0..length {
                    let angle = 2.0 * PI * n as f32 / denom;
                    values.push(0.5 - 0.5 * angle.cos());
                }
            }

            WindowKind::Hamming => {
                // Exact rational form of the classic 0.54/0.46 pair
                for n in 0..length {
                    let angle = 2.0 * PI * n as f32 / denom;
                    values.push(25.0 / 46.0 - (21.0 / 46.0) * angle.cos());
                }
            }

            WindowKind::Blackman => {
                let (a0, a1, a2) = (
                    7938.0 / 18608.0,
                    9240.0 / 18608.0,
                    1430.0 / 18608.0,
                );
                for n in 0..length {
                    let angle = 2.0 * PI * n as f32 / denom;
                    values.push(a0 - a1 * angle.cos() + a2 * (2.0 * angle).cos());
                }
            }

            WindowKind::BlackmanHarris => {
                let (a0, a1, a2, a3) = (0.35875, 0.48829, 0.14128, 0.01168);
                for n in 0..length {
                    let angle = 2.0 * PI * n as f32 / denom;
                    values.push(
                        a0 - a1 * angle.cos() + a2 * (2.0 * angle).cos()
                            - a3 * (3.0 * angle).cos(),
                    );
                }
            }
        }

        Ok(Self { kind, values })
    }

    /// Window function kind
    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    /// Number of coefficients
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coefficient table, in index order
    pub fn coefficients(&self) -> &[f32] {
        &self.values
    }
}
