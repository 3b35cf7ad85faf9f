//! Spectral analysis helpers for spectrogram consumers
//!
//! Pure functions over spectrogram rows: magnitude extraction, dB
//! conversion, peak location, and bin-to-frequency mapping.

use num_complex::Complex32;

/// Magnitude spectrum |X[k]| of one spectrogram row
pub fn magnitude_spectrum(row: &[Complex32]) -> Vec<f32> {
    row.iter().map(|bin| bin.norm()).collect()
}

/// Magnitude spectrum in dB: `20*log10(|X[k]| / reference)`
pub fn magnitude_spectrum_db(row: &[Complex32], reference: f32) -> Vec<f32> {
    row.iter()
        .map(|bin| {
            let mag = bin.norm().max(1e-10); // avoid log(0)
            20.0 * (mag / reference).log10()
        })
        .collect()
}

/// Index of the strongest bin, or `None` for an empty row
pub fn peak_bin(magnitudes: &[f32]) -> Option<usize> {
    magnitudes
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(bin, _)| bin)
}

/// Center frequency in Hz of bin `bin` at the given transform size
pub fn bin_to_hz(bin: usize, transform_size: usize, sample_rate: f32) -> f32 {
    bin as f32 * sample_rate / transform_size as f32
}
