// SPDX-License-Identifier: LGPL-3.0-or-later

//! Biquad coefficient calculation via the bilinear transform.
//!
//! Coefficients are computed in the Butterworth prototype form: the analog
//! cutoff is pre-warped with `K = tan(pi * fc / sr)` and the section is
//! normalized so the leading feedback coefficient is 1. The resulting
//! difference equation is
//!
//! ```text
//! y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] - a1*y[n-1] - a2*y[n-2]
//! ```
//!
//! `a1` and `a2` are stored with their textbook sign; the processing loop
//! subtracts them.

use std::f32::consts::PI;

use crate::error::ConfigError;

/// Supported filter kinds.
///
/// Band-pass, shelving, and notch responses would extend this set with
/// their own coefficient formulas; the crossover only needs these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Second-order low-pass filter.
    Lowpass,
    /// Second-order high-pass filter.
    Highpass,
}

/// Normalized coefficients for one second-order section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoeffs {
    pub b0: f32,
    pub b1: f32,
    pub b2: f32,
    pub a1: f32,
    pub a2: f32,
}

impl Default for BiquadCoeffs {
    /// Identity coefficients: the section passes signal through unchanged.
    fn default() -> Self {
        Self {
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
        }
    }
}

/// Validate filter parameters before coefficient calculation.
///
/// Rejects configurations that would push the bilinear pre-warp toward a
/// tangent pole and yield non-finite coefficients:
///
/// - `sample_rate` must be positive and finite
/// - `cutoff` must lie strictly between 0 and Nyquist (`sample_rate / 2`)
/// - `q` must be positive
pub fn validate_filter_params(sample_rate: f32, cutoff: f32, q: f32) -> Result<(), ConfigError> {
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(ConfigError::InvalidSampleRate(sample_rate));
    }
    let nyquist = sample_rate / 2.0;
    if !(cutoff.is_finite() && cutoff > 0.0 && cutoff < nyquist) {
        return Err(ConfigError::CutoffOutOfRange { cutoff, nyquist });
    }
    if !(q.is_finite() && q > 0.0) {
        return Err(ConfigError::InvalidQ(q));
    }
    Ok(())
}

/// Calculate biquad coefficients for the given filter kind.
///
/// Bilinear-transform Butterworth form:
///
/// ```text
/// K = tan(pi * cutoff / sample_rate)
/// norm = 1 / (1 + K/Q + K^2)
/// Lowpass:  b0 = K^2 * norm, b1 = 2*b0,  b2 = b0
/// Highpass: b0 = norm,       b1 = -2*b0, b2 = b0
/// (both):   a1 = 2*(K^2 - 1) * norm, a2 = (1 - K/Q + K^2) * norm
/// ```
///
/// Parameters must satisfy [`validate_filter_params`]; this function is
/// pure and does not re-check them. [`BiquadSection::configure`] performs
/// the validation for callers.
///
/// [`BiquadSection::configure`]: crate::filters::biquad::BiquadSection::configure
pub fn calc_biquad_coeffs(
    kind: FilterKind,
    sample_rate: f32,
    cutoff: f32,
    q: f32,
) -> BiquadCoeffs {
    let k = (PI * cutoff / sample_rate).tan();
    let k2 = k * k;
    let norm = 1.0 / (1.0 + k / q + k2);

    let (b0, b1) = match kind {
        FilterKind::Lowpass => {
            let b0 = k2 * norm;
            (b0, 2.0 * b0)
        }
        FilterKind::Highpass => {
            let b0 = norm;
            (b0, -2.0 * b0)
        }
    };

    BiquadCoeffs {
        b0,
        b1,
        b2: b0,
        a1: 2.0 * (k2 - 1.0) * norm,
        a2: (1.0 - k / q + k2) * norm,
    }
}
