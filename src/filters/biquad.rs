// SPDX-License-Identifier: LGPL-3.0-or-later

//! Stateful second-order (biquad) filter section.
//!
//! A section owns one set of [`BiquadCoeffs`] and a two-sample history of
//! inputs and outputs (direct form I). Processing is per sample so the
//! crossover can interleave its paths in strict temporal order.

use crate::error::ConfigError;
use crate::filters::coeffs::{calc_biquad_coeffs, validate_filter_params, BiquadCoeffs, FilterKind};

/// Two-sample input/output history of one biquad section.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterState {
    /// Previous input x[n-1].
    pub x1: f32,
    /// Input before that, x[n-2].
    pub x2: f32,
    /// Previous output y[n-1].
    pub y1: f32,
    /// Output before that, y[n-2].
    pub y2: f32,
}

/// A single stateful second-order IIR filter section.
///
/// Freshly constructed sections hold identity coefficients and pass
/// signal through unchanged; call [`configure`](BiquadSection::configure)
/// to derive real coefficients. Two sections with identical coefficients
/// but different histories produce different output, so history is part
/// of a section's identity.
///
/// # Examples
///
/// ```ignore
/// use triband_eq::filters::biquad::BiquadSection;
/// use triband_eq::filters::coeffs::FilterKind;
///
/// let mut section = BiquadSection::new();
/// section.configure(FilterKind::Lowpass, 44100.0, 500.0, 0.707)?;
/// let y = section.process_sample(0.25);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BiquadSection {
    coeffs: BiquadCoeffs,
    state: FilterState,
}

impl BiquadSection {
    /// Create a new section with identity coefficients and zero history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive coefficients for the given parameters and clear the history.
    ///
    /// Any prior history is discarded: reconfiguration always starts the
    /// section from silence. Returns an error if the parameters fail
    /// [`validate_filter_params`]; on error the section is left unchanged.
    pub fn configure(
        &mut self,
        kind: FilterKind,
        sample_rate: f32,
        cutoff: f32,
        q: f32,
    ) -> Result<(), ConfigError> {
        validate_filter_params(sample_rate, cutoff, q)?;
        self.coeffs = calc_biquad_coeffs(kind, sample_rate, cutoff, q);
        self.reset();
        Ok(())
    }

    /// Process one sample through the section.
    ///
    /// Direct-form recursive update, then the output is clamped to
    /// [-1.0, 1.0] before being stored in the history and returned. The
    /// clamp bounds transient instability; it is not a substitute for
    /// parameter validation.
    #[inline]
    pub fn process_sample(&mut self, x: f32) -> f32 {
        let c = &self.coeffs;
        let s = &mut self.state;

        let y = c.b0 * x + c.b1 * s.x1 + c.b2 * s.x2 - c.a1 * s.y1 - c.a2 * s.y2;
        let y = y.clamp(-1.0, 1.0);

        s.x2 = s.x1;
        s.x1 = x;
        s.y2 = s.y1;
        s.y1 = y;

        y
    }

    /// Zero the history; coefficients are untouched.
    pub fn reset(&mut self) {
        self.state = FilterState::default();
    }

    /// Return the current coefficients.
    pub fn coefficients(&self) -> BiquadCoeffs {
        self.coeffs
    }

    /// Return the current history.
    pub fn state(&self) -> FilterState {
        self.state
    }
}
