// SPDX-License-Identifier: LGPL-3.0-or-later

//! Configuration error reporting.
//!
//! All validation happens at configuration time. Out-of-range parameters
//! would drive the bilinear pre-warp (`tan(pi*fc/sr)`) toward a pole and
//! produce non-finite coefficients, so they are rejected here instead of
//! being allowed to poison the filter state.

use thiserror::Error;

/// A rejected filter or crossover configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Sample rate must be positive and finite.
    #[error("sample rate must be positive, got {0} Hz")]
    InvalidSampleRate(f32),

    /// Cutoff frequency must lie strictly between 0 and Nyquist.
    #[error("cutoff frequency {cutoff} Hz outside (0, {nyquist}) Hz")]
    CutoffOutOfRange {
        /// Offending cutoff frequency (Hz).
        cutoff: f32,
        /// Nyquist frequency for the configured sample rate (Hz).
        nyquist: f32,
    },

    /// Quality factor must be positive.
    #[error("quality factor must be positive, got {0}")]
    InvalidQ(f32),

    /// The low/mid crossover must sit below the mid/high crossover.
    #[error("low/mid cutoff {low_mid} Hz must be below mid/high cutoff {mid_high} Hz")]
    UnorderedCutoffs {
        /// Configured low/mid crossover frequency (Hz).
        low_mid: f32,
        /// Configured mid/high crossover frequency (Hz).
        mid_high: f32,
    },
}
