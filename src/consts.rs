// SPDX-License-Identifier: LGPL-3.0-or-later

//! Filter and PCM conversion constants.

/// Butterworth quality factor, 1/sqrt(2).
///
/// Applied uniformly to every crossover stage; gives a maximally flat
/// passband for each second-order section.
pub const BUTTERWORTH_Q: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Divisor for normalizing a signed 16-bit sample to [-1.0, ~1.0).
///
/// Deliberately 32768 (not 32767): -32768 maps to exactly -1.0 while
/// +32767 maps just below +1.0. The asymmetry against
/// [`FLOAT_TO_PCM_SCALE`] keeps encode/decode within one LSB.
pub const PCM_TO_FLOAT_SCALE: f32 = 32768.0;

/// Multiplier for converting normalized amplitude back to 16-bit range.
pub const FLOAT_TO_PCM_SCALE: f32 = 32767.0;

// Crossover frequency limits and defaults

/// Minimum usable cutoff frequency (Hz).
pub const CUTOFF_FREQ_MIN: f32 = 10.0;

/// Default low/mid crossover frequency (Hz).
pub const LOW_MID_CUTOFF_DFL: f32 = 500.0;

/// Default mid/high crossover frequency (Hz).
pub const MID_HIGH_CUTOFF_DFL: f32 = 5000.0;

/// Default sample rate (Hz).
pub const SAMPLE_RATE_DFL: f32 = 44100.0;

// Band gain range exposed to host UIs

/// Minimum per-band gain (dB).
pub const BAND_GAIN_MIN_DB: f32 = -12.0;

/// Maximum per-band gain (dB).
pub const BAND_GAIN_MAX_DB: f32 = 12.0;

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_pcm_scale_asymmetry() {
        assert_eq!(PCM_TO_FLOAT_SCALE, 32768.0);
        assert_eq!(FLOAT_TO_PCM_SCALE, 32767.0);
        assert!(PCM_TO_FLOAT_SCALE > FLOAT_TO_PCM_SCALE);
    }

    #[test]
    fn test_butterworth_q() {
        assert!((BUTTERWORTH_Q * BUTTERWORTH_Q - 0.5).abs() < 1e-7);
    }

    #[test]
    fn test_default_cutoffs_ordered() {
        assert!(CUTOFF_FREQ_MIN < LOW_MID_CUTOFF_DFL);
        assert!(LOW_MID_CUTOFF_DFL < MID_HIGH_CUTOFF_DFL);
        assert!(MID_HIGH_CUTOFF_DFL < SAMPLE_RATE_DFL / 2.0);
    }

    #[test]
    fn test_gain_range_symmetric() {
        assert_eq!(BAND_GAIN_MIN_DB, -BAND_GAIN_MAX_DB);
    }
}
