// SPDX-License-Identifier: LGPL-3.0-or-later

//! Three-band crossover and in-place PCM block processor.
//!
//! Splits a mono signal into low, mid, and high bands using cascaded
//! Butterworth biquad sections, applies an independent linear gain to
//! each band, and sums the bands back into one signal.
//!
//! # Topology
//!
//! Eight second-order sections, fixed Q = 1/sqrt(2) per stage:
//!
//! - **Low path**: 2 cascaded LP at the low/mid cutoff (4th-order roll-off)
//! - **High path**: 2 cascaded HP at the mid/high cutoff
//! - **Mid path**: 2 cascaded LP at the mid/high cutoff, then 2 cascaded
//!   HP at the low/mid cutoff — a band-pass by composition
//!
//! The crossover is stateful across calls: consecutive blocks of one
//! stream must be fed to the same instance in temporal order. One
//! instance per stream; calls into an instance must be serialized, and
//! `setup` must not interleave with `process_block` across threads.

use log::{debug, trace};

use crate::consts::{
    BAND_GAIN_MAX_DB, BAND_GAIN_MIN_DB, BUTTERWORTH_Q, FLOAT_TO_PCM_SCALE,
    LOW_MID_CUTOFF_DFL, MID_HIGH_CUTOFF_DFL, PCM_TO_FLOAT_SCALE, SAMPLE_RATE_DFL,
};
use crate::error::ConfigError;
use crate::filters::biquad::BiquadSection;
use crate::filters::coeffs::FilterKind;
use crate::units::db_to_gain;

/// Crossover band configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossoverConfig {
    /// Sample rate in Hz.
    pub sample_rate: f32,
    /// Low/mid crossover frequency in Hz.
    pub low_mid_hz: f32,
    /// Mid/high crossover frequency in Hz.
    pub mid_high_hz: f32,
}

impl Default for CrossoverConfig {
    /// 44.1 kHz with crossovers at 500 Hz and 5 kHz.
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE_DFL,
            low_mid_hz: LOW_MID_CUTOFF_DFL,
            mid_high_hz: MID_HIGH_CUTOFF_DFL,
        }
    }
}

impl CrossoverConfig {
    /// Create a configuration from sample rate and the two crossover
    /// frequencies.
    pub fn new(sample_rate: f32, low_mid_hz: f32, mid_high_hz: f32) -> Self {
        Self {
            sample_rate,
            low_mid_hz,
            mid_high_hz,
        }
    }

    /// Check `0 < low_mid < mid_high < sample_rate / 2`.
    ///
    /// Violations would produce division singularities in the coefficient
    /// derivation, so they are rejected before any section is touched.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(ConfigError::InvalidSampleRate(self.sample_rate));
        }
        let nyquist = self.sample_rate / 2.0;
        for &cutoff in &[self.low_mid_hz, self.mid_high_hz] {
            if !(cutoff.is_finite() && cutoff > 0.0 && cutoff < nyquist) {
                return Err(ConfigError::CutoffOutOfRange { cutoff, nyquist });
            }
        }
        if self.low_mid_hz >= self.mid_high_hz {
            return Err(ConfigError::UnorderedCutoffs {
                low_mid: self.low_mid_hz,
                mid_high: self.mid_high_hz,
            });
        }
        Ok(())
    }
}

/// Per-band gains in decibels, supplied fresh on every block.
///
/// Gains are converted to linear multipliers at call time and never
/// persisted, so changing them between blocks cannot disturb filter
/// history.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BandGains {
    /// Low band gain in dB.
    pub low_db: f32,
    /// Mid band gain in dB.
    pub mid_db: f32,
    /// High band gain in dB.
    pub high_db: f32,
}

impl BandGains {
    /// Create a gain triple from per-band dB values.
    pub const fn new(low_db: f32, mid_db: f32, high_db: f32) -> Self {
        Self {
            low_db,
            mid_db,
            high_db,
        }
    }

    /// Clamp each gain into the ±12 dB range used by host UIs.
    ///
    /// `process_block` itself accepts unrestricted gains; this is an
    /// opt-in convenience for hosts mapping slider positions.
    pub fn clamped(self) -> Self {
        Self {
            low_db: self.low_db.clamp(BAND_GAIN_MIN_DB, BAND_GAIN_MAX_DB),
            mid_db: self.mid_db.clamp(BAND_GAIN_MIN_DB, BAND_GAIN_MAX_DB),
            high_db: self.high_db.clamp(BAND_GAIN_MIN_DB, BAND_GAIN_MAX_DB),
        }
    }

    /// Convert to linear multipliers (low, mid, high).
    fn to_linear(self) -> (f32, f32, f32) {
        (
            db_to_gain(self.low_db),
            db_to_gain(self.mid_db),
            db_to_gain(self.high_db),
        )
    }
}

/// Three-band crossover equalizer over eight biquad sections.
///
/// Created unconfigured: every section starts with identity coefficients,
/// so processing before [`setup`](ThreeBandCrossover::setup) passes each
/// path through unfiltered. Call `setup` to derive coefficients; the
/// instance then persists across block calls, accumulating filter history.
///
/// # Examples
///
/// ```ignore
/// use triband_eq::{BandGains, CrossoverConfig, ThreeBandCrossover};
///
/// let mut eq = ThreeBandCrossover::new();
/// eq.setup(CrossoverConfig::new(44100.0, 500.0, 5000.0))?;
///
/// let mut block: Vec<i16> = vec![0; 1024];
/// eq.process_block(&mut block, BandGains::new(3.0, 0.0, -2.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThreeBandCrossover {
    /// Low path: 2 cascaded LP sections at the low/mid cutoff.
    low: [BiquadSection; 2],
    /// High path: 2 cascaded HP sections at the mid/high cutoff.
    high: [BiquadSection; 2],
    /// Mid path: 2 LP at the mid/high cutoff, then 2 HP at the low/mid cutoff.
    mid: [BiquadSection; 4],
    /// Last accepted configuration; `None` until the first `setup`.
    config: Option<CrossoverConfig>,
}

impl ThreeBandCrossover {
    /// Create a new, unconfigured crossover.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure all eight sections and clear their histories.
    ///
    /// Rejects the configuration without touching any section state if it
    /// fails [`CrossoverConfig::validate`]. On success the previous
    /// configuration and all filter history are discarded.
    pub fn setup(&mut self, config: CrossoverConfig) -> Result<(), ConfigError> {
        config.validate()?;

        let sr = config.sample_rate;
        let q = BUTTERWORTH_Q;

        for section in &mut self.low {
            section.configure(FilterKind::Lowpass, sr, config.low_mid_hz, q)?;
        }
        for section in &mut self.high {
            section.configure(FilterKind::Highpass, sr, config.mid_high_hz, q)?;
        }
        for section in &mut self.mid[..2] {
            section.configure(FilterKind::Lowpass, sr, config.mid_high_hz, q)?;
        }
        for section in &mut self.mid[2..] {
            section.configure(FilterKind::Highpass, sr, config.low_mid_hz, q)?;
        }

        debug!(
            "crossover configured: sr={} Hz, low/mid={} Hz, mid/high={} Hz",
            sr, config.low_mid_hz, config.mid_high_hz
        );
        self.config = Some(config);
        Ok(())
    }

    /// Return the last accepted configuration, if any.
    pub fn config(&self) -> Option<&CrossoverConfig> {
        self.config.as_ref()
    }

    /// Clear all eight section histories; coefficients are untouched.
    ///
    /// For stream discontinuities (seek, pause/resume, stream switch)
    /// where the band configuration is unchanged.
    pub fn reset_filters(&mut self) {
        for section in self
            .low
            .iter_mut()
            .chain(self.high.iter_mut())
            .chain(self.mid.iter_mut())
        {
            section.reset();
        }
        trace!("crossover filter state cleared");
    }

    /// Process a block of signed 16-bit PCM samples in place.
    ///
    /// Each sample is normalized by 1/32768, run through all three paths
    /// in strict forward order, gained per band, summed, clamped to
    /// [-1.0, 1.0], scaled by 32767, and written back. One temporary
    /// float buffer is allocated per call; the per-sample loop itself
    /// does not allocate.
    ///
    /// The block is always fully processed: invalid configurations are
    /// rejected earlier, at [`setup`](ThreeBandCrossover::setup).
    pub fn process_block(&mut self, samples: &mut [i16], gains: BandGains) {
        let (gain_low, gain_mid, gain_high) = gains.to_linear();

        let mut buf: Vec<f32> = samples
            .iter()
            .map(|&s| f32::from(s) / PCM_TO_FLOAT_SCALE)
            .collect();

        for sample in buf.iter_mut() {
            let x = *sample;

            let low0 = self.low[0].process_sample(x);
            let low = self.low[1].process_sample(low0);
            let high0 = self.high[0].process_sample(x);
            let high = self.high[1].process_sample(high0);
            let mid = {
                let mid0 = self.mid[0].process_sample(x);
                let lp = self.mid[1].process_sample(mid0);
                let mid2 = self.mid[2].process_sample(lp);
                self.mid[3].process_sample(mid2)
            };

            *sample = low * gain_low + mid * gain_mid + high * gain_high;
        }

        for (dst, &src) in samples.iter_mut().zip(buf.iter()) {
            *dst = (src.clamp(-1.0, 1.0) * FLOAT_TO_PCM_SCALE) as i16;
        }
    }
}
