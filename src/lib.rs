// SPDX-License-Identifier: LGPL-3.0-or-later

//! # triband-eq
//!
//! Three-band IIR equalizer core for real-time 16-bit PCM playback.
//!
//! The engine splits a mono PCM stream into low, mid, and high frequency
//! bands with a crossover network of cascaded Butterworth biquad sections,
//! applies an independent gain to each band, and recombines the bands into
//! the original buffer in place. It is built for per-block use inside a
//! live audio pipeline: bounded per-sample work, a single temporary buffer
//! per call, and deterministic output for identical state and input.
//!
//! - [`filters::coeffs`]: biquad coefficient calculation (bilinear
//!   transform, Butterworth form)
//! - [`filters::biquad`]: a single stateful second-order section
//! - [`crossover`]: the three-band crossover and in-place block processor
//!
//! ## Usage
//!
//! ```ignore
//! use triband_eq::{BandGains, CrossoverConfig, ThreeBandCrossover};
//!
//! let mut eq = ThreeBandCrossover::new();
//! eq.setup(CrossoverConfig::new(44100.0, 500.0, 5000.0))?;
//!
//! let mut block: Vec<i16> = decode_next_block();
//! eq.process_block(&mut block, BandGains::new(3.0, 0.0, -2.0));
//! ```
//!
//! A crossover instance carries filter history across calls: consecutive
//! blocks of one stream must go through the same instance in order. Use
//! one instance per stream; the type is not safe for concurrent calls.

pub mod consts;
pub mod crossover;
pub mod error;
pub mod filters;
pub mod units;

pub use crossover::{BandGains, CrossoverConfig, ThreeBandCrossover};
pub use error::ConfigError;
