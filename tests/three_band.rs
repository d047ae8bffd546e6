// SPDX-License-Identifier: LGPL-3.0-or-later
//
// End-to-end tests for the three-band crossover: streaming continuity,
// determinism, PCM round-trip behavior, and band routing on real blocks.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use triband_eq::consts::{FLOAT_TO_PCM_SCALE, PCM_TO_FLOAT_SCALE};
use triband_eq::{BandGains, CrossoverConfig, ThreeBandCrossover};

const SR: f32 = 44100.0;

fn configured() -> ThreeBandCrossover {
    let mut eq = ThreeBandCrossover::new();
    eq.setup(CrossoverConfig::new(SR, 500.0, 5000.0)).unwrap();
    eq
}

/// Deterministic PCM noise block.
fn noise_block(len: usize, seed: u64) -> Vec<i16> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-24000..=24000)).collect()
}

fn sine_block(len: usize, freq: f32, amplitude: f32) -> Vec<i16> {
    (0..len)
        .map(|i| {
            let t = i as f32 / SR;
            ((2.0 * std::f32::consts::PI * freq * t).sin() * amplitude) as i16
        })
        .collect()
}

fn rms(samples: &[i16]) -> f64 {
    (samples.iter().map(|&s| (s as f64).powi(2)).sum::<f64>() / samples.len() as f64).sqrt()
}

#[test]
fn identical_runs_are_bit_identical() {
    let input = noise_block(4096, 0x5EED);

    let mut out1 = input.clone();
    configured().process_block(&mut out1, BandGains::new(2.0, -1.0, 4.0));

    let mut out2 = input.clone();
    configured().process_block(&mut out2, BandGains::new(2.0, -1.0, 4.0));

    assert_eq!(out1, out2);
}

#[test]
fn reference_scenario_is_deterministic_and_in_range() {
    // 44.1 kHz, crossovers at 500/5000 Hz, flat gains, extreme samples.
    let input: Vec<i16> = vec![0, 1000, -1000, i16::MAX, i16::MIN];

    let mut out1 = input.clone();
    configured().process_block(&mut out1, BandGains::default());

    let mut out2 = input.clone();
    configured().process_block(&mut out2, BandGains::default());

    assert_eq!(out1, out2, "fresh instances must agree bit for bit");
    // The inverse scaling never reaches i16::MIN.
    assert!(out1.iter().all(|&s| s > i16::MIN));
}

#[test]
fn split_processing_matches_whole_block() {
    let input = noise_block(4096, 0xBEEF);
    let gains = BandGains::new(3.0, 0.0, -2.0);

    let mut whole = input.clone();
    configured().process_block(&mut whole, gains);

    let mut split = input.clone();
    let mut eq = configured();
    for chunk in split.chunks_mut(1024) {
        eq.process_block(chunk, gains);
    }

    assert_eq!(whole, split, "chunked streaming must match one-shot processing");
}

#[test]
fn gain_change_midstream_preserves_filter_continuity() {
    // Gain is applied after the filters, so switching gains between
    // blocks must leave the filter history exactly as if the final gains
    // had been used all along.
    let input = noise_block(8192, 0xCAFE);
    let (a, b) = input.split_at(4096);
    let g1 = BandGains::new(6.0, -3.0, 0.0);
    let g2 = BandGains::new(-2.0, 1.0, 5.0);

    let mut eq_switched = configured();
    let mut a_switched = a.to_vec();
    eq_switched.process_block(&mut a_switched, g1);
    let mut b_switched = b.to_vec();
    eq_switched.process_block(&mut b_switched, g2);

    let mut eq_constant = configured();
    let mut a_constant = a.to_vec();
    eq_constant.process_block(&mut a_constant, g2);
    let mut b_constant = b.to_vec();
    eq_constant.process_block(&mut b_constant, g2);

    assert_eq!(
        b_switched, b_constant,
        "second-half output must not depend on the first-half gains"
    );
}

#[test]
fn pcm_round_trip_deviates_at_most_one_lsb() {
    // Forward /32768 and inverse *32767 scaling: re-encoding any decoded
    // sample lands within one step of the original.
    for s in i16::MIN..=i16::MAX {
        let decoded = f32::from(s) / PCM_TO_FLOAT_SCALE;
        let re = (decoded.clamp(-1.0, 1.0) * FLOAT_TO_PCM_SCALE) as i16;
        assert!(
            (i32::from(s) - i32::from(re)).abs() <= 1,
            "round trip of {s} gave {re}"
        );
    }
}

#[test]
fn silence_stays_silent_across_many_blocks() {
    let mut eq = configured();
    for _ in 0..16 {
        let mut block = vec![0i16; 512];
        eq.process_block(&mut block, BandGains::new(12.0, 12.0, 12.0));
        assert!(block.iter().all(|&s| s == 0));
    }
}

#[test]
fn reconfiguring_discards_history() {
    let mut eq = configured();
    let mut noisy = noise_block(2048, 0xF00D);
    eq.process_block(&mut noisy, BandGains::default());

    // New band layout; history is gone, so silence in means silence out.
    eq.setup(CrossoverConfig::new(48000.0, 250.0, 8000.0)).unwrap();
    let mut block = vec![0i16; 512];
    eq.process_block(&mut block, BandGains::default());
    assert!(block.iter().all(|&s| s == 0));
}

#[test]
fn reset_filters_resumes_like_a_fresh_instance() {
    let block = noise_block(2048, 0xABCD);

    let mut used = configured();
    let mut warmup = noise_block(2048, 0x1234);
    used.process_block(&mut warmup, BandGains::default());
    used.reset_filters();
    let mut out_used = block.clone();
    used.process_block(&mut out_used, BandGains::default());

    let mut out_fresh = block.clone();
    configured().process_block(&mut out_fresh, BandGains::default());

    assert_eq!(out_used, out_fresh);
}

#[test]
fn high_band_gain_controls_treble_tone() {
    let n = 16384;
    let tone = sine_block(n, 10000.0, 12000.0);
    let start = n / 2;

    let mut kept = tone.clone();
    configured().process_block(&mut kept, BandGains::new(-60.0, -60.0, 0.0));

    let mut cut = tone.clone();
    configured().process_block(&mut cut, BandGains::new(0.0, 0.0, -60.0));

    let r_kept = rms(&kept[start..]);
    let r_cut = rms(&cut[start..]);
    assert!(
        r_kept > r_cut * 5.0,
        "10 kHz tone should live in the high band: kept={r_kept}, cut={r_cut}"
    );
}

#[test]
fn heavy_boost_saturates_without_wrapping() {
    let mut eq = configured();
    let mut block = sine_block(8192, 100.0, 30000.0);
    eq.process_block(&mut block, BandGains::new(24.0, 24.0, 24.0));

    // Clamped conversion caps at +/-32767 and never wraps around.
    assert!(block.iter().all(|&s| s > i16::MIN));
    assert!(block.iter().any(|&s| s == i16::MAX || s == -i16::MAX));
}
