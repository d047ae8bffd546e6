// SPDX-License-Identifier: LGPL-3.0-or-later

//! Biquad coefficient calculation and second-order filter sections.
//!
//! Coefficients use the convention where the leading feedback coefficient
//! is normalized to 1 and the difference equation subtracts the feedback
//! terms: `y = b0*x + b1*x1 + b2*x2 - a1*y1 - a2*y2`.

pub mod biquad;
pub mod coeffs;
