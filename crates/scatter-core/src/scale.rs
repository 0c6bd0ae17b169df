// File: crates/scatter-core/src/scale.rs
// Summary: Linear data-to-pixel scale and the padded extent used for axis domains.

use crate::grid::ticks;

/// Lower extent is scaled by this factor when building a domain.
pub const DOMAIN_PAD_LOW: f64 = 0.90;
/// Upper extent is scaled by this factor when building a domain.
pub const DOMAIN_PAD_HIGH: f64 = 1.10;

/// Maps `domain` linearly onto `range`. Either may be reversed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A degenerate domain maps every value to the middle of the range.
    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span.is_nan() {
            f64::NAN
        } else if span == 0.0 {
            0.5
        } else {
            (v - d0) / span
        };
        r0 + t * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let t = if span == 0.0 { 0.5 } else { (px - r0) / span };
        d0 + t * (d1 - d0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

/// Minimum and maximum of `values`, skipping `NaN`.
/// Returns `None` when no value qualifies.
pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values.into_iter().filter(|v| !v.is_nan()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Axis domain `[0.9 * min, 1.1 * max]`. `NaN` bounds when no value qualifies.
///
/// The factors are applied regardless of sign, so a negative minimum is
/// pushed toward zero rather than away from it.
pub fn padded_domain<I: IntoIterator<Item = f64>>(values: I) -> (f64, f64) {
    match extent(values) {
        Some((lo, hi)) => (lo * DOMAIN_PAD_LOW, hi * DOMAIN_PAD_HIGH),
        None => (f64::NAN, f64::NAN),
    }
}
