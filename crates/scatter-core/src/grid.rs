// File: crates/scatter-core/src/grid.rs
// Summary: "Nice" tick generation for linear axes (1-2-5 step ladder).

/// Step between ticks for roughly `count` ticks over `[start, stop]`.
/// Positive values are the step itself; negative values `-k` mean a step of `1/k`.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Absolute tick step, always positive for a non-degenerate span.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let inc = tick_increment(lo, hi, count);
    if inc < 0.0 { -1.0 / inc } else { inc }
}

/// Round tick values inside `[start, stop]`, ordered like the inputs.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let inc = tick_increment(lo, hi, count);
    if !inc.is_finite() || inc == 0.0 {
        return Vec::new();
    }

    let mut out: Vec<f64> = if inc > 0.0 {
        let i0 = (lo / inc).ceil() as i64;
        let i1 = (hi / inc).floor() as i64;
        (i0..=i1).map(|i| i as f64 * inc).collect()
    } else {
        let k = -inc;
        let i0 = (lo * k).ceil() as i64;
        let i1 = (hi * k).floor() as i64;
        (i0..=i1).map(|i| i as f64 / k).collect()
    };
    if reverse {
        out.reverse();
    }
    out
}

/// Decimal places needed to print ticks spaced `step` apart.
pub fn tick_precision(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_domain_ten_ticks() {
        let t = ticks(0.0, 1.0, 10);
        assert_eq!(t.len(), 11);
        assert_eq!(t[3], 0.3);
        assert_eq!(t[10], 1.0);
    }

    #[test]
    fn income_like_domain() {
        let t = ticks(32_000.0, 82_000.0, 5);
        assert_eq!(t, vec![40_000.0, 50_000.0, 60_000.0, 70_000.0, 80_000.0]);
        assert_eq!(tick_precision(tick_step(32_000.0, 82_000.0, 5)), 0);
    }

    #[test]
    fn reversed_and_degenerate() {
        assert_eq!(ticks(10.0, 0.0, 5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
        assert_eq!(ticks(3.0, 3.0, 5), vec![3.0]);
        assert!(ticks(f64::NAN, 1.0, 5).is_empty());
    }

    #[test]
    fn fractional_precision() {
        assert_eq!(tick_precision(tick_step(9.0, 24.0, 10)), 0);
        assert_eq!(tick_precision(0.5), 1);
        assert_eq!(tick_precision(0.05), 2);
    }
}
