use crate::config::{
    DEBT_CLAMP_MAX, DISCRETENESS_MAX, DISCRETENESS_MIN, DISCRETENESS_SAMPLES, RATE_MAX, RATE_MIN,
    RATE_SAMPLES, VELOCITY_GUARD,
};

/// Lorentz factor 1/sqrt(1 - v^2).
///
/// Velocities at or beyond the invariant speed are replaced by
/// VELOCITY_GUARD so the factor stays finite. Callers that want an error
/// instead must range-check before calling; the interactive view never
/// does, it clamps and keeps drawing.
pub fn lorentz_factor(velocity: f64) -> f64 {
    let v = if velocity.abs() >= 1.0 {
        VELOCITY_GUARD
    } else {
        velocity
    };
    1.0 / (1.0 - v * v).sqrt()
}

/// Debt at a single (rate, discreteness) point in the boosted frame:
/// D = |kappa| * (rate/gamma)^2 * (discreteness*gamma)^2, unclamped.
pub fn debt_at(kappa: f64, gamma: f64, rate: f64, discreteness: f64) -> f64 {
    let rate_boosted = rate / gamma;
    let discreteness_boosted = discreteness * gamma;
    kappa.abs() * rate_boosted * rate_boosted * discreteness_boosted * discreteness_boosted
}

/// Debt landscape over the fixed (rate, discreteness) mesh.
///
/// Row-major: row index walks the discreteness axis, column index walks
/// the rate axis. Replaced wholesale on every parameter change.
pub struct DebtLandscape {
    pub values: Vec<f64>,
    pub gamma: f64,
}

impl DebtLandscape {
    /// Evaluate the landscape for a curvature/velocity pair.
    ///
    /// The mesh is the full outer product of the two fixed axes; the
    /// current slider selection never narrows it. Every cell is clamped
    /// to [0, DEBT_CLAMP_MAX] to bound the color scale.
    pub fn compute(kappa: f64, velocity: f64) -> Self {
        let gamma = lorentz_factor(velocity);

        let rates = sample_axis(RATE_MIN, RATE_MAX, RATE_SAMPLES);
        let discretenesses =
            sample_axis(DISCRETENESS_MIN, DISCRETENESS_MAX, DISCRETENESS_SAMPLES);

        let mut values = Vec::with_capacity(rates.len() * discretenesses.len());
        for &n in &discretenesses {
            for &rate in &rates {
                let debt = debt_at(kappa, gamma, rate, n);
                values.push(debt.clamp(0.0, DEBT_CLAMP_MAX));
            }
        }

        Self { values, gamma }
    }

    pub fn width(&self) -> u32 {
        RATE_SAMPLES
    }

    pub fn height(&self) -> u32 {
        DISCRETENESS_SAMPLES
    }

    /// Cell value by (rate index, discreteness index).
    pub fn at(&self, rate_idx: usize, discreteness_idx: usize) -> f64 {
        self.values[discreteness_idx * RATE_SAMPLES as usize + rate_idx]
    }
}

/// `count` evenly spaced samples covering [min, max] inclusive.
pub fn sample_axis(min: f64, max: f64, count: u32) -> Vec<f64> {
    let step = (max - min) / (count - 1) as f64;
    (0..count).map(|i| min + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_lorentz_factor_at_rest() {
        assert!((lorentz_factor(0.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_lorentz_factor_monotonic() {
        let mut prev = lorentz_factor(0.0);
        for i in 1..100 {
            let v = i as f64 / 101.0;
            let gamma = lorentz_factor(v);
            assert!(
                gamma > prev,
                "gamma must grow with v: gamma({}) = {} <= {}",
                v,
                gamma,
                prev
            );
            prev = gamma;
        }
    }

    #[test]
    fn test_lorentz_factor_guard() {
        // v >= 1 falls back to the guard velocity instead of diverging
        let guarded = lorentz_factor(1.0);
        assert!(guarded.is_finite());
        assert!((guarded - lorentz_factor(VELOCITY_GUARD)).abs() < EPS);
        assert!((lorentz_factor(1.5) - guarded).abs() < EPS);
    }

    #[test]
    fn test_debt_non_negative() {
        for &kappa in &[-1.0, -0.234, -0.1, 0.0] {
            for &v in &[0.0, 0.5, 0.9, 0.99] {
                let gamma = lorentz_factor(v);
                for &rate in &[0.01, 1.0, 2.0] {
                    for &n in &[1.0, 10.0, 50.0] {
                        assert!(debt_at(kappa, gamma, rate, n) >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_landscape_dimensions() {
        let landscape = DebtLandscape::compute(-0.234, 0.0);
        assert_eq!(landscape.values.len(), 100 * 100);
        assert_eq!(landscape.width(), 100);
        assert_eq!(landscape.height(), 100);
    }

    #[test]
    fn test_landscape_at_rest_matches_untransformed_formula() {
        // gamma = 1 at v = 0, so the boost is the identity
        let landscape = DebtLandscape::compute(-0.234, 0.0);
        assert!((landscape.gamma - 1.0).abs() < EPS);

        let rates = sample_axis(RATE_MIN, RATE_MAX, RATE_SAMPLES);
        let ns = sample_axis(DISCRETENESS_MIN, DISCRETENESS_MAX, DISCRETENESS_SAMPLES);
        for (j, &n) in ns.iter().enumerate() {
            for (i, &rate) in rates.iter().enumerate() {
                let expected = (0.234 * rate * rate * n * n).clamp(0.0, DEBT_CLAMP_MAX);
                assert!(
                    (landscape.at(i, j) - expected).abs() < EPS,
                    "cell ({}, {}) diverges from |kappa|*rate^2*n^2",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_landscape_clamp() {
        // kappa = -1, rate = 2, n = 50 gives 4 * 2500 = 10000 raw
        let landscape = DebtLandscape::compute(-1.0, 0.0);
        assert_eq!(landscape.at(99, 99), DEBT_CLAMP_MAX);

        // the low corner stays untouched: 1 * 0.0001 * 1 = 1e-4
        let low = landscape.at(0, 0);
        assert!((low - 1e-4).abs() < 1e-12);
        assert!(low < DEBT_CLAMP_MAX);
    }

    #[test]
    fn test_landscape_reference_cell() {
        // Cell nearest (rate = 1.0, n = 10) at defaults: D = 0.234 * 1 * 100
        let landscape = DebtLandscape::compute(-0.234, 0.0);

        let rates = sample_axis(RATE_MIN, RATE_MAX, RATE_SAMPLES);
        let ns = sample_axis(DISCRETENESS_MIN, DISCRETENESS_MAX, DISCRETENESS_SAMPLES);
        let i = nearest_index(&rates, 1.0);
        let j = nearest_index(&ns, 10.0);

        let expected = 0.234 * rates[i] * rates[i] * ns[j] * ns[j];
        assert!((landscape.at(i, j) - expected).abs() < EPS);
        // the exact point evaluates to 23.4; the nearest cell sits just off it
        assert!((debt_at(-0.234, 1.0, 1.0, 10.0) - 23.4).abs() < EPS);
        assert!((expected - 23.4).abs() < 0.7, "nearest cell should sit close to 23.4");
    }

    #[test]
    fn test_sample_axis_endpoints() {
        let axis = sample_axis(0.01, 2.0, 100);
        assert_eq!(axis.len(), 100);
        assert!((axis[0] - 0.01).abs() < EPS);
        assert!((axis[99] - 2.0).abs() < EPS);
    }

    fn nearest_index(axis: &[f64], target: f64) -> usize {
        axis.iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (*a - target)
                    .abs()
                    .partial_cmp(&(*b - target).abs())
                    .unwrap()
            })
            .map(|(i, _)| i)
            .unwrap()
    }
}
