//! Datasets for the static comparison figure. Computed once at startup,
//! independent of the interactive session.

use crate::config::{
    DISCRETENESS_MAX, DISCRETENESS_MIN, REST_FRAME_DEBT, REST_RATE, SWEEP_EPSILON, SWEEP_KAPPAS,
    SWEEP_SAMPLES, SWEEP_VELOCITY_MAX,
};
use crate::model::landscape::sample_axis;

/// One debt-vs-discreteness curve at a fixed curvature.
pub struct DiscretenessCurve {
    pub kappa: f64,
    pub points: Vec<(f64, f64)>,
}

/// Quadratic debt growth along the discreteness axis alone, one curve
/// per curvature value, rest frame (no boost, no clamp).
pub fn discreteness_sweep() -> Vec<DiscretenessCurve> {
    let ns = sample_axis(DISCRETENESS_MIN, DISCRETENESS_MAX, SWEEP_SAMPLES);
    SWEEP_KAPPAS
        .iter()
        .map(|&kappa| DiscretenessCurve {
            kappa,
            points: ns
                .iter()
                .map(|&n| (n, kappa.abs() * REST_RATE * REST_RATE * n * n))
                .collect(),
        })
        .collect()
}

/// Boosted debt against velocity: D' = D0 * gamma^2 with a fixed
/// rest-frame reference debt D0. The additive epsilon under the root
/// guards the v -> 1 end of the sweep; it is not the interactive
/// evaluator's hard clamp (see DESIGN.md).
pub fn velocity_sweep() -> Vec<(f64, f64)> {
    sample_axis(0.0, SWEEP_VELOCITY_MAX, SWEEP_SAMPLES)
        .into_iter()
        .map(|v| {
            let gamma = 1.0 / (1.0 - v * v + SWEEP_EPSILON).sqrt();
            (v, REST_FRAME_DEBT * gamma * gamma)
        })
        .collect()
}
