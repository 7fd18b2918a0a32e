use crate::config::{
    DEFAULT_DISCRETENESS, DEFAULT_KAPPA, DEFAULT_VELOCITY, DISCRETENESS_CONTROL_MAX,
    DISCRETENESS_CONTROL_MIN, KAPPA_CONTROL_MAX, KAPPA_CONTROL_MIN, NEWTON_REGIME_MAX,
    RELATIVISTIC_REGIME_MIN, REST_RATE, VELOCITY_CONTROL_MAX,
};
use crate::model::landscape::{debt_at, DebtLandscape};

/// The three adjustable model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    /// Curvature coefficient, non-positive
    pub kappa: f64,
    /// Fraction of the invariant speed, kept below 1 by the controls
    pub velocity: f64,
    /// Base discreteness for the single-point summary
    pub discreteness: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            kappa: DEFAULT_KAPPA,
            velocity: DEFAULT_VELOCITY,
            discreteness: DEFAULT_DISCRETENESS,
        }
    }
}

/// Which parameter a control event targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    Velocity,
    Curvature,
    Discreteness,
}

/// Named parameter presets, cycled by a single toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Newton,
    Interval,
    Ghost,
}

impl Mode {
    /// Fixed cycle: Newton -> Interval -> Ghost -> Newton.
    pub fn next(self) -> Self {
        match self {
            Mode::Newton => Mode::Interval,
            Mode::Interval => Mode::Ghost,
            Mode::Ghost => Mode::Newton,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Newton => "Newton",
            Mode::Interval => "Interval",
            Mode::Ghost => "Ghost",
        }
    }

    /// Overwrite parameters with this mode's preset. Presets write raw
    /// values and may exceed the keyboard control ranges (Interval pins
    /// discreteness at the landscape axis maximum, 50).
    fn apply(self, params: &mut Params) {
        match self {
            Mode::Newton => {
                params.discreteness = 10.0;
                params.velocity = 0.0;
            }
            Mode::Interval => {
                params.discreteness = 50.0;
                params.velocity = 0.0;
            }
            Mode::Ghost => {
                params.discreteness = 1.0;
                params.velocity = 0.0;
                params.kappa = -0.234;
            }
        }
    }
}

/// Qualitative regime by velocity threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Regime {
    NewtonLimit,
    Transition,
    RelativisticLimit,
}

impl Regime {
    pub fn classify(velocity: f64) -> Self {
        if velocity < NEWTON_REGIME_MAX {
            Regime::NewtonLimit
        } else if velocity > RELATIVISTIC_REGIME_MIN {
            Regime::RelativisticLimit
        } else {
            Regime::Transition
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Regime::NewtonLimit => "Newton limit",
            Regime::Transition => "transition regime",
            Regime::RelativisticLimit => "Relativistic limit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Regime::NewtonLimit => "classical debt accumulation, negligible boost correction",
            Regime::Transition => "debt reallocating between the rate and discreteness factors",
            // growth is gamma^2 under this transform; the cubic figure
            // sometimes quoted for it never appears in the computation
            Regime::RelativisticLimit => {
                "debt explosion driven by the gamma^2 term (often misquoted as gamma^3)"
            }
        }
    }
}

/// Single-point summary derived from the current parameters, distinct
/// from the landscape grid (fixed rest rate, current discreteness).
#[derive(Clone, Copy, Debug)]
pub struct Summary {
    pub gamma: f64,
    pub rate_boosted: f64,
    pub discreteness_boosted: f64,
    pub debt: f64,
    pub regime: Regime,
}

/// Interactive session state: parameters, mode, and the landscape they
/// produce. Every mutation recomputes the landscape in full before
/// returning; there is no caching and no partial update.
pub struct Session {
    params: Params,
    mode: Mode,
    landscape: DebtLandscape,
}

impl Session {
    pub fn new() -> Self {
        let params = Params::default();
        let landscape = DebtLandscape::compute(params.kappa, params.velocity);
        Self {
            params,
            mode: Mode::Newton,
            landscape,
        }
    }

    pub fn params(&self) -> Params {
        self.params
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn landscape(&self) -> &DebtLandscape {
        &self.landscape
    }

    /// Set one parameter to an absolute value, clamped to its control
    /// range, then recompute.
    pub fn set_parameter(&mut self, kind: ParamKind, value: f64) {
        match kind {
            ParamKind::Velocity => {
                self.params.velocity = value.clamp(0.0, VELOCITY_CONTROL_MAX);
            }
            ParamKind::Curvature => {
                self.params.kappa = value.clamp(KAPPA_CONTROL_MIN, KAPPA_CONTROL_MAX);
            }
            ParamKind::Discreteness => {
                self.params.discreteness =
                    value.clamp(DISCRETENESS_CONTROL_MIN, DISCRETENESS_CONTROL_MAX);
            }
        }
        self.recompute();
    }

    /// Nudge one parameter by a signed step (keyboard controls).
    pub fn adjust_parameter(&mut self, kind: ParamKind, delta: f64) {
        let current = match kind {
            ParamKind::Velocity => self.params.velocity,
            ParamKind::Curvature => self.params.kappa,
            ParamKind::Discreteness => self.params.discreteness,
        };
        self.set_parameter(kind, current + delta);
    }

    /// Restore the documented defaults and recompute.
    pub fn reset(&mut self) {
        self.params = Params::default();
        self.recompute();
    }

    /// Advance the mode cycle and apply the new mode's preset.
    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.next();
        self.mode.apply(&mut self.params);
        self.recompute();
        self.mode
    }

    /// Summary at the current parameter point (rest rate fixed at 1.0).
    pub fn summary(&self) -> Summary {
        let gamma = self.landscape.gamma;
        let rate_boosted = REST_RATE / gamma;
        let discreteness_boosted = self.params.discreteness * gamma;
        Summary {
            gamma,
            rate_boosted,
            discreteness_boosted,
            debt: debt_at(self.params.kappa, gamma, REST_RATE, self.params.discreteness),
            regime: Regime::classify(self.params.velocity),
        }
    }

    fn recompute(&mut self) {
        self.landscape = DebtLandscape::compute(self.params.kappa, self.params.velocity);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_defaults() {
        let session = Session::new();
        let p = session.params();
        assert!((p.kappa + 0.234).abs() < EPS);
        assert!((p.velocity - 0.0).abs() < EPS);
        assert!((p.discreteness - 10.0).abs() < EPS);
        assert_eq!(session.mode(), Mode::Newton);
    }

    #[test]
    fn test_mode_cycle_returns_to_newton() {
        let mut session = Session::new();
        assert_eq!(session.toggle_mode(), Mode::Interval);
        assert_eq!(session.toggle_mode(), Mode::Ghost);
        assert_eq!(session.toggle_mode(), Mode::Newton);
    }

    #[test]
    fn test_interval_preset_exceeds_control_range() {
        let mut session = Session::new();
        session.toggle_mode(); // Interval
        let p = session.params();
        assert!((p.discreteness - 50.0).abs() < EPS);
        assert!((p.velocity - 0.0).abs() < EPS);
    }

    #[test]
    fn test_ghost_preset() {
        let mut session = Session::new();
        session.set_parameter(ParamKind::Curvature, -0.9);
        session.toggle_mode(); // Interval
        session.toggle_mode(); // Ghost
        let p = session.params();
        assert!((p.discreteness - 1.0).abs() < EPS);
        assert!((p.velocity - 0.0).abs() < EPS);
        assert!((p.kappa + 0.234).abs() < EPS);
    }

    #[test]
    fn test_newton_preset_leaves_curvature_alone() {
        let mut session = Session::new();
        session.set_parameter(ParamKind::Curvature, -0.8);
        session.toggle_mode();
        session.toggle_mode();
        session.toggle_mode(); // back to Newton
        let p = session.params();
        // Ghost already pinned kappa to -0.234, Newton must not touch it
        assert!((p.kappa + 0.234).abs() < EPS);
        assert!((p.discreteness - 10.0).abs() < EPS);
    }

    #[test]
    fn test_reset_idempotent() {
        let mut session = Session::new();
        session.set_parameter(ParamKind::Velocity, 0.8);
        session.set_parameter(ParamKind::Discreteness, 25.0);
        session.reset();
        let first = session.params();
        session.reset();
        assert_eq!(first, session.params());
        assert_eq!(first, Params::default());
    }

    #[test]
    fn test_control_range_clamping() {
        let mut session = Session::new();
        session.set_parameter(ParamKind::Velocity, 3.0);
        assert!((session.params().velocity - 0.99).abs() < EPS);

        session.set_parameter(ParamKind::Curvature, 0.5);
        assert!((session.params().kappa - 0.0).abs() < EPS);

        session.set_parameter(ParamKind::Discreteness, 100.0);
        assert!((session.params().discreteness - 30.0).abs() < EPS);

        session.set_parameter(ParamKind::Discreteness, -5.0);
        assert!((session.params().discreteness - 1.0).abs() < EPS);
    }

    #[test]
    fn test_summary_at_defaults() {
        let session = Session::new();
        let s = session.summary();
        assert!((s.gamma - 1.0).abs() < EPS);
        assert!((s.rate_boosted - 1.0).abs() < EPS);
        assert!((s.discreteness_boosted - 10.0).abs() < EPS);
        assert!((s.debt - 23.4).abs() < EPS);
        assert_eq!(s.regime, Regime::NewtonLimit);
    }

    #[test]
    fn test_summary_tracks_landscape_gamma() {
        let mut session = Session::new();
        session.set_parameter(ParamKind::Velocity, 0.6);
        let s = session.summary();
        // gamma(0.6) = 1.25
        assert!((s.gamma - 1.25).abs() < EPS);
        assert!((s.rate_boosted - 0.8).abs() < EPS);
        assert_eq!(s.regime, Regime::Transition);
    }

    #[test]
    fn test_regime_thresholds() {
        assert_eq!(Regime::classify(0.0), Regime::NewtonLimit);
        assert_eq!(Regime::classify(0.09), Regime::NewtonLimit);
        assert_eq!(Regime::classify(0.1), Regime::Transition);
        assert_eq!(Regime::classify(0.9), Regime::Transition);
        assert_eq!(Regime::classify(0.91), Regime::RelativisticLimit);
    }

    #[test]
    fn test_boost_cancels_in_landscape() {
        // (rate/gamma)^2 * (n*gamma)^2 == rate^2 * n^2: the boost drops
        // out of the grid entirely. Only kappa reshapes the heat map.
        let mut session = Session::new();
        let rest_cell = session.landscape().at(10, 10);
        session.set_parameter(ParamKind::Velocity, 0.9);
        assert!((session.landscape().at(10, 10) - rest_cell).abs() < 1e-9);
    }

    #[test]
    fn test_curvature_reshapes_landscape() {
        let mut session = Session::new();
        let before = session.landscape().at(10, 10);
        session.set_parameter(ParamKind::Curvature, -1.0);
        assert!(session.landscape().at(10, 10) > before);
    }
}
