/// Landscape grid resolution (100x100 = 10K cells, recomputed per event)
pub const RATE_SAMPLES: u32 = 100;
pub const DISCRETENESS_SAMPLES: u32 = 100;

/// Landscape axis ranges
pub const RATE_MIN: f64 = 0.01;
pub const RATE_MAX: f64 = 2.0;
pub const DISCRETENESS_MIN: f64 = 1.0;
pub const DISCRETENESS_MAX: f64 = 50.0;

// ============================================
// Debt Model Parameters
// ============================================

/// Default curvature coefficient
pub const DEFAULT_KAPPA: f64 = -0.234;

/// Default velocity (fraction of the invariant speed)
pub const DEFAULT_VELOCITY: f64 = 0.0;

/// Default base discreteness
pub const DEFAULT_DISCRETENESS: f64 = 10.0;

/// Rest-frame refresh rate used by the single-point summary
pub const REST_RATE: f64 = 1.0;

/// Velocity substituted when a caller passes v >= 1 (keeps the Lorentz
/// factor finite; a display-safety policy, not a physical law)
pub const VELOCITY_GUARD: f64 = 0.999;

/// Raw debt values above this are truncated in the landscape grid
pub const DEBT_CLAMP_MAX: f64 = 100.0;

/// Upper end of the on-screen color range (intentionally tighter than
/// the data clamp so mid-range structure stays visible)
pub const DISPLAY_DEBT_MAX: f32 = 50.0;

// ============================================
// Interactive Controls
// ============================================

/// Velocity control range and keyboard step
pub const VELOCITY_CONTROL_MAX: f64 = 0.99;
pub const VELOCITY_STEP: f64 = 0.01;

/// Curvature control range and keyboard step
pub const KAPPA_CONTROL_MIN: f64 = -1.0;
pub const KAPPA_CONTROL_MAX: f64 = 0.0;
pub const KAPPA_STEP: f64 = 0.02;

/// Base-discreteness control range and keyboard step. Mode presets may
/// write values outside this range (Interval mode pins n0 = 50); the
/// range only bounds keyboard adjustment.
pub const DISCRETENESS_CONTROL_MIN: f64 = 1.0;
pub const DISCRETENESS_CONTROL_MAX: f64 = 30.0;
pub const DISCRETENESS_STEP: f64 = 1.0;

/// Velocity thresholds for the qualitative regime label
pub const NEWTON_REGIME_MAX: f64 = 0.1;
pub const RELATIVISTIC_REGIME_MIN: f64 = 0.9;

// ============================================
// Static Comparison Figure
// ============================================

/// Samples per sweep curve
pub const SWEEP_SAMPLES: u32 = 100;

/// Curvature values traced by the discreteness sweep
pub const SWEEP_KAPPAS: [f64; 4] = [-0.1, -0.234, -0.5, -1.0];

/// Velocity sweep range
pub const SWEEP_VELOCITY_MAX: f64 = 0.99;

/// Additive guard under the square root in the velocity sweep. This is a
/// different guard than VELOCITY_GUARD on purpose; see DESIGN.md.
pub const SWEEP_EPSILON: f64 = 1e-10;

/// Rest-frame reference debt for the velocity sweep: 0.234 * 1 * 100
pub const REST_FRAME_DEBT: f64 = 23.4;

/// Output path for the comparison figure
pub const FIGURE_PATH: &str = "debt_mechanics.png";
pub const FIGURE_SIZE: (u32, u32) = (1400, 500);
