//! Static two-panel comparison figure: quadratic interval-compression
//! cost on the left, boosted-debt growth against velocity on the right.
//! Written once at startup; the interactive window never touches it.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::config::{FIGURE_SIZE, REST_FRAME_DEBT, SWEEP_VELOCITY_MAX};
use crate::model::sweeps::{discreteness_sweep, velocity_sweep, DiscretenessCurve};

static CURVE_COLORS: [RGBColor; 4] = [BLUE, GREEN, MAGENTA, BLACK];

/// Render both comparison panels into one PNG at `out_path`.
pub fn write_comparison_figure(out_path: &Path) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    draw_discreteness_panel(&panels[0], &discreteness_sweep())?;
    draw_velocity_panel(&panels[1], &velocity_sweep())?;

    root.present()?;
    Ok(())
}

fn draw_discreteness_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    curves: &[DiscretenessCurve],
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .caption("Interval Compression Cost", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(1.0f64..50.0f64, (0.05f64..3000.0f64).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("discreteness n (number of branches)")
        .y_desc("debt D = |kappa| f^2 n^2")
        .draw()?;

    for (curve, color) in curves.iter().zip(CURVE_COLORS.iter()) {
        chart
            .draw_series(LineSeries::new(curve.points.iter().copied(), color))?
            .label(format!("kappa = {}", curve.kappa))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], *color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn draw_velocity_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    sweep: &[(f64, f64)],
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .caption("Debt Reallocation under Boost", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0f64..SWEEP_VELOCITY_MAX, (10.0f64..2000.0f64).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("velocity v (fraction of invariant speed)")
        .y_desc("debt D")
        .draw()?;

    chart
        .draw_series(LineSeries::new(sweep.iter().copied(), RED))?
        .label("boosted debt D0 * gamma^2")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    // rest-frame reference line
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(0.0, REST_FRAME_DEBT), (SWEEP_VELOCITY_MAX, REST_FRAME_DEBT)],
            BLACK.mix(0.6),
        )))?
        .label("rest frame debt D0")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.mix(0.6)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
