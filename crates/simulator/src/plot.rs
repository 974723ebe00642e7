use std::ops::Range;
use std::path::Path;

use plotters::coord::ranged1d::{KeyPointHint, NoDefaultFormatting, Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::error::{SimError, SimResult};

/// Fixed y-axis tick positions.
pub const Y_TICKS: [f64; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];

/// f64 y-axis coordinate that always pins its tick marks to [`Y_TICKS`].
///
/// `with_key_points` cannot be used here: `WithKeyPoints<RangedCoordf64>`
/// inherits `NoDefaultFormatting` but plotters 0.3 provides no
/// `ValueFormatter` impl for it, so `configure_mesh` does not type-check.
struct FixedTicks(RangedCoordf64);

impl Ranged for FixedTicks {
    type ValueType = f64;
    type FormatOption = NoDefaultFormatting;

    fn range(&self) -> Range<f64> {
        self.0.range()
    }

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.0.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            Vec::new()
        } else {
            Y_TICKS.to_vec()
        }
    }

    fn axis_pixel_range(&self, limit: (i32, i32)) -> Range<i32> {
        self.0.axis_pixel_range(limit)
    }
}

impl ValueFormatter<f64> for FixedTicks {
    fn format(value: &f64) -> String {
        <RangedCoordf64 as ValueFormatter<f64>>::format(value)
    }
}

/// Mean energy vs step index: marker-and-line series with a dashed
/// zero-reference line, written as a PNG.
pub fn plot_energies(path: &Path, energies: &[f64]) -> SimResult<()> {
    let steps = energies.len().saturating_sub(1);
    let x_max = steps.max(1);

    let root = BitMapBackend::new(path, (1600, 1200)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(60)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(0..x_max, FixedTicks((-1.1f64..1.1f64).into()))
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("step")
        .y_desc("E / ħω")
        .x_labels(steps + 1)
        .label_style(("sans-serif", 28))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(DashedLineSeries::new(
            (0..=steps).map(|s| (s, 0.0)),
            8,
            6,
            ShapeStyle::from(&BLACK),
        ))
        .map_err(plot_err)?;

    let darkred = RGBColor(139, 0, 0);
    chart
        .draw_series(
            LineSeries::new(
                energies.iter().enumerate().map(|(s, &e)| (s, e)),
                darkred.stroke_width(3),
            )
            .point_size(6),
        )
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

fn plot_err<E: std::fmt::Display>(e: E) -> SimError {
    SimError::Plot(e.to_string())
}
