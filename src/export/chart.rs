use plotters::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::path::Path;

use crate::error::{Error, Result};

const PALETTE: &[RGBColor] = &[
    RGBColor(66, 133, 244),
    RGBColor(219, 68, 55),
    RGBColor(244, 180, 0),
    RGBColor(15, 157, 88),
    RGBColor(171, 71, 188),
    RGBColor(255, 112, 67),
    RGBColor(0, 172, 193),
    RGBColor(124, 179, 66),
    RGBColor(94, 53, 177),
    RGBColor(240, 98, 146),
];

fn draw_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Chart(e.to_string())
}

/// Render a pie chart of per-category totals to a PNG file.
/// Zero-amount categories are dropped; an empty dataset is an error.
pub(crate) fn render_category_pie(path: &Path, data: &[(String, Decimal)]) -> Result<()> {
    let slices: Vec<&(String, Decimal)> =
        data.iter().filter(|(_, amt)| *amt > Decimal::ZERO).collect();
    if slices.is_empty() {
        return Err(Error::EmptyData("chart"));
    }

    let root = BitMapBackend::new(path, (640, 640)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    root.titled("Spending by Category", ("sans-serif", 28))
        .map_err(draw_err)?;

    let sizes: Vec<f64> = slices
        .iter()
        .map(|(_, amt)| amt.to_f64().unwrap_or(0.0))
        .collect();
    let labels: Vec<String> = slices.iter().map(|(name, _)| name.clone()).collect();
    let colors: Vec<RGBColor> = (0..slices.len())
        .map(|i| PALETTE[i % PALETTE.len()])
        .collect();

    let center = (320, 340);
    let radius = 220.0;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 18).into_font());
    pie.percentages(("sans-serif", 14).into_font());
    root.draw(&pie).map_err(draw_err)?;
    root.present().map_err(draw_err)?;
    Ok(())
}

/// Render a line chart of per-month totals (chronological) to a PNG file.
pub(crate) fn render_monthly_trend(path: &Path, data: &[(String, Decimal)]) -> Result<()> {
    if data.is_empty() {
        return Err(Error::EmptyData("chart"));
    }

    let root = BitMapBackend::new(path, (800, 480)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let points: Vec<(usize, f64)> = data
        .iter()
        .enumerate()
        .map(|(i, (_, amt))| (i, amt.to_f64().unwrap_or(0.0)))
        .collect();
    let y_max = points.iter().map(|&(_, v)| v).fold(0.0f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };
    let x_max = (data.len() - 1).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption("Monthly Spending Trend", ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(0usize..x_max, 0f64..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_labels(data.len().min(12))
        .x_label_formatter(&|idx| {
            data.get(*idx)
                .map(|(month, _)| month.clone())
                .unwrap_or_default()
        })
        .y_desc("Total spent")
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
        .map_err(draw_err)?;
    chart
        .draw_series(points.iter().map(|p| Circle::new(*p, 4, BLUE.filled())))
        .map_err(draw_err)?;
    root.present().map_err(draw_err)?;
    Ok(())
}
