//! SVG rendering of a forecast report

use crate::error::{DashboardError, Result};
use chrono::Duration;
use forecast_core::ForecastReport;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;

fn render_err<E: std::fmt::Display>(e: E) -> DashboardError {
    DashboardError::Render(e.to_string())
}

/// Draw forecast line, uncertainty band and reorder point to `path`
pub fn render_chart(report: &ForecastReport, path: &Path) -> Result<()> {
    let first = report
        .forecast
        .first()
        .ok_or_else(|| DashboardError::Render("forecast has no points".to_string()))?;
    let origin = first.ds;

    let offset = |date: chrono::NaiveDate| (date - origin).num_days();
    let last_x = report
        .forecast
        .last()
        .map(|p| offset(p.ds))
        .unwrap_or(0)
        .max(1);

    let reorder = report.reorder_point as f64;
    let y_min = report
        .forecast
        .iter()
        .map(|p| p.yhat_lower)
        .fold(0.0_f64, f64::min);
    let y_max = report
        .forecast
        .iter()
        .map(|p| p.yhat_upper)
        .fold(reorder, f64::max);
    let pad = ((y_max - y_min) * 0.1).max(1.0);

    let root = SVGBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Forecast for {}", report.product_name),
            ("sans-serif", 28),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0_i64..last_x, (y_min - pad)..(y_max + pad))
        .map_err(render_err)?;

    let date_label = |x: &i64| (origin + Duration::days(*x)).format("%m-%d").to_string();
    chart
        .configure_mesh()
        .x_labels(10)
        .x_label_formatter(&date_label)
        .x_desc("Date")
        .y_desc("Units")
        .draw()
        .map_err(render_err)?;

    let band: Vec<(i64, f64)> = report
        .forecast
        .iter()
        .map(|p| (offset(p.ds), p.yhat_upper))
        .chain(
            report
                .forecast
                .iter()
                .rev()
                .map(|p| (offset(p.ds), p.yhat_lower)),
        )
        .collect();
    chart
        .draw_series(std::iter::once(Polygon::new(band, BLUE.mix(0.2).filled())))
        .map_err(render_err)?
        .label("Uncertainty")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], BLUE.mix(0.2).filled()));

    chart
        .draw_series(LineSeries::new(
            report.forecast.iter().map(|p| (offset(p.ds), p.yhat)),
            BLUE.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("Forecast")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(DashedLineSeries::new(
            vec![(0, reorder), (last_x, reorder)],
            10,
            6,
            RED.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("Reorder point")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}
