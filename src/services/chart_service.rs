use std::fs;
use std::path::Path;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{DateTime, Utc};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use tracing::{debug, warn};
use uuid::Uuid;
use crate::models::{ChartArtifact, Forecast, PricePoint};
use crate::services::forecast_service::forecast_dates;
use crate::utils::ChartError;

pub const DEFAULT_CHART_WIDTH: u32 = 1000;
pub const DEFAULT_CHART_HEIGHT: u32 = 500;

const ORANGE: RGBColor = RGBColor(255, 165, 0);
/// Upper bound on date ticks so 15 + 7 days don't crowd the axis
pub const MAX_X_LABELS: usize = 8;

/// Forecast values placed on the days right after the last historical point
///
/// Dates are derived from the history, not from the forecast, so the two
/// segments always meet on the chart.
pub fn forecast_segment(history: &[PricePoint], forecast: &Forecast) -> Vec<(DateTime<Utc>, f64)> {
    let Some(last) = history.last() else {
        return Vec::new();
    };

    forecast_dates(last.timestamp, forecast.points.len())
        .into_iter()
        .zip(forecast.points.iter().map(|p| p.price))
        .collect()
}

/// Render history and forecast as one PNG and return it base64-encoded
///
/// Each call draws on its own scratch file, which is removed before returning,
/// so concurrent renders never share a surface.
pub fn render_forecast_chart(
    history: &[PricePoint],
    forecast: &Forecast,
    width: u32,
    height: u32,
) -> Result<ChartArtifact, ChartError> {
    if history.is_empty() {
        return Err(ChartError::NoData);
    }

    let scratch_file = std::env::temp_dir().join(format!("coincast_chart_{}.png", Uuid::new_v4()));
    debug!("Rendering chart to {}", scratch_file.display());

    if let Err(e) = draw_chart(&scratch_file, history, forecast, width, height) {
        remove_scratch(&scratch_file);
        return Err(e);
    }

    // Surface is gone at this point; the file holds the complete image
    let image_data = fs::read(&scratch_file);
    remove_scratch(&scratch_file);
    let image_data = image_data?;

    Ok(ChartArtifact {
        png_base64: BASE64.encode(image_data),
        width,
        height,
    })
}

fn remove_scratch(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!("Failed to remove chart scratch file {}: {}", path.display(), e);
    }
}

fn draw_chart(
    path: &Path,
    history: &[PricePoint],
    forecast: &Forecast,
    width: u32,
    height: u32,
) -> Result<(), ChartError> {
    let future = forecast_segment(history, forecast);

    let backend = BitMapBackend::new(path, (width, height));
    let root = backend.into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(format!("Failed to fill canvas: {}", e)))?;

    // Price range over both segments
    let all_prices = history.iter().map(|p| p.price).chain(future.iter().map(|&(_, p)| p));
    let (min_price, max_price) = all_prices.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p), hi.max(p))
    });

    let price_range = (max_price - min_price).max(1e-8);
    let padding = price_range * 0.1;
    let mut y_min = min_price - padding;
    if min_price >= 0.0 {
        y_min = y_min.max(0.0);
    }
    let y_max = max_price + padding;

    let x_min = history[0].timestamp;
    let x_max = future
        .last()
        .map(|&(date, _)| date)
        .unwrap_or(history[history.len() - 1].timestamp);
    // A lone point with no forecast still needs a non-empty axis
    let x_max = if x_max > x_min { x_max } else { x_min + chrono::Duration::days(1) };

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Crypto Price + {}-Day Forecast", forecast.points.len()),
            ("sans-serif", 28.0).into_font(),
        )
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| ChartError::Render(format!("Failed to build chart: {}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Price (USD)")
        .x_labels(MAX_X_LABELS)
        .x_label_formatter(&|d: &DateTime<Utc>| d.format("%m-%d").to_string())
        .draw()
        .map_err(|e| ChartError::Render(format!("Failed to draw mesh: {}", e)))?;

    // Historical: solid line with circles
    chart
        .draw_series(LineSeries::new(
            history.iter().map(|p| (p.timestamp, p.price)),
            BLUE.stroke_width(2),
        ))
        .map_err(|e| ChartError::Render(format!("Failed to draw history: {}", e)))?
        .label("Historical Price")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(history.iter().map(|p| Circle::new((p.timestamp, p.price), 4, BLUE.filled())))
        .map_err(|e| ChartError::Render(format!("Failed to draw history points: {}", e)))?;

    // Forecast: dashed line with crosses
    chart
        .draw_series(DashedLineSeries::new(future.iter().copied(), 10, 6, ORANGE.stroke_width(2)))
        .map_err(|e| ChartError::Render(format!("Failed to draw forecast: {}", e)))?
        .label("Forecast")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ORANGE.stroke_width(2)));

    chart
        .draw_series(future.iter().map(|&(date, price)| Cross::new((date, price), 5, ORANGE.stroke_width(2))))
        .map_err(|e| ChartError::Render(format!("Failed to draw forecast points: {}", e)))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| ChartError::Render(format!("Failed to draw legend: {}", e)))?;

    root.present()
        .map_err(|e| ChartError::Render(format!("Failed to render chart: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FORECAST_HORIZON_DAYS;
    use crate::services::forecast_service::forecast_prices;
    use chrono::{Duration, TimeZone};

    fn daily_series(n: usize) -> Vec<PricePoint> {
        let start = Utc.with_ymd_and_hms(2024, 3, 17, 0, 0, 0).unwrap();
        (0..n)
            .map(|i| PricePoint {
                timestamp: start + Duration::days(i as i64),
                price: 100.0 + 2.0 * i as f64 + if i % 2 == 0 { 0.5 } else { -0.5 },
            })
            .collect()
    }

    #[test]
    fn test_forecast_segment_starts_day_after_history() {
        let history = daily_series(15);
        let forecast = forecast_prices(&history, FORECAST_HORIZON_DAYS).unwrap();
        let segment = forecast_segment(&history, &forecast);
        let last = history.last().unwrap().timestamp;

        assert_eq!(segment.len(), 7);
        assert_eq!(segment[0].0, last + Duration::days(1));
        for pair in segment.windows(2) {
            assert_eq!(pair[1].0 - pair[0].0, Duration::days(1));
        }
        assert_eq!(segment[6].0, Utc.with_ymd_and_hms(2024, 4, 7, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_render_produces_png() {
        let history = daily_series(15);
        let forecast = forecast_prices(&history, FORECAST_HORIZON_DAYS).unwrap();

        let artifact = render_forecast_chart(&history, &forecast, 640, 320).unwrap();
        assert!(!artifact.png_base64.is_empty());
        assert!(artifact.data_uri().starts_with("data:image/png;base64,"));

        let bytes = BASE64.decode(&artifact.png_base64).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_render_long_axis_on_narrow_canvas() {
        let history = daily_series(60);
        let forecast = forecast_prices(&history, FORECAST_HORIZON_DAYS).unwrap();

        let artifact = render_forecast_chart(&history, &forecast, 320, 200).unwrap();
        let bytes = BASE64.decode(&artifact.png_base64).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        assert_eq!((artifact.width, artifact.height), (320, 200));
    }

    #[test]
    fn test_render_empty_history_is_no_data() {
        let history = daily_series(3);
        let forecast = forecast_prices(&history, FORECAST_HORIZON_DAYS).unwrap();
        assert!(matches!(
            render_forecast_chart(&[], &forecast, 640, 320),
            Err(ChartError::NoData)
        ));
    }

    #[test]
    fn test_concurrent_renders_do_not_interfere() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let history = daily_series(5 + i);
                    let forecast = forecast_prices(&history, FORECAST_HORIZON_DAYS).unwrap();
                    render_forecast_chart(&history, &forecast, 400, 200).map(|a| a.png_base64)
                })
            })
            .collect();

        for handle in handles {
            let encoded = handle.join().unwrap().unwrap();
            let bytes = BASE64.decode(encoded).unwrap();
            assert_eq!(&bytes[1..4], b"PNG");
        }
    }
}
