use tracing::{info, warn};
use crate::api::coingecko::MarketDataClient;
use crate::api::newsdata::NewsClient;
use crate::config::Settings;
use crate::models::{
    lookup_coin, ChartOutcome, Coin, Dashboard, ForecastOutcome, PriceHistory, FORECAST_HORIZON_DAYS,
};
use crate::services::{chart_service, forecast_service, news_service, price_service};
use crate::utils::DashboardError;

/// Clients and chart size shared by every request
///
/// Holds no per-request state; cloning is cheap.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    pub market: MarketDataClient,
    pub news: NewsClient,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl DashboardContext {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            market: MarketDataClient::with_base_url(settings.coingecko_base_url.clone()),
            news: NewsClient::with_base_url(
                settings.newsdata_api_key.clone(),
                settings.newsdata_base_url.clone(),
            ),
            chart_width: settings.chart_width,
            chart_height: settings.chart_height,
        }
    }
}

/// Build the page data for one coin
///
/// Only an unsupported coin id fails; upstream problems come back as
/// `Unavailable`/`Fallback` variants inside the dashboard.
pub async fn build_dashboard(ctx: &DashboardContext, coin_id: &str) -> Result<Dashboard, DashboardError> {
    let coin = lookup_coin(coin_id)?;
    info!("🪙 Building dashboard for {} ({})", coin.display_name(), coin.symbol);

    let (history, news) = tokio::join!(
        price_service::fetch_price_history(&ctx.market, &coin),
        news_service::fetch_crypto_news(&ctx.news),
    );

    let (forecast, chart) = forecast_and_chart(ctx, &coin, &history).await;

    Ok(Dashboard {
        coin,
        history,
        forecast,
        chart,
        news,
    })
}

async fn forecast_and_chart(
    ctx: &DashboardContext,
    coin: &Coin,
    history: &PriceHistory,
) -> (ForecastOutcome, ChartOutcome) {
    let forecast = match forecast_service::forecast_prices(history.points(), FORECAST_HORIZON_DAYS) {
        Ok(f) => f,
        Err(e) => {
            let reason = match history {
                PriceHistory::Unavailable(cause) => format!("{} ({})", e, cause),
                PriceHistory::Loaded(_) => e.to_string(),
            };
            warn!("Forecast unavailable for {}: {}", coin.id, reason);
            return (
                ForecastOutcome::Unavailable(reason.clone()),
                ChartOutcome::Unavailable(reason),
            );
        }
    };

    let points = history.points().to_vec();
    let to_draw = forecast.clone();
    let (width, height) = (ctx.chart_width, ctx.chart_height);
    let rendered = tokio::task::spawn_blocking(move || {
        chart_service::render_forecast_chart(&points, &to_draw, width, height)
    })
    .await;

    let chart = match rendered {
        Ok(Ok(artifact)) => ChartOutcome::Rendered(artifact),
        Ok(Err(e)) => {
            warn!("Chart unavailable for {}: {}", coin.id, e);
            ChartOutcome::Unavailable(e.to_string())
        }
        Err(e) => {
            warn!("Chart task failed for {}: {}", coin.id, e);
            ChartOutcome::Unavailable(format!("chart task failed: {}", e))
        }
    };

    (ForecastOutcome::Ready(forecast), chart)
}
