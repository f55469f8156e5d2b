use crate::model::stats::DrinkingData;
use crate::service::aggregator::Aggregator;
use crate::service::dto::StatCard;
use crate::service::generator::SeriesGenerator;
use crate::service::heatmap::CalendarHeatmap;
use chrono::NaiveDate;
use anyhow::{Context, Result};
use tracing::info;

/// Everything one dashboard load renders.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub year: i32,
    pub as_of: NaiveDate,
    pub data: DrinkingData,
    pub cards: Vec<StatCard>,
    pub heatmap: CalendarHeatmap,
}

pub struct DashboardUseCase<'a, G: SeriesGenerator> {
    generator: &'a G,
    aggregator: Aggregator,
}

impl<'a, G: SeriesGenerator> DashboardUseCase<'a, G> {
    pub fn new(generator: &'a G, aggregator: Aggregator) -> Self {
        Self {
            generator,
            aggregator,
        }
    }

    pub fn load(&self, year: i32, as_of: NaiveDate) -> Result<Dashboard> {
        // 1. Generate the year once
        let series = self.generator.build_series(year);

        // 2. Aggregate against the explicit "today"
        let data = self
            .aggregator
            .aggregate_as_of(&series, as_of)
            .with_context(|| format!("Failed to aggregate {} series", year))?;

        // 3. Derive the view shapes
        let cards = StatCard::from_data(&data);
        let heatmap = CalendarHeatmap::build(year, data.daily_data())?;

        info!(
            year,
            %as_of,
            total_drinks = data.total_drinks(),
            current_streak = data.current_streak(),
            dry_days = data.dry_days(),
            "dashboard loaded"
        );

        Ok(Dashboard {
            year,
            as_of,
            data,
            cards,
            heatmap,
        })
    }
}
