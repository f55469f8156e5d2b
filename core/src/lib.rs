pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::{Config, LoggingConfig};
pub use error::AggregateError;
pub use model::day_record::{DailyData, DayRecord, RawSeries};
pub use model::stats::{DrinkingData, MonthlyAggregate};
pub use service::aggregator::{aggregate, Aggregator, GapPolicy};
pub use service::dto::StatCard;
pub use service::generator::{SeriesGenerator, SyntheticGenerator};
pub use service::heatmap::{CalendarHeatmap, HeatmapCell, Intensity};
pub use time::parse_as_of;
pub use usecase::dashboard::{Dashboard, DashboardUseCase};
