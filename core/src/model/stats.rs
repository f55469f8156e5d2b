use serde::Serialize;

use crate::model::day_record::{DailyData, DayRecord};
use crate::time::month_label;

/// Total drinks for one calendar month.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAggregate {
    #[serde(rename = "month")]
    label: &'static str,
    month_index: usize,
    #[serde(rename = "drinks")]
    total_drinks: u64,
}

impl MonthlyAggregate {
    pub(crate) fn new(month_index: usize, total_drinks: u64) -> Self {
        Self {
            label: month_label(month_index),
            month_index,
            total_drinks,
        }
    }

    /// Short month name, e.g. `"Mar"`.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Zero-based month index (0 = January).
    pub fn month_index(&self) -> usize {
        self.month_index
    }

    pub fn total_drinks(&self) -> u64 {
        self.total_drinks
    }
}

/// Result of one aggregation run.
///
/// Built only by the aggregator and read through accessors; reflecting new
/// input means aggregating again.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DrinkingData {
    daily_data: DailyData,
    monthly_data: Vec<MonthlyAggregate>,
    total_drinks: u64,
    average_per_month: f64,
    highest_month: MonthlyAggregate,
    current_streak: u32,
}

impl DrinkingData {
    pub(crate) fn new(
        daily_data: DailyData,
        monthly_data: Vec<MonthlyAggregate>,
        total_drinks: u64,
        average_per_month: f64,
        highest_month: MonthlyAggregate,
        current_streak: u32,
    ) -> Self {
        Self {
            daily_data,
            monthly_data,
            total_drinks,
            average_per_month,
            highest_month,
            current_streak,
        }
    }

    pub fn daily_data(&self) -> &DailyData {
        &self.daily_data
    }

    /// Twelve entries ordered January to December.
    pub fn monthly_data(&self) -> &[MonthlyAggregate] {
        &self.monthly_data
    }

    pub fn total_drinks(&self) -> u64 {
        self.total_drinks
    }

    pub fn average_per_month(&self) -> f64 {
        self.average_per_month
    }

    pub fn highest_month(&self) -> MonthlyAggregate {
        self.highest_month
    }

    /// Consecutive zero-drink days ending at the as-of day.
    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn records(&self) -> impl Iterator<Item = DayRecord> + '_ {
        self.daily_data.iter().map(DayRecord::from)
    }

    pub fn days_recorded(&self) -> usize {
        self.daily_data.len()
    }

    /// Recorded days with a zero count.
    pub fn dry_days(&self) -> usize {
        self.records().filter(DayRecord::is_dry).count()
    }
}
