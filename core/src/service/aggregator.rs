use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AggregateError;
use crate::model::day_record::{DailyData, RawSeries};
use crate::model::stats::{DrinkingData, MonthlyAggregate};

const MONTHS: usize = 12;

/// How dates missing from inside the series span are treated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GapPolicy {
    /// Missing days count as zero-drink days, including in the streak walk.
    #[default]
    Zero,
    /// Missing days fail the run with `AggregateError::MissingDays`.
    Reject,
}

/// Turns a day -> count series into monthly buckets and summary stats.
///
/// Holds no state between runs, so one value can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aggregator {
    gap_policy: GapPolicy,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gap_policy(mut self, gap_policy: GapPolicy) -> Self {
        self.gap_policy = gap_policy;
        self
    }

    pub fn gap_policy(&self) -> GapPolicy {
        self.gap_policy
    }

    /// Aggregates with the last recorded date as "today".
    pub fn aggregate(&self, series: &RawSeries) -> Result<DrinkingData, AggregateError> {
        let last = series
            .keys()
            .next_back()
            .copied()
            .ok_or(AggregateError::EmptySeries)?;
        self.aggregate_as_of(series, last)
    }

    /// Aggregates with an explicit "today" for the streak.
    ///
    /// The streak starts at the latest recorded date not after `as_of`; an
    /// `as_of` earlier than every record yields a streak of zero.
    pub fn aggregate_as_of(
        &self,
        series: &RawSeries,
        as_of: NaiveDate,
    ) -> Result<DrinkingData, AggregateError> {
        let daily_data = self.validate(series)?;

        let mut buckets = [0u64; MONTHS];
        for (date, count) in &daily_data {
            buckets[date.month0() as usize] += u64::from(*count);
        }

        let monthly_data: Vec<MonthlyAggregate> = buckets
            .iter()
            .enumerate()
            .map(|(index, total)| MonthlyAggregate::new(index, *total))
            .collect();

        let total_drinks: u64 = buckets.iter().sum();
        debug_assert_eq!(
            total_drinks,
            daily_data.values().map(|c| u64::from(*c)).sum::<u64>(),
            "monthly buckets diverged from daily totals"
        );

        let average_per_month = total_drinks as f64 / MONTHS as f64;
        let highest_month = highest_month(&monthly_data);
        let current_streak = current_streak(&daily_data, as_of);

        debug!(
            days = daily_data.len(),
            total_drinks,
            highest = highest_month.label(),
            current_streak,
            %as_of,
            "aggregated series"
        );

        Ok(DrinkingData::new(
            daily_data,
            monthly_data,
            total_drinks,
            average_per_month,
            highest_month,
            current_streak,
        ))
    }

    fn validate(&self, series: &RawSeries) -> Result<DailyData, AggregateError> {
        let (first, last) = match (series.keys().next(), series.keys().next_back()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(AggregateError::EmptySeries),
        };

        let mut daily_data = DailyData::new();
        for (date, count) in series {
            let valid = u32::try_from(*count).map_err(|_| AggregateError::InvalidInput {
                date: *date,
                count: *count,
            })?;
            daily_data.insert(*date, valid);
        }

        if first.year() != last.year() {
            return Err(AggregateError::MixedYears {
                first: first.year(),
                other: last.year(),
            });
        }

        if self.gap_policy == GapPolicy::Reject {
            let span = (last - first).num_days() as usize + 1;
            let missing = span - daily_data.len();
            if missing > 0 {
                let first_missing = first
                    .iter_days()
                    .find(|day| !daily_data.contains_key(day))
                    .unwrap_or(first);
                return Err(AggregateError::MissingDays { first_missing, missing });
            }
        }

        Ok(daily_data)
    }
}

/// Month with the greatest total; the earliest month wins a tie.
fn highest_month(monthly_data: &[MonthlyAggregate]) -> MonthlyAggregate {
    let mut best = monthly_data[0];
    for month in &monthly_data[1..] {
        if month.total_drinks() > best.total_drinks() {
            best = *month;
        }
    }
    best
}

fn current_streak(daily_data: &DailyData, as_of: NaiveDate) -> u32 {
    let first = match daily_data.keys().next() {
        Some(first) => *first,
        None => return 0,
    };
    let anchor = match daily_data.range(..=as_of).next_back() {
        Some((date, _)) => *date,
        None => return 0,
    };

    let mut streak = 0;
    let mut day = anchor;
    while day >= first {
        // Dates absent from the map only survive validation under GapPolicy::Zero.
        if daily_data.get(&day).copied().unwrap_or(0) != 0 {
            break;
        }
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

/// Aggregates `series` with the default gap policy and the last recorded date as "today".
pub fn aggregate(series: &RawSeries) -> Result<DrinkingData, AggregateError> {
    Aggregator::new().aggregate(series)
}
