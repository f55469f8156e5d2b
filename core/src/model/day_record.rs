use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Generator output and aggregator input. Counts are signed so bad input stays representable.
pub type RawSeries = BTreeMap<NaiveDate, i64>;

/// Validated day -> count mapping, keyed by date (serialized as `YYYY-MM-DD`).
pub type DailyData = BTreeMap<NaiveDate, u32>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub count: u32,
}

impl DayRecord {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }

    pub fn is_dry(&self) -> bool {
        self.count == 0
    }
}

impl From<(&NaiveDate, &u32)> for DayRecord {
    fn from((date, count): (&NaiveDate, &u32)) -> Self {
        Self::new(*date, *count)
    }
}
