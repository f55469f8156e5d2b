use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use anyhow::Result;

use crate::model::day_record::DailyData;
use crate::time::{month_label, week_end, week_start, year_bounds};

/// Colour bucket for one heatmap square.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Intensity {
    None,
    Light,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl Intensity {
    pub const ALL: [Intensity; 6] = [
        Intensity::None,
        Intensity::Light,
        Intensity::Moderate,
        Intensity::High,
        Intensity::VeryHigh,
        Intensity::Extreme,
    ];

    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Intensity::None,
            1..=2 => Intensity::Light,
            3..=4 => Intensity::Moderate,
            5..=6 => Intensity::High,
            7..=8 => Intensity::VeryHigh,
            _ => Intensity::Extreme,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Intensity::None => "No drinks",
            Intensity::Light => "Light",
            Intensity::Moderate => "Moderate",
            Intensity::High => "High",
            Intensity::VeryHigh => "Very high",
            Intensity::Extreme => "Extreme",
        }
    }

    /// 0 for `None` up to 5 for `Extreme`.
    pub fn level(&self) -> usize {
        *self as usize
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    /// `None` for padding days outside the heatmap's year.
    pub count: Option<u32>,
}

impl HeatmapCell {
    pub fn in_year(&self) -> bool {
        self.count.is_some()
    }

    pub fn intensity(&self) -> Option<Intensity> {
        self.count.map(Intensity::from_count)
    }

    /// e.g. `"Mar 3, 2026: 10 drinks (Extreme)"`; `None` for padding cells.
    pub fn tooltip(&self) -> Option<String> {
        self.count.map(|count| {
            format!(
                "{}: {} drinks ({})",
                self.date.format("%b %-d, %Y"),
                count,
                Intensity::from_count(count).label()
            )
        })
    }
}

/// Sunday-first week columns covering one calendar year.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CalendarHeatmap {
    pub year: i32,
    pub weeks: Vec<[HeatmapCell; 7]>,
    /// (week column, month label) for every week holding the 1st of a month.
    pub month_labels: Vec<(usize, &'static str)>,
}

impl CalendarHeatmap {
    /// In-year days missing from `daily` show as zero.
    pub fn build(year: i32, daily: &DailyData) -> Result<Self> {
        let (start, end) = year_bounds(year)?;
        let grid_start = week_start(start)?;
        let grid_end = week_end(end)?;

        let mut weeks = Vec::new();
        let mut month_labels = Vec::new();
        let mut sunday = grid_start;
        while sunday <= grid_end {
            let week: [HeatmapCell; 7] = std::array::from_fn(|offset| {
                let date = sunday + Duration::days(offset as i64);
                let count = if date.year() == year {
                    Some(daily.get(&date).copied().unwrap_or(0))
                } else {
                    None
                };
                HeatmapCell { date, count }
            });

            if let Some(first) = week.iter().find(|c| c.in_year() && c.date.day() == 1) {
                month_labels.push((weeks.len(), month_label(first.date.month0() as usize)));
            }

            weeks.push(week);
            match sunday.checked_add_signed(Duration::weeks(1)) {
                Some(next) => sunday = next,
                None => break,
            }
        }

        Ok(Self { year, weeks, month_labels })
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&HeatmapCell> {
        let first = self.weeks.first()?[0].date;
        let offset = (date - first).num_days();
        if offset < 0 {
            return None;
        }
        let offset = offset as usize;
        self.weeks.get(offset / 7).map(|week| &week[offset % 7])
    }

    /// Number of in-year days per intensity level, indexed by `Intensity::level`.
    pub fn level_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for intensity in self.weeks.iter().flatten().filter_map(HeatmapCell::intensity) {
            counts[intensity.level()] += 1;
        }
        counts
    }
}
