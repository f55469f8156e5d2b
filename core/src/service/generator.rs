use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::model::day_record::RawSeries;

/// Source of per-day counts for a dashboard load.
pub trait SeriesGenerator {
    fn count_for(&self, date: NaiveDate) -> i64;

    /// One entry for every calendar day of `year`.
    fn build_series(&self, year: i32) -> RawSeries {
        let series: RawSeries = NaiveDate::from_ymd_opt(year, 1, 1)
            .into_iter()
            .flat_map(|start| start.iter_days())
            .take_while(|day| day.year() == year)
            .map(|day| (day, self.count_for(day)))
            .collect();
        debug!(year, days = series.len(), "built series");
        series
    }
}

/// Day-of-week shaped pseudo-random counts.
///
/// Each date gets its own RNG derived from the seed and the date, so a
/// count never depends on which other days were generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticGenerator {
    seed: u64,
}

struct DayProfile {
    dry_chance: f64,
    min: i64,
    max: i64,
}

const HEAVY: DayProfile = DayProfile { dry_chance: 0.25, min: 2, max: 10 };
const MEDIUM: DayProfile = DayProfile { dry_chance: 0.45, min: 1, max: 6 };
const LIGHT: DayProfile = DayProfile { dry_chance: 0.60, min: 1, max: 4 };

impl SyntheticGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn rng_for(&self, date: NaiveDate) -> StdRng {
        // splitmix-style spread so neighbouring days get unrelated streams
        let day = date.num_days_from_ce() as u64;
        let mixed = (self.seed ^ day.wrapping_mul(0x9E37_79B9_7F4A_7C15)).rotate_left(31);
        StdRng::seed_from_u64(mixed)
    }
}

impl SeriesGenerator for SyntheticGenerator {
    fn count_for(&self, date: NaiveDate) -> i64 {
        let profile = match date.weekday() {
            Weekday::Fri | Weekday::Sat => &HEAVY,
            Weekday::Sun => &MEDIUM,
            _ => &LIGHT,
        };
        let mut rng = self.rng_for(date);
        if rng.random_bool(profile.dry_chance) {
            0
        } else {
            rng.random_range(profile.min..=profile.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(i64);

    impl SeriesGenerator for Constant {
        fn count_for(&self, _date: NaiveDate) -> i64 {
            self.0
        }
    }

    #[test]
    fn test_build_series_covers_every_day() {
        let series = Constant(1).build_series(2026);
        assert_eq!(series.len(), 365);
        assert_eq!(series.keys().next(), NaiveDate::from_ymd_opt(2026, 1, 1).as_ref());
        assert_eq!(series.keys().next_back(), NaiveDate::from_ymd_opt(2026, 12, 31).as_ref());
        assert_eq!(Constant(0).build_series(2024).len(), 366);
    }

    #[test]
    fn test_synthetic_is_deterministic_per_seed() {
        let a = SyntheticGenerator::new(7).build_series(2026);
        let b = SyntheticGenerator::new(7).build_series(2026);
        assert_eq!(a, b);
        let c = SyntheticGenerator::new(8).build_series(2026);
        assert_ne!(a, c);
    }

    #[test]
    fn test_synthetic_counts_stay_in_range() {
        let series = SyntheticGenerator::new(42).build_series(2025);
        for (date, count) in &series {
            let max = match date.weekday() {
                Weekday::Fri | Weekday::Sat => 10,
                Weekday::Sun => 6,
                _ => 4,
            };
            assert!((0..=max).contains(count), "{} -> {}", date, count);
        }
        assert!(series.values().any(|c| *c == 0));
        assert!(series.values().any(|c| *c > 0));
    }

    #[test]
    fn test_count_for_matches_series_entry() {
        let generator = SyntheticGenerator::new(3);
        let date = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
        let series = generator.build_series(2026);
        assert_eq!(series[&date], generator.count_for(date));
    }

    #[test]
    fn test_weekends_are_heavier() {
        let series = SyntheticGenerator::new(11).build_series(2025);
        let mean = |pick: fn(Weekday) -> bool| {
            let values: Vec<i64> = series
                .iter()
                .filter(|(date, _)| pick(date.weekday()))
                .map(|(_, c)| *c)
                .collect();
            values.iter().sum::<i64>() as f64 / values.len() as f64
        };
        let weekend = mean(|w| matches!(w, Weekday::Fri | Weekday::Sat));
        let midweek = mean(|w| matches!(w, Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu));
        assert!(weekend > midweek);
    }
}
