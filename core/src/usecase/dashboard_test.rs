
#[cfg(test)]
mod tests {
    use crate::error::AggregateError;
    use crate::service::aggregator::{Aggregator, GapPolicy};
    use crate::service::generator::{SeriesGenerator, SyntheticGenerator};
    use crate::usecase::dashboard::DashboardUseCase;
    use chrono::{Datelike, NaiveDate};
    use std::collections::BTreeMap;

    struct MockGenerator {
        counts: BTreeMap<NaiveDate, i64>,
    }

    impl SeriesGenerator for MockGenerator {
        fn count_for(&self, date: NaiveDate) -> i64 {
            self.counts.get(&date).copied().unwrap_or(0)
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_load_single_drinking_day() {
        let mut counts = BTreeMap::new();
        counts.insert(d(2026, 3, 3), 10);
        let generator = MockGenerator { counts };
        let usecase = DashboardUseCase::new(&generator, Aggregator::new());

        let dashboard = usecase.load(2026, d(2026, 3, 10)).unwrap();

        assert_eq!(dashboard.data.days_recorded(), 365);
        assert_eq!(dashboard.data.total_drinks(), 10);
        assert_eq!(dashboard.data.highest_month().label(), "Mar");
        assert_eq!(dashboard.data.current_streak(), 7);
        assert_eq!(dashboard.cards[3].value, "7 days");
        assert_eq!(dashboard.heatmap.cell(d(2026, 3, 3)).unwrap().count, Some(10));
    }

    #[test]
    fn test_load_propagates_invalid_counts() {
        let mut counts = BTreeMap::new();
        counts.insert(d(2026, 5, 5), -1);
        let generator = MockGenerator { counts };
        let usecase = DashboardUseCase::new(&generator, Aggregator::new());

        let err = usecase.load(2026, d(2026, 12, 31)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<AggregateError>(),
            Some(&AggregateError::InvalidInput { date: d(2026, 5, 5), count: -1 })
        );
    }

    #[test]
    fn test_full_year_passes_reject_policy() {
        let generator = SyntheticGenerator::new(42);
        let aggregator = Aggregator::new().with_gap_policy(GapPolicy::Reject);
        let dashboard = DashboardUseCase::new(&generator, aggregator)
            .load(2024, d(2024, 6, 30))
            .unwrap();

        assert_eq!(dashboard.data.days_recorded(), 366);
        let monthly: u64 = dashboard.data.monthly_data().iter().map(|m| m.total_drinks()).sum();
        assert_eq!(monthly, dashboard.data.total_drinks());
        assert_eq!(dashboard.heatmap.year, 2024);
    }

    #[test]
    fn test_synthetic_loads_are_reproducible() {
        let generator = SyntheticGenerator::new(5);
        let usecase = DashboardUseCase::new(&generator, Aggregator::new());
        let first = usecase.load(2026, d(2026, 10, 19)).unwrap();
        let second = usecase.load(2026, d(2026, 10, 19)).unwrap();
        assert_eq!(first.data, second.data);
        assert_eq!(first.cards, second.cards);
        assert!(first.data.daily_data().keys().all(|day| day.year() == 2026));
    }

    #[test]
    fn test_load_last_supported_year_is_error() {
        let generator = MockGenerator { counts: BTreeMap::new() };
        let usecase = DashboardUseCase::new(&generator, Aggregator::new());
        let year = NaiveDate::MAX.year();
        assert!(usecase.load(year, NaiveDate::MAX).is_err());
    }
}
