use serde::Serialize;
use crate::model::stats::DrinkingData;

/// A streak of this many dry days fills the progress bar.
const STREAK_GOAL_DAYS: f64 = 30.0;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StatCard {
    pub name: &'static str,
    pub value: String,
    pub description: &'static str,
    // 0.0..=1.0, only the streak card tracks progress
    pub progress: Option<f64>,
}

impl StatCard {
    pub fn from_data(data: &DrinkingData) -> Vec<StatCard> {
        let highest = data.highest_month();
        vec![
            StatCard {
                name: "Total Drinks",
                value: data.total_drinks().to_string(),
                description: "All time total",
                progress: None,
            },
            StatCard {
                name: "Average per Month",
                value: format!("{:.1}", data.average_per_month()),
                description: "Monthly average",
                progress: None,
            },
            StatCard {
                name: "Highest Month",
                value: format!("{} ({})", highest.total_drinks(), highest.label()),
                description: "Peak consumption",
                progress: None,
            },
            StatCard {
                name: "Current Streak",
                value: format!("{} days", data.current_streak()),
                description: "Zero-drink days",
                progress: Some(streak_progress(data.current_streak())),
            },
        ]
    }
}

pub fn streak_progress(streak: u32) -> f64 {
    (streak as f64 / STREAK_GOAL_DAYS).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::day_record::RawSeries;
    use crate::service::aggregator::Aggregator;
    use chrono::NaiveDate;

    #[test]
    fn test_cards_format_summary() {
        let mut series = RawSeries::new();
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        for (i, day) in start.iter_days().take(20).enumerate() {
            series.insert(day, if i == 2 { 10 } else { 0 });
        }
        let data = Aggregator::new().aggregate(&series).unwrap();
        let cards = StatCard::from_data(&data);

        let names: Vec<&str> = cards.iter().map(|c| c.name).collect();
        assert_eq!(names, ["Total Drinks", "Average per Month", "Highest Month", "Current Streak"]);
        assert_eq!(cards[0].value, "10");
        assert_eq!(cards[1].value, "0.8");
        assert_eq!(cards[2].value, "10 (Mar)");
        assert_eq!(cards[3].value, "17 days");
        assert_eq!(cards[3].progress, Some(17.0 / 30.0));
        assert!(cards[..3].iter().all(|c| c.progress.is_none()));
    }

    #[test]
    fn test_streak_progress_caps_at_one() {
        assert_eq!(streak_progress(0), 0.0);
        assert_eq!(streak_progress(15), 0.5);
        assert_eq!(streak_progress(45), 1.0);
    }
}
