//! Error types for drinkdash-core.

use chrono::NaiveDate;

/// Precondition failures detected before any aggregation work starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    /// Returned when the series has no day records.
    #[error("series has no day records")]
    EmptySeries,

    /// Returned when a count is negative or does not fit a daily count.
    #[error("invalid count {count} on {date}")]
    InvalidInput {
        /// Date of the offending record.
        date: NaiveDate,
        /// The rejected count.
        count: i64,
    },

    /// Returned when records belong to more than one calendar year.
    #[error("series spans more than one year: {first} and {other}")]
    MixedYears {
        /// Year of the earliest record.
        first: i32,
        /// Year of the first record outside `first`.
        other: i32,
    },

    /// Returned under `GapPolicy::Reject` when dates inside the series span have no entry.
    #[error("series is missing {missing} day(s), first gap at {first_missing}")]
    MissingDays {
        /// Earliest date without an entry.
        first_missing: NaiveDate,
        /// Number of dates without an entry.
        missing: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_message() {
        assert_eq!(AggregateError::EmptySeries.to_string(), "series has no day records");
    }

    #[test]
    fn test_invalid_input_message() {
        let e = AggregateError::InvalidInput {
            date: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            count: -1,
        };
        assert_eq!(e.to_string(), "invalid count -1 on 2024-03-03");
    }

    #[test]
    fn test_mixed_years_message() {
        let e = AggregateError::MixedYears { first: 2024, other: 2025 };
        assert_eq!(e.to_string(), "series spans more than one year: 2024 and 2025");
    }

    #[test]
    fn test_missing_days_message() {
        let e = AggregateError::MissingDays {
            first_missing: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            missing: 3,
        };
        assert_eq!(e.to_string(), "series is missing 3 day(s), first gap at 2024-01-02");
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync + 'static>() {}
        assert_impl::<AggregateError>();
    }
}
