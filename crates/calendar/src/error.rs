//! Error types for the rpgcal-calendar crate.

/// Error type for all fallible operations in the rpgcal-calendar crate.
///
/// Stepping a [`CalendarDate`](crate::CalendarDate) never fails; only
/// building one from caller-supplied fields can.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a day-of-week value is outside 1..=7.
    #[error("invalid day: {day} (must be 1..=7)")]
    InvalidDay {
        /// The invalid day value that was provided.
        day: u8,
    },

    /// Returned when a week-of-month value is outside 1..=4.
    #[error("invalid week: {week} (must be 1..=4)")]
    InvalidWeek {
        /// The invalid week value that was provided.
        week: u8,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a lunar cycle name is neither `weekly` nor `yearly`.
    #[error("unknown lunar cycle: {name:?} (expected weekly or yearly)")]
    UnknownLunarCycle {
        /// The name that was provided.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay { day: 8 };
        assert_eq!(err.to_string(), "invalid day: 8 (must be 1..=7)");
    }

    #[test]
    fn error_invalid_week() {
        let err = CalendarError::InvalidWeek { week: 0 };
        assert_eq!(err.to_string(), "invalid week: 0 (must be 1..=4)");
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_unknown_lunar_cycle() {
        let err = CalendarError::UnknownLunarCycle {
            name: "monthly".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown lunar cycle: \"monthly\" (expected weekly or yearly)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidMonth { month: 0 };
        let b = CalendarError::InvalidMonth { month: 0 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidWeek { week: 0 };
        assert_ne!(a, c);
    }
}
