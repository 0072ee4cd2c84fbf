//! Error types for the rpgcal-report crate.

use rpgcal_calendar::CalendarError;

/// Error type for all fallible operations in the rpgcal-report crate.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Returned when a machine record does not have exactly six fields.
    #[error("machine record has {found} fields (expected 6)")]
    FieldCount {
        /// The number of comma-separated fields found.
        found: usize,
    },

    /// Returned when a machine record field is not an integer of the right width.
    #[error("machine record field {index} is not a valid integer: {value:?}")]
    BadField {
        /// Zero-based position of the field.
        index: usize,
        /// The raw field text.
        value: String,
    },

    /// Returned when the recorded season disagrees with the recorded month.
    #[error("machine record season {recorded} does not match month (expected {derived})")]
    SeasonMismatch {
        /// Season number stored in the record.
        recorded: u8,
        /// Season number derived from the record's month.
        derived: u8,
    },

    /// Returned when the recorded lunar phase disagrees with the lunar policy.
    #[error("machine record lunar phase {recorded} does not match policy (expected {derived})")]
    LunarPhaseMismatch {
        /// Lunar phase number stored in the record.
        recorded: u8,
        /// Lunar phase number derived by the policy.
        derived: u8,
    },

    /// Returned when a report style name is not recognised.
    #[error("unknown report style: {name:?}")]
    UnknownStyle {
        /// The name that was provided.
        name: String,
    },

    /// Returned when the record fields do not form a valid date.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Returned when JSON encoding fails.
    #[error("failed to encode machine record as JSON")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_count() {
        let err = ReportError::FieldCount { found: 4 };
        assert_eq!(err.to_string(), "machine record has 4 fields (expected 6)");
    }

    #[test]
    fn error_bad_field() {
        let err = ReportError::BadField {
            index: 3,
            value: "x".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "machine record field 3 is not a valid integer: \"x\""
        );
    }

    #[test]
    fn error_calendar_is_transparent() {
        let err = ReportError::from(CalendarError::InvalidMonth { month: 0 });
        assert_eq!(err.to_string(), "invalid month: 0 (must be 1..=12)");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<ReportError>();
    }
}
