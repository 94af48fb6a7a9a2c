// Configuration errors

/// Error type for invalid generator configuration.
///
/// Every variant is detected before generation starts; a run with an invalid
/// configuration produces no output at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A year value is not exactly four decimal digits.
    #[error("invalid year {0:?}: expected the form YYYY")]
    InvalidYear(String),

    /// An age value is not exactly two decimal digits.
    #[error("invalid age {0:?}: expected the form YY")]
    InvalidAge(String),

    /// More than two values were given for a year or age option.
    #[error("at most two values are accepted for {option}, got {count}")]
    TooManyValues { option: &'static str, count: usize },

    #[error("year range is reversed: {start:04} > {end:04}")]
    YearRange { start: u16, end: u16 },

    #[error("age range is reversed: {start:02} > {end:02}")]
    AgeRange { start: u8, end: u8 },

    #[error("min-length {min} is greater than max-length {max}")]
    LengthBounds { min: usize, max: usize },

    /// The all-possible-cases cap is beyond what can be enumerated.
    #[error("case-letter cap {cap} exceeds the supported maximum of {max}")]
    CaseCapTooLarge { cap: usize, max: usize },
}
