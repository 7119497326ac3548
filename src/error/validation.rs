use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("--delay-min ({min_ms}ms) must be <= --delay-max ({max_ms}ms).")]
    DelayBoundsInverted { min_ms: u128, max_ms: u128 },
    #[error("--payload-min ({min}) must be <= --payload-max ({max}).")]
    PayloadBoundsInverted { min: usize, max: usize },
    #[error("{0}")]
    Message(String),
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        ValidationError::Message(message)
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        ValidationError::Message(message.to_owned())
    }
}
