use billtrack_domain::ParseFrequencyError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Raised before expansion begins when a bill template is malformed.
///
/// Every variant is caller-correctable; no partial output accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTemplateError {
    #[error("Bill name is required")]
    EmptyName,
    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(Decimal),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("End date {end} must be after start date {start}")]
    EndNotAfterStart { start: NaiveDate, end: NaiveDate },
    #[error("Unknown frequency: {0}")]
    UnknownFrequency(String),
    #[error("Invalid {field}: `{value}` (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },
}

impl From<ParseFrequencyError> for InvalidTemplateError {
    fn from(err: ParseFrequencyError) -> Self {
        InvalidTemplateError::UnknownFrequency(err.0)
    }
}
