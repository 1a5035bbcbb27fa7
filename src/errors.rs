use billtrack_config::ConfigError;
use billtrack_core::InvalidTemplateError;
use thiserror::Error;

/// Error type that captures failures surfaced by the planner facade.
#[derive(Debug, Error)]
pub enum BillTrackError {
    #[error("Invalid bill template: {0}")]
    Template(#[from] InvalidTemplateError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
