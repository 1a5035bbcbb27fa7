//! billtrack-core
//!
//! Recurring bill expansion and scheduling helpers.
//! Depends on billtrack-domain. No persistence, no network, no terminal I/O.

pub mod draft;
pub mod error;
pub mod expander;
pub mod schedule_service;
pub mod summary_service;
pub mod time;
pub mod validation;

pub use draft::BillTemplateDraft;
pub use error::InvalidTemplateError;
pub use expander::*;
pub use schedule_service::*;
pub use summary_service::*;
pub use time::{Clock, SystemClock};
pub use validation::validate_template;

#[cfg(test)]
mod tests;
