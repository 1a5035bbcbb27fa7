#![doc(test(attr(deny(warnings))))]

//! Billtrack turns recurring bill definitions into dated, unpaid bill
//! instances and offers the due-date and totals helpers dashboards need.
//!
//! ```
//! use billtrack::{expand, BillTemplate, Frequency};
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 4, 30).unwrap();
//! let template = BillTemplate::new("Rent", Decimal::new(120000, 2), start, Frequency::Monthly)
//!     .with_end_date(end);
//!
//! let instances = expand(&template).unwrap();
//! assert_eq!(instances.len(), 4);
//! assert_eq!(instances[2].due_date, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
//! ```

pub mod errors;
pub mod planner;
pub mod utils;

pub use billtrack_config::{Config, ConfigError, ConfigManager};
pub use billtrack_core::{
    expand, BillMetrics, BillTemplateDraft, Clock, DueStatus, InvalidTemplateError,
    RecurrenceExpander, ScheduleService, SummaryService, SystemClock, MAX_INSTANCES,
};
pub use billtrack_domain::{BillInstance, BillStatus, BillTemplate, Frequency};
pub use errors::BillTrackError;
pub use planner::BillPlanner;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Billtrack tracing initialized.");
    });
}
