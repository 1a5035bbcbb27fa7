//! Expansion of recurring bill templates into dated instances.

use billtrack_config::Config;
use billtrack_domain::{BillInstance, BillTemplate, Frequency, Identifiable};
use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::{validate_template, InvalidTemplateError};

pub use billtrack_domain::MAX_INSTANCES;

/// Turns a bill template into the bounded, ordered list of its occurrences.
///
/// The expander holds no state beyond its instance cap, so one value can be
/// shared freely between callers and threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceExpander {
    max_instances: u32,
}

impl Default for RecurrenceExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl RecurrenceExpander {
    pub const fn new() -> Self {
        Self {
            max_instances: MAX_INSTANCES,
        }
    }

    /// Caps expansions at `limit` instances. The cap is clamped to `1..=MAX_INSTANCES`.
    pub fn with_max_instances(limit: u32) -> Self {
        Self {
            max_instances: limit.clamp(1, MAX_INSTANCES),
        }
    }

    /// Builds an expander capped at the configured `max_instances`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_max_instances(config.max_instances)
    }

    pub fn max_instances(&self) -> u32 {
        self.max_instances
    }

    /// Expands `template` into its unpaid instances.
    ///
    /// Occurrence 0 always falls on the start date. Generation stops at the
    /// first occurrence due after the end date, or once the cap is reached.
    pub fn expand(
        &self,
        template: &BillTemplate,
    ) -> Result<Vec<BillInstance>, InvalidTemplateError> {
        checked(template)?;

        let instances: Vec<BillInstance> = self
            .due_dates(template)
            .enumerate()
            .map(|(index, due_date)| template.instance(index as u32, due_date))
            .collect();

        debug!(
            "expanded {} bill `{}` into {} instance(s)",
            template.frequency,
            template.id(),
            instances.len()
        );
        Ok(instances)
    }

    /// Returns at most `count` due dates, following the same rules as
    /// [`expand`](Self::expand).
    pub fn preview(
        &self,
        template: &BillTemplate,
        count: usize,
    ) -> Result<Vec<NaiveDate>, InvalidTemplateError> {
        checked(template)?;
        Ok(self.due_dates(template).take(count).collect())
    }

    fn due_dates(&self, template: &BillTemplate) -> DueDates {
        DueDates {
            start: template.start_date,
            frequency: template.frequency,
            end: template.end_date,
            index: 0,
            limit: self.max_instances,
            finished: false,
        }
    }
}

/// Expands `template` with the default instance cap.
pub fn expand(template: &BillTemplate) -> Result<Vec<BillInstance>, InvalidTemplateError> {
    RecurrenceExpander::new().expand(template)
}

fn checked(template: &BillTemplate) -> Result<(), InvalidTemplateError> {
    validate_template(template).map_err(|err| {
        warn!("bill template `{}` rejected: {}", template.id(), err);
        err
    })
}

struct DueDates {
    start: NaiveDate,
    frequency: Frequency,
    end: Option<NaiveDate>,
    index: u32,
    limit: u32,
    finished: bool,
}

impl Iterator for DueDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.finished || self.index >= self.limit {
            return None;
        }
        let due = match self.frequency.occurrence(self.start, self.index) {
            Some(due) => due,
            None => {
                self.finished = true;
                return None;
            }
        };
        if self.end.is_some_and(|end| due > end) {
            self.finished = true;
            return None;
        }
        self.index += 1;
        Some(due)
    }
}
