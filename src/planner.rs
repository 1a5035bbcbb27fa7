//! Facade wiring configuration, the recurrence expander and a clock together.

use std::borrow::Cow;

use billtrack_config::{Config, ConfigManager};
use billtrack_core::{
    BillMetrics, BillTemplateDraft, Clock, DueStatus, RecurrenceExpander, ScheduleService,
    SummaryService, SystemClock,
};
use billtrack_domain::{BillInstance, BillTemplate};
use chrono::NaiveDate;
use tracing::info;

use crate::BillTrackError;

/// Entry point for callers that want configured expansion and "today"-relative views.
pub struct BillPlanner {
    config: Config,
    expander: RecurrenceExpander,
    clock: Box<dyn Clock>,
}

impl BillPlanner {
    pub fn new(config: Config) -> Result<Self, BillTrackError> {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Box<dyn Clock>) -> Result<Self, BillTrackError> {
        config.validate()?;
        let expander = RecurrenceExpander::from_config(&config);
        Ok(Self {
            config,
            expander,
            clock,
        })
    }

    pub fn from_manager(manager: &ConfigManager) -> Result<Self, BillTrackError> {
        let config = manager.load()?;
        info!(
            "loaded planner configuration from {}",
            manager.config_path().display()
        );
        Self::new(config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn expander(&self) -> RecurrenceExpander {
        self.expander
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Expands `template`, filling in the configured reminder lead time when it has none.
    pub fn expand(&self, template: &BillTemplate) -> Result<Vec<BillInstance>, BillTrackError> {
        let template = self.with_default_reminder(template);
        Ok(self.expander.expand(&template)?)
    }

    /// Parses raw form input and expands it in one step. The returned template
    /// carries the reminder lead time its instances were generated with.
    pub fn expand_draft(
        &self,
        draft: BillTemplateDraft,
    ) -> Result<(BillTemplate, Vec<BillInstance>), BillTrackError> {
        let parsed = BillTemplate::try_from(draft)?;
        let template = self.with_default_reminder(&parsed).into_owned();
        let instances = self.expander.expand(&template)?;
        Ok((template, instances))
    }

    /// The next `preview_count` due dates of `template`.
    pub fn preview(&self, template: &BillTemplate) -> Result<Vec<NaiveDate>, BillTrackError> {
        Ok(self.expander.preview(template, self.config.preview_count)?)
    }

    pub fn status(&self, instance: &BillInstance) -> DueStatus {
        ScheduleService::classify_today(instance, self.clock.as_ref(), self.config.due_soon_days)
    }

    pub fn next_due<'a>(&self, instances: &'a [BillInstance]) -> Option<&'a BillInstance> {
        ScheduleService::next_due(instances, self.today())
    }

    pub fn reminders_due<'a>(&self, instances: &'a [BillInstance]) -> Vec<&'a BillInstance> {
        ScheduleService::reminders_due(instances, self.today())
    }

    pub fn metrics(&self, instances: &[BillInstance]) -> BillMetrics {
        SummaryService::metrics(instances, self.today())
    }

    fn with_default_reminder<'a>(&self, template: &'a BillTemplate) -> Cow<'a, BillTemplate> {
        match (template.reminder_days, self.config.default_reminder_days) {
            (None, Some(days)) => Cow::Owned(template.clone().with_reminder_days(days)),
            _ => Cow::Borrowed(template),
        }
    }
}
