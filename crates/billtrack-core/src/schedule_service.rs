//! Due-date classification for materialised bill instances.

use std::fmt;

use billtrack_domain::BillInstance;
use chrono::NaiveDate;

use crate::time::Clock;

pub use billtrack_config::model::DEFAULT_DUE_SOON_DAYS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Where an instance stands relative to a reference date.
pub enum DueStatus {
    Paid,
    Overdue,
    DueToday,
    DueSoon,
    Upcoming,
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DueStatus::Paid => "Paid",
            DueStatus::Overdue => "Overdue",
            DueStatus::DueToday => "Due Today",
            DueStatus::DueSoon => "Due Soon",
            DueStatus::Upcoming => "Upcoming",
        };
        f.write_str(label)
    }
}

pub struct ScheduleService;

impl ScheduleService {
    /// Classifies `instance` against `reference`; `due_soon_days` bounds the "due soon" window.
    pub fn classify(
        instance: &BillInstance,
        reference: NaiveDate,
        due_soon_days: u32,
    ) -> DueStatus {
        if instance.is_paid() {
            return DueStatus::Paid;
        }
        match instance.days_until_due(reference) {
            days if days < 0 => DueStatus::Overdue,
            0 => DueStatus::DueToday,
            days if days <= i64::from(due_soon_days) => DueStatus::DueSoon,
            _ => DueStatus::Upcoming,
        }
    }

    pub fn classify_today(
        instance: &BillInstance,
        clock: &dyn Clock,
        due_soon_days: u32,
    ) -> DueStatus {
        Self::classify(instance, clock.today(), due_soon_days)
    }

    /// Human-readable distance to the due date, e.g. "Due in 4 days" or "2 days overdue".
    pub fn describe_due(instance: &BillInstance, reference: NaiveDate) -> String {
        match instance.days_until_due(reference) {
            days if days < 0 => {
                let overdue = days.unsigned_abs();
                format!("{} day{} overdue", overdue, if overdue == 1 { "" } else { "s" })
            }
            0 => "Due today".into(),
            1 => "Due tomorrow".into(),
            days => format!("Due in {} days", days),
        }
    }

    /// Earliest unpaid instance due on or after `reference`.
    pub fn next_due<'a>(
        instances: &'a [BillInstance],
        reference: NaiveDate,
    ) -> Option<&'a BillInstance> {
        instances
            .iter()
            .filter(|instance| !instance.is_paid() && instance.due_date >= reference)
            .min_by_key(|instance| instance.due_date)
    }

    /// Unpaid instances due before `reference`, oldest first.
    pub fn overdue<'a>(
        instances: &'a [BillInstance],
        reference: NaiveDate,
    ) -> Vec<&'a BillInstance> {
        let mut overdue: Vec<&BillInstance> = instances
            .iter()
            .filter(|instance| instance.is_overdue(reference))
            .collect();
        overdue.sort_by_key(|instance| instance.due_date);
        overdue
    }

    /// Unpaid instances whose reminder date has arrived but which are not yet past due.
    pub fn reminders_due<'a>(
        instances: &'a [BillInstance],
        reference: NaiveDate,
    ) -> Vec<&'a BillInstance> {
        instances
            .iter()
            .filter(|instance| !instance.is_paid() && instance.due_date >= reference)
            .filter(|instance| instance.remind_on.is_some_and(|day| day <= reference))
            .collect()
    }
}
