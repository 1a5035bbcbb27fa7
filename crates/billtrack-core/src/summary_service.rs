//! Dashboard totals over materialised bill instances.

use billtrack_domain::{Amounted, BillInstance};
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillMetrics {
    pub bill_count: usize,
    pub total_due: Decimal,
    pub total_paid: Decimal,
    pub remaining_balance: Decimal,
    pub overdue_count: usize,
}

impl BillMetrics {
    /// Aggregates `instances` as of `reference`. `total_due` counts every bill,
    /// paid or not; `remaining_balance` is what is still unpaid.
    pub fn from_instances(instances: &[BillInstance], reference: NaiveDate) -> Self {
        let mut metrics = BillMetrics {
            bill_count: instances.len(),
            ..BillMetrics::default()
        };
        for instance in instances {
            metrics.total_due += instance.amount();
            if instance.is_paid() {
                metrics.total_paid += instance.amount();
            } else if instance.is_overdue(reference) {
                metrics.overdue_count += 1;
            }
        }
        metrics.remaining_balance = metrics.total_due - metrics.total_paid;
        metrics
    }
}

pub struct SummaryService;

impl SummaryService {
    pub fn metrics(instances: &[BillInstance], reference: NaiveDate) -> BillMetrics {
        BillMetrics::from_instances(instances, reference)
    }

    /// Totals restricted to instances due within `[start, end]`, inclusive.
    pub fn metrics_between(
        instances: &[BillInstance],
        start: NaiveDate,
        end: NaiveDate,
        reference: NaiveDate,
    ) -> BillMetrics {
        let window: Vec<BillInstance> = instances
            .iter()
            .filter(|instance| instance.due_date >= start && instance.due_date <= end)
            .cloned()
            .collect();
        BillMetrics::from_instances(&window, reference)
    }
}
