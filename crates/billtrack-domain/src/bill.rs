//! Domain models for recurring bill templates and their dated instances.

use std::fmt;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::*, frequency::Frequency};

/// Upper bound on the number of instances a single expansion may produce.
///
/// Weekly bills over one year yield 52 occurrences, the largest count of any
/// supported frequency over that horizon.
pub const MAX_INSTANCES: u32 = 52;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// User-specified recurring bill definition, prior to expansion.
pub struct BillTemplate {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub amount: Decimal,
    pub start_date: NaiveDate,
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_days: Option<u32>,
}

impl BillTemplate {
    pub fn new(
        name: impl Into<String>,
        amount: Decimal,
        start_date: NaiveDate,
        frequency: Frequency,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: String::new(),
            amount,
            start_date,
            frequency,
            end_date: None,
            notes: None,
            payment_method_id: None,
            reminder_days: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_payment_method(mut self, payment_method_id: Uuid) -> Self {
        self.payment_method_id = Some(payment_method_id);
        self
    }

    pub fn with_reminder_days(mut self, days: u32) -> Self {
        self.reminder_days = Some(days);
        self
    }

    /// Builds the unpaid instance for `occurrence_index` falling on `due_date`.
    pub fn instance(&self, occurrence_index: u32, due_date: NaiveDate) -> BillInstance {
        let remind_on = self
            .reminder_days
            .and_then(|days| due_date.checked_sub_signed(Duration::days(i64::from(days))));
        BillInstance {
            template_id: self.id,
            occurrence_index,
            name: self.name.clone(),
            category: self.category.clone(),
            amount: self.amount,
            due_date,
            remind_on,
            notes: self.notes.clone(),
            payment_method_id: self.payment_method_id,
            status: BillStatus::Unpaid,
        }
    }
}

impl Identifiable for BillTemplate {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for BillTemplate {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for BillTemplate {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Displayable for BillTemplate {
    fn display_label(&self) -> String {
        format!("{} ({}, from {})", self.name, self.frequency, self.start_date)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
/// Payment state of a materialised bill. Generated instances are always unpaid.
pub enum BillStatus {
    #[default]
    Unpaid,
    Paid,
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BillStatus::Unpaid => "Unpaid",
            BillStatus::Paid => "Paid",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// One concrete, dated occurrence of a bill, ready for persistence.
pub struct BillInstance {
    pub template_id: Uuid,
    pub occurrence_index: u32,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remind_on: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<Uuid>,
    #[serde(default)]
    pub status: BillStatus,
}

impl BillInstance {
    pub fn is_paid(&self) -> bool {
        self.status == BillStatus::Paid
    }

    /// An unpaid bill whose due date lies before `reference` is overdue.
    pub fn is_overdue(&self, reference: NaiveDate) -> bool {
        !self.is_paid() && self.due_date < reference
    }

    /// Whole days from `reference` until the due date; negative once past due.
    pub fn days_until_due(&self, reference: NaiveDate) -> i64 {
        (self.due_date - reference).num_days()
    }
}

impl NamedEntity for BillInstance {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for BillInstance {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Displayable for BillInstance {
    fn display_label(&self) -> String {
        format!("{} due {} [{}]", self.name, self.due_date, self.status)
    }
}
