//! Conversion of raw form input into validated bill templates.

use std::str::FromStr;

use billtrack_domain::{BillTemplate, Frequency};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{validate_template, InvalidTemplateError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Unparsed values as collected by a bill entry form.
///
/// Empty strings stand for "not provided" on the optional fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillTemplateDraft {
    pub name: String,
    pub category: String,
    pub amount: String,
    pub due_date: String,
    pub frequency: String,
    pub end_date: String,
    pub notes: String,
    pub payment_method_id: Option<Uuid>,
    pub reminder_days: Option<u32>,
}

impl TryFrom<BillTemplateDraft> for BillTemplate {
    type Error = InvalidTemplateError;

    fn try_from(draft: BillTemplateDraft) -> Result<Self, Self::Error> {
        let amount = Decimal::from_str(draft.amount.trim())
            .map_err(|_| InvalidTemplateError::InvalidAmount(draft.amount.clone()))?;
        let start_date = parse_date("due date", &draft.due_date)?;
        let frequency = Frequency::from_str(&draft.frequency)?;
        let end_date = match non_empty(&draft.end_date) {
            Some(raw) => Some(parse_date("end date", raw)?),
            None => None,
        };

        let template = BillTemplate {
            id: Uuid::new_v4(),
            name: draft.name.trim().to_string(),
            category: draft.category.trim().to_string(),
            amount,
            start_date,
            frequency,
            end_date,
            notes: non_empty(&draft.notes).map(str::to_string),
            payment_method_id: draft.payment_method_id,
            reminder_days: draft.reminder_days,
        };
        validate_template(&template)?;
        Ok(template)
    }
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, InvalidTemplateError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        InvalidTemplateError::InvalidDate {
            field,
            value: raw.to_string(),
        }
    })
}

fn non_empty(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
