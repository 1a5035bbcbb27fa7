//! Eager validation of bill templates.

use billtrack_domain::{Amounted, BillTemplate, NamedEntity};
use rust_decimal::Decimal;

use crate::InvalidTemplateError;

/// Checks the template invariants the expander relies on.
///
/// Order matters only for which error is reported first: name, amount, then dates.
pub fn validate_template(template: &BillTemplate) -> Result<(), InvalidTemplateError> {
    if template.name().trim().is_empty() {
        return Err(InvalidTemplateError::EmptyName);
    }
    let amount = template.amount();
    if amount <= Decimal::ZERO {
        return Err(InvalidTemplateError::NonPositiveAmount(amount));
    }
    if let Some(end) = template.end_date {
        if end <= template.start_date {
            return Err(InvalidTemplateError::EndNotAfterStart {
                start: template.start_date,
                end,
            });
        }
    }
    Ok(())
}
