//! Recurrence cadences supported for bills.

use std::{fmt, str::FromStr};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::{add_months_clamped, add_years_clamped};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Enumerates how often a recurring bill comes due.
pub enum Frequency {
    Weekly,
    Monthly,
    Quarterly,
    #[serde(alias = "yearly")]
    Annually,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::Annually,
    ];

    /// Returns the due date of occurrence `index`, counted from `start`.
    ///
    /// Every occurrence is derived from `start` directly, never from the
    /// previous occurrence, so month-end clamping does not accumulate.
    pub fn occurrence(self, start: NaiveDate, index: u32) -> Option<NaiveDate> {
        match self {
            Frequency::Weekly => start.checked_add_signed(Duration::weeks(i64::from(index))),
            Frequency::Monthly => add_months_clamped(start, index),
            Frequency::Quarterly => add_months_clamped(start, index.checked_mul(3)?),
            Frequency::Annually => add_years_clamped(start, index),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Annually => "annually",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Annually => "Annually",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a frequency name is not one of the supported cadences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown frequency `{0}`")]
pub struct ParseFrequencyError(pub String);

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "annually" | "yearly" => Ok(Frequency::Annually),
            _ => Err(ParseFrequencyError(value.to_string())),
        }
    }
}
