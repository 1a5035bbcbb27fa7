use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{expand, InvalidTemplateError, RecurrenceExpander, MAX_INSTANCES};
use billtrack_domain::{BillStatus, BillTemplate, Frequency};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn due_dates(template: &BillTemplate) -> Vec<NaiveDate> {
    expand(template)
        .expect("valid template")
        .into_iter()
        .map(|instance| instance.due_date)
        .collect()
}

fn monthly(start: NaiveDate) -> BillTemplate {
    BillTemplate::new("Car Payment", dec!(320.00), start, Frequency::Monthly)
}

#[test]
fn month_end_clamping_does_not_drift() {
    let template = monthly(date(2025, 1, 31)).with_end_date(date(2025, 4, 30));
    assert_eq!(
        due_dates(&template),
        vec![
            date(2025, 1, 31),
            date(2025, 2, 28),
            date(2025, 3, 31),
            date(2025, 4, 30),
        ]
    );

    let leap = monthly(date(2024, 1, 31)).with_end_date(date(2024, 4, 30));
    assert_eq!(due_dates(&leap)[1], date(2024, 2, 29));
}

#[test]
fn end_before_second_occurrence_yields_single_instance() {
    let template = monthly(date(2025, 3, 1)).with_end_date(date(2025, 3, 15));
    assert_eq!(due_dates(&template), vec![date(2025, 3, 1)]);
}

#[test]
fn open_ended_weekly_stops_at_cap() {
    let start = date(2025, 1, 1);
    let template = BillTemplate::new("Lessons", dec!(25), start, Frequency::Weekly);
    let dates = due_dates(&template);

    assert_eq!(dates.len(), MAX_INSTANCES as usize);
    assert_eq!(dates.len(), 52);
    assert_eq!(dates[0], start);
    assert_eq!(*dates.last().unwrap(), start + Duration::days(7 * 51));
}

#[test]
fn open_ended_series_of_every_frequency_hit_the_cap() {
    for frequency in Frequency::ALL {
        let template = BillTemplate::new("Open", dec!(1), date(2025, 6, 30), frequency);
        assert_eq!(expand(&template).unwrap().len(), MAX_INSTANCES as usize);
    }
}

#[test]
fn quarterly_steps_three_months_from_start() {
    let template = BillTemplate::new(
        "Insurance",
        dec!(410),
        date(2025, 11, 30),
        Frequency::Quarterly,
    )
    .with_end_date(date(2026, 12, 1));
    assert_eq!(
        due_dates(&template),
        vec![
            date(2025, 11, 30),
            date(2026, 2, 28),
            date(2026, 5, 30),
            date(2026, 8, 30),
            date(2026, 11, 30),
        ]
    );
}

#[test]
fn annual_leap_day_clamps_in_common_years() {
    let template = BillTemplate::new("Domain", dec!(12), date(2024, 2, 29), Frequency::Annually)
        .with_end_date(date(2027, 3, 1));
    assert_eq!(
        due_dates(&template),
        vec![
            date(2024, 2, 29),
            date(2025, 2, 28),
            date(2026, 2, 28),
            date(2027, 2, 28),
        ]
    );
}

#[test]
fn annual_leap_day_returns_in_next_leap_year() {
    let template = BillTemplate::new("Domain", dec!(12), date(2024, 2, 29), Frequency::Annually)
        .with_end_date(date(2028, 2, 29));
    assert_eq!(
        due_dates(&template),
        vec![
            date(2024, 2, 29),
            date(2025, 2, 28),
            date(2026, 2, 28),
            date(2027, 2, 28),
            date(2028, 2, 29),
        ]
    );
}

#[test]
fn end_date_is_inclusive() {
    let template = monthly(date(2025, 1, 10)).with_end_date(date(2025, 3, 10));
    assert_eq!(
        due_dates(&template),
        vec![date(2025, 1, 10), date(2025, 2, 10), date(2025, 3, 10)]
    );
}

#[test]
fn zero_amount_is_rejected() {
    let mut template = monthly(date(2025, 1, 1));
    template.amount = Decimal::ZERO;
    assert_eq!(
        expand(&template),
        Err(InvalidTemplateError::NonPositiveAmount(Decimal::ZERO))
    );
}

#[test]
fn end_equal_to_start_is_rejected() {
    let template = monthly(date(2025, 1, 1)).with_end_date(date(2025, 1, 1));
    assert!(matches!(
        expand(&template),
        Err(InvalidTemplateError::EndNotAfterStart { .. })
    ));
}

#[test]
fn empty_name_is_rejected() {
    let mut template = monthly(date(2025, 1, 1));
    template.name = String::new();
    assert_eq!(expand(&template), Err(InvalidTemplateError::EmptyName));
}

#[test]
fn instances_inherit_template_fields() {
    let template = monthly(date(2025, 1, 5))
        .with_category("Auto")
        .with_notes("Loan #42")
        .with_end_date(date(2025, 3, 5));
    let instances = expand(&template).unwrap();

    for (index, instance) in instances.iter().enumerate() {
        assert_eq!(instance.template_id, template.id);
        assert_eq!(instance.occurrence_index, index as u32);
        assert_eq!(instance.name, template.name);
        assert_eq!(instance.category, "Auto");
        assert_eq!(instance.amount, dec!(320.00));
        assert_eq!(instance.notes.as_deref(), Some("Loan #42"));
        assert_eq!(instance.status, BillStatus::Unpaid);
    }
}

#[test]
fn expansion_is_deterministic() {
    let template = monthly(date(2025, 8, 31)).with_reminder_days(5);
    let expander = RecurrenceExpander::new();
    assert_eq!(expander.expand(&template), expander.expand(&template));
}
