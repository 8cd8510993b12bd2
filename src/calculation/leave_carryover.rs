//! Leave carryover calculation.
//!
//! This module computes how many paid-holiday days and hours survive from
//! the prior grant cycle into the current one. Grants (automatic and manual)
//! acquired in the window `[acquisition date - 1 year, acquisition date - 1 day]`
//! are netted against paid-holiday requests consumed in the same window.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::history::HistoryStore;
use crate::models::{
    AuditStep, CarryoverField, LeaveGrantEntry, LeaveRange, LeaveRequest, LeaveTransaction,
    LeaveType, LeaveWindow, WorkflowState,
};

use super::request_status::is_consumed_opt;

/// Hours that make up one day of leave.
pub const HOURS_PER_DAY: i32 = 8;

/// The carried-over balance for one acquisition date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarryoverBalance {
    /// The prior grant cycle that was scanned.
    pub window: LeaveWindow,
    /// Days granted in the window, net of manual cancellations.
    pub granted_days: Decimal,
    /// Hours granted in the window, net of manual cancellations.
    pub granted_hours: i32,
    /// Whether at least one manual transaction fell inside the window.
    pub had_manual_grant: bool,
    /// Days consumed, including any hour-to-day conversion.
    pub consumed_days: Decimal,
    /// Hour units consumed that were not converted into days.
    pub consumed_hours: i32,
    /// Day-equivalent produced by the hour-to-day conversion.
    pub hour_day_equivalent: i32,
    /// Days carried over.
    pub carryover_days: Decimal,
    /// Hours carried over.
    pub carryover_hours: i32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

impl CarryoverBalance {
    /// Renders the requested figure as text.
    ///
    /// Days are rendered as a decimal with at least one fractional digit,
    /// hours as an integer.
    pub fn display(&self, field: CarryoverField) -> String {
        match field {
            CarryoverField::Days => format_days(self.carryover_days),
            CarryoverField::Hours => self.carryover_hours.to_string(),
        }
    }
}

/// Formats a day count with at least one fractional digit (`8.0`, `7.5`).
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::format_days;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_days(Decimal::from(8)), "8.0");
/// assert_eq!(format_days(Decimal::new(75, 1)), "7.5");
/// assert_eq!(format_days(Decimal::new(-50, 2)), "-0.5");
/// ```
pub fn format_days(days: Decimal) -> String {
    let normalized = days.normalize();
    if normalized.scale() == 0 {
        format!("{}.0", normalized)
    } else {
        normalized.to_string()
    }
}

/// Splits consumed hour units into whole days and leftover hours.
///
/// Each full [`HOURS_PER_DAY`] block becomes one day. A leftover of 1 to 7
/// hours rounds the day count up by one but stays in the returned hours.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::convert_hours_to_days;
///
/// assert_eq!(convert_hours_to_days(8), (1, 0));
/// assert_eq!(convert_hours_to_days(9), (2, 1));
/// ```
pub fn convert_hours_to_days(consumed_hours: i32) -> (i32, i32) {
    let mut days = consumed_hours / HOURS_PER_DAY;
    let remainder = consumed_hours - days * HOURS_PER_DAY;
    if remainder != 0 {
        days += 1;
    }
    (days, remainder)
}

/// Computes the carryover balance from already-fetched history.
///
/// `requests` pairs each request with its latest workflow state (if any).
/// Returns `None` when the window holds neither automatic grants nor manual
/// transactions; that is "nothing to carry over", not an error.
///
/// Steps:
///
/// 1. Sum held days/hours of automatic grants inside the window.
/// 2. Add `giving - cancel` of every manual transaction inside the window.
/// 3. Consume paid-holiday requests inside the window that pass the status
///    filter: full day +1 day, half day +0.5 day, hourly +1 hour unit per
///    request regardless of the hours requested.
/// 4. When hours were consumed beyond the granted hours, convert them into
///    days with [`convert_hours_to_days`]; the day-equivalent is added to the
///    consumed days only when granted days are non-zero.
/// 5. Days carried = granted - consumed.
/// 6. Hours carried: granted if nothing consumed, the difference if granted
///    exceeds consumed, `8 - consumed` if consumed is at most 8, otherwise
///    granted.
pub fn compute_carryover(
    window: LeaveWindow,
    grants: &[LeaveGrantEntry],
    transactions: &[LeaveTransaction],
    requests: &[(LeaveRequest, Option<WorkflowState>)],
    only_approved: bool,
    step_number: u32,
) -> Option<CarryoverBalance> {
    let mut granted_days = Decimal::ZERO;
    let mut granted_hours = 0;
    let mut had_automatic_grant = false;

    for grant in grants.iter().filter(|g| window.contains(g.acquisition_date)) {
        had_automatic_grant = true;
        granted_days += grant.hold_days;
        granted_hours += grant.hold_hours;
    }

    let mut had_manual_grant = false;
    for transaction in transactions
        .iter()
        .filter(|t| window.contains(t.acquisition_date))
    {
        had_manual_grant = true;
        granted_days += transaction.giving_days - transaction.cancel_days;
        granted_hours += transaction.giving_hours - transaction.cancel_hours;
    }

    if !had_automatic_grant && !had_manual_grant {
        return None;
    }

    let half_day = Decimal::new(5, 1);
    let mut consumed_days = Decimal::ZERO;
    let mut consumed_hours = 0;
    let mut counted_requests = 0u32;

    for (request, workflow) in requests {
        if !window.contains(request.acquisition_date)
            || request.leave_type != LeaveType::PaidHoliday
            || !is_consumed_opt(workflow.as_ref(), only_approved)
        {
            continue;
        }
        counted_requests += 1;
        match request.range {
            LeaveRange::FullDay => consumed_days += Decimal::ONE,
            LeaveRange::HalfDayAm | LeaveRange::HalfDayPm => consumed_days += half_day,
            LeaveRange::Hourly => consumed_hours += 1,
        }
    }

    let requested_days = consumed_days;
    let requested_hours = consumed_hours;

    let mut hour_day_equivalent = 0;
    if consumed_hours != 0 && granted_hours < consumed_hours {
        let (days, remainder) = convert_hours_to_days(consumed_hours);
        hour_day_equivalent = days;
        consumed_hours = remainder;
    }
    if !granted_days.is_zero() && hour_day_equivalent != 0 {
        consumed_days += Decimal::from(hour_day_equivalent);
    }

    let carryover_days = granted_days - consumed_days;

    let carryover_hours = if consumed_hours == 0 {
        granted_hours
    } else if granted_hours > consumed_hours {
        granted_hours - consumed_hours
    } else if consumed_hours <= HOURS_PER_DAY {
        HOURS_PER_DAY - consumed_hours
    } else {
        granted_hours
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "leave_carryover".to_string(),
        rule_name: "Leave Carryover Calculation".to_string(),
        input: serde_json::json!({
            "window_start": window.start,
            "window_end": window.end,
            "only_approved": only_approved,
            "granted_days": granted_days.normalize().to_string(),
            "granted_hours": granted_hours,
            "had_manual_grant": had_manual_grant,
            "counted_requests": counted_requests,
            "requested_days": requested_days.normalize().to_string(),
            "requested_hours": requested_hours
        }),
        output: serde_json::json!({
            "hour_day_equivalent": hour_day_equivalent,
            "consumed_days": consumed_days.normalize().to_string(),
            "consumed_hours": consumed_hours,
            "carryover_days": format_days(carryover_days),
            "carryover_hours": carryover_hours
        }),
        reasoning: format!(
            "{} days granted - {} days consumed = {} days; {} hours carried",
            granted_days.normalize(),
            consumed_days.normalize(),
            format_days(carryover_days),
            carryover_hours
        ),
    };

    Some(CarryoverBalance {
        window,
        granted_days,
        granted_hours,
        had_manual_grant,
        consumed_days,
        consumed_hours,
        hour_day_equivalent,
        carryover_days,
        carryover_hours,
        audit_step,
    })
}

/// Fetches history from a store and computes the carryover balance.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::DateConversion`] if the window cannot
/// be built, and propagates any history access error from the store.
pub fn calculate_carryover<S: HistoryStore + ?Sized>(
    store: &S,
    employee_id: &str,
    acquisition_date: NaiveDate,
    only_approved: bool,
    step_number: u32,
) -> EngineResult<Option<CarryoverBalance>> {
    let window = LeaveWindow::prior_cycle(acquisition_date)?;

    let grants = store.grants_in_window(employee_id, &window)?;
    let transactions = store.transactions(employee_id)?;

    // Requests and workflow states are only read when there is something to
    // carry over.
    let has_grant = grants.iter().any(|g| window.contains(g.acquisition_date))
        || transactions
            .iter()
            .any(|t| window.contains(t.acquisition_date));
    if !has_grant {
        return Ok(None);
    }

    let requests = store
        .requests_in_window(employee_id, &window)?
        .into_iter()
        .map(|request| {
            let workflow = store.latest_workflow(request.workflow_id)?;
            Ok((request, workflow))
        })
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(compute_carryover(
        window,
        &grants,
        &transactions,
        &requests,
        only_approved,
        step_number,
    ))
}

/// Returns the carried-over days or hours as display text.
///
/// An empty string means there was nothing to carry over.
///
/// # Errors
///
/// Same as [`calculate_carryover`].
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::carryover;
/// use attendance_engine::history::InMemoryHistoryStore;
/// use attendance_engine::models::CarryoverField;
/// use chrono::NaiveDate;
///
/// let store = InMemoryHistoryStore::new();
/// let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
/// assert_eq!(carryover(&store, "emp_001", date, CarryoverField::Days, true).unwrap(), "");
/// ```
pub fn carryover<S: HistoryStore + ?Sized>(
    store: &S,
    employee_id: &str,
    acquisition_date: NaiveDate,
    field: CarryoverField,
    only_approved: bool,
) -> EngineResult<String> {
    Ok(
        calculate_carryover(store, employee_id, acquisition_date, only_approved, 1)?
            .map(|balance| balance.display(field))
            .unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::history::InMemoryHistoryStore;
    use crate::models::WorkflowStatus;
    use chrono::Days;
    use std::str::FromStr;

    const EMP: &str = "emp_001";

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn acquisition_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    fn days_before(days: u64) -> NaiveDate {
        acquisition_date().checked_sub_days(Days::new(days)).unwrap()
    }

    fn grant(days: &str, hours: i32, acquired: NaiveDate) -> LeaveGrantEntry {
        LeaveGrantEntry {
            employee_id: EMP.to_string(),
            acquisition_date: acquired,
            hold_days: dec(days),
            hold_hours: hours,
            limit_date: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
        }
    }

    struct Fixture {
        store: InMemoryHistoryStore,
        next_id: u64,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                store: InMemoryHistoryStore::new(),
                next_id: 1,
            }
        }

        fn request(&mut self, range: LeaveRange, status: WorkflowStatus, acquired: NaiveDate) {
            self.typed_request(LeaveType::PaidHoliday, range, status, acquired);
        }

        fn typed_request(
            &mut self,
            leave_type: LeaveType,
            range: LeaveRange,
            status: WorkflowStatus,
            acquired: NaiveDate,
        ) {
            let id = self.next_id;
            self.next_id += 1;
            self.store.add_request(LeaveRequest {
                request_id: format!("req_{:03}", id),
                employee_id: EMP.to_string(),
                acquisition_date: acquired,
                leave_type,
                range,
                requested_hours: if range == LeaveRange::Hourly { 3 } else { 0 },
                workflow_id: id,
            });
            self.store.add_workflow(WorkflowState {
                workflow_id: id,
                status,
                stage: 1,
            });
        }

        fn days(&self, only_approved: bool) -> String {
            carryover(
                &self.store,
                EMP,
                acquisition_date(),
                CarryoverField::Days,
                only_approved,
            )
            .unwrap()
        }

        fn hours(&self, only_approved: bool) -> String {
            carryover(
                &self.store,
                EMP,
                acquisition_date(),
                CarryoverField::Hours,
                only_approved,
            )
            .unwrap()
        }
    }

    /// Store whose history reads always fail.
    struct FailingStore;

    impl HistoryStore for FailingStore {
        fn grants_in_window(&self, _: &str, _: &LeaveWindow) -> EngineResult<Vec<LeaveGrantEntry>> {
            Err(EngineError::HistoryAccess {
                source_name: "grants".to_string(),
                message: "unavailable".to_string(),
            })
        }

        fn transactions(&self, _: &str) -> EngineResult<Vec<LeaveTransaction>> {
            Ok(vec![])
        }

        fn requests_in_window(&self, _: &str, _: &LeaveWindow) -> EngineResult<Vec<LeaveRequest>> {
            Ok(vec![])
        }

        fn latest_workflow(&self, _: u64) -> EngineResult<Option<WorkflowState>> {
            Ok(None)
        }
    }

    // ==========================================================================
    // Empty and error cases
    // ==========================================================================

    #[test]
    fn test_no_history_returns_empty_value() {
        let fixture = Fixture::new();
        assert_eq!(fixture.days(true), "");
        assert_eq!(fixture.hours(false), "");
    }

    #[test]
    fn test_requests_without_grants_still_empty() {
        let mut fixture = Fixture::new();
        fixture.request(LeaveRange::FullDay, WorkflowStatus::Completed, days_before(10));
        assert_eq!(fixture.days(true), "");
    }

    #[test]
    fn test_grant_outside_window_is_ignored() {
        let mut fixture = Fixture::new();
        fixture.store.add_grant(grant("10", 0, acquisition_date()));
        assert_eq!(fixture.days(true), "");
    }

    #[test]
    fn test_history_access_error_propagates() {
        let result = carryover(
            &FailingStore,
            EMP,
            acquisition_date(),
            CarryoverField::Days,
            true,
        );
        assert!(matches!(result, Err(EngineError::HistoryAccess { .. })));
    }

    // ==========================================================================
    // Day scenarios
    // ==========================================================================

    #[test]
    fn test_two_completed_full_days_from_ten() {
        let mut fixture = Fixture::new();
        fixture.store.add_grant(grant("10", 0, days_before(200)));
        fixture.request(LeaveRange::FullDay, WorkflowStatus::Completed, days_before(100));
        fixture.request(LeaveRange::FullDay, WorkflowStatus::Completed, days_before(50));

        assert_eq!(fixture.days(true), "8.0");
    }

    #[test]
    fn test_draft_request_never_consumed() {
        let mut fixture = Fixture::new();
        fixture.store.add_grant(grant("10", 0, days_before(200)));
        fixture.request(LeaveRange::FullDay, WorkflowStatus::Completed, days_before(100));
        fixture.request(LeaveRange::FullDay, WorkflowStatus::Completed, days_before(50));
        fixture.request(LeaveRange::FullDay, WorkflowStatus::Draft, days_before(20));

        assert_eq!(fixture.days(false), "8.0");
        assert_eq!(fixture.days(true), "8.0");
    }

    #[test]
    fn test_pending_counts_only_without_approval_filter() {
        let mut fixture = Fixture::new();
        fixture.store.add_grant(grant("10", 0, days_before(200)));
        fixture.request(LeaveRange::FullDay, WorkflowStatus::Pending, days_before(100));
        fixture.request(LeaveRange::FullDay, WorkflowStatus::Withdrawn, days_before(90));

        assert_eq!(fixture.days(true), "10.0");
        assert_eq!(fixture.days(false), "9.0");
    }

    #[test]
    fn test_half_days_count_half() {
        let mut fixture = Fixture::new();
        fixture.store.add_grant(grant("10", 0, days_before(200)));
        fixture.request(LeaveRange::HalfDayAm, WorkflowStatus::Completed, days_before(100));

        assert_eq!(fixture.days(true), "9.5");

        fixture.request(LeaveRange::HalfDayPm, WorkflowStatus::Completed, days_before(99));
        assert_eq!(fixture.days(true), "9.0");
    }

    #[test]
    fn test_other_leave_types_are_ignored() {
        let mut fixture = Fixture::new();
        fixture.store.add_grant(grant("10", 0, days_before(200)));
        fixture.typed_request(
            LeaveType::SpecialHoliday,
            LeaveRange::FullDay,
            WorkflowStatus::Completed,
            days_before(100),
        );

        assert_eq!(fixture.days(true), "10.0");
    }

    #[test]
    fn test_missing_workflow_is_not_consumed() {
        let mut fixture = Fixture::new();
        fixture.store.add_grant(grant("10", 0, days_before(200)));
        fixture.store.add_request(LeaveRequest {
            request_id: "orphan".to_string(),
            employee_id: EMP.to_string(),
            acquisition_date: days_before(100),
            leave_type: LeaveType::PaidHoliday,
            range: LeaveRange::FullDay,
            requested_hours: 0,
            workflow_id: 999,
        });

        assert_eq!(fixture.days(false), "10.0");
    }

    #[test]
    fn test_manual_transaction_alone_enables_carryover() {
        let mut fixture = Fixture::new();
        fixture.store.add_transaction(LeaveTransaction {
            employee_id: EMP.to_string(),
            acquisition_date: days_before(30),
            giving_days: dec("3"),
            giving_hours: 0,
            cancel_days: dec("1"),
            cancel_hours: 0,
        });

        assert_eq!(fixture.days(true), "2.0");
    }

    #[test]
    fn test_manual_transaction_adds_to_automatic_grant() {
        let mut fixture = Fixture::new();
        fixture.store.add_grant(grant("10", 4, days_before(200)));
        fixture.store.add_transaction(LeaveTransaction {
            employee_id: EMP.to_string(),
            acquisition_date: days_before(30),
            giving_days: dec("1.5"),
            giving_hours: 3,
            cancel_days: Decimal::ZERO,
            cancel_hours: 1,
        });
        // Outside the window.
        fixture.store.add_transaction(LeaveTransaction {
            employee_id: EMP.to_string(),
            acquisition_date: days_before(400),
            giving_days: dec("5"),
            giving_hours: 0,
            cancel_days: Decimal::ZERO,
            cancel_hours: 0,
        });

        assert_eq!(fixture.days(true), "11.5");
        assert_eq!(fixture.hours(true), "6");
    }

    #[test]
    fn test_cancellation_can_make_carryover_negative() {
        let mut fixture = Fixture::new();
        fixture.store.add_transaction(LeaveTransaction {
            employee_id: EMP.to_string(),
            acquisition_date: days_before(30),
            giving_days: Decimal::ZERO,
            giving_hours: 0,
            cancel_days: dec("1"),
            cancel_hours: 0,
        });

        assert_eq!(fixture.days(true), "-1.0");
    }

    // ==========================================================================
    // Hour scenarios
    // ==========================================================================

    #[test]
    fn test_hourly_request_reduces_granted_hours() {
        let mut fixture = Fixture::new();
        fixture.store.add_grant(grant("10", 5, days_before(200)));
        fixture.request(LeaveRange::Hourly, WorkflowStatus::Completed, days_before(100));

        // One unit per request, regardless of the 3 hours requested.
        assert_eq!(fixture.hours(true), "4");
        assert_eq!(fixture.days(true), "10.0");
    }

    #[test]
    fn test_no_hourly_requests_carry_granted_hours() {
        let mut fixture = Fixture::new();
        fixture.store.add_grant(grant("10", 6, days_before(200)));

        assert_eq!(fixture.hours(true), "6");
    }

    #[test]
    fn test_hours_beyond_grant_convert_to_days() {
        let mut fixture = Fixture::new();
        fixture.store.add_grant(grant("10", 0, days_before(200)));
        for offset in 0..9 {
            fixture.request(
                LeaveRange::Hourly,
                WorkflowStatus::Completed,
                days_before(100 + offset),
            );
        }

        // 9 hours -> 1 day + 1 hour leftover -> 2 day-equivalents.
        assert_eq!(fixture.days(true), "8.0");
        // Leftover 1 hour, no hours granted -> 8 - 1.
        assert_eq!(fixture.hours(true), "7");
    }

    #[test]
    fn test_exactly_eight_hours_convert_to_one_day() {
        let mut fixture = Fixture::new();
        fixture.store.add_grant(grant("10", 0, days_before(200)));
        for offset in 0..8 {
            fixture.request(
                LeaveRange::Hourly,
                WorkflowStatus::Completed,
                days_before(100 + offset),
            );
        }

        assert_eq!(fixture.days(true), "9.0");
        assert_eq!(fixture.hours(true), "0");
    }

    #[test]
    fn test_day_equivalent_skipped_when_no_days_granted() {
        let mut fixture = Fixture::new();
        fixture.store.add_grant(grant("0", 2, days_before(200)));
        for offset in 0..3 {
            fixture.request(
                LeaveRange::Hourly,
                WorkflowStatus::Completed,
                days_before(100 + offset),
            );
        }

        assert_eq!(fixture.days(true), "0.0");
        // 3 consumed > 2 granted, converted to 1 day-equivalent with 3 leftover.
        assert_eq!(fixture.hours(true), "5");
    }

    // ==========================================================================
    // Pure computation
    // ==========================================================================

    #[test]
    fn test_convert_hours_to_days_boundaries() {
        assert_eq!(convert_hours_to_days(1), (1, 1));
        assert_eq!(convert_hours_to_days(7), (1, 7));
        assert_eq!(convert_hours_to_days(8), (1, 0));
        assert_eq!(convert_hours_to_days(9), (2, 1));
        assert_eq!(convert_hours_to_days(16), (2, 0));
    }

    #[test]
    fn test_leftover_above_eight_keeps_granted_hours() {
        let window = LeaveWindow::prior_cycle(acquisition_date()).unwrap();
        let grants = vec![grant("10", 20, days_before(200))];
        let requests: Vec<_> = (0..12)
            .map(|i| {
                (
                    LeaveRequest {
                        request_id: format!("r{}", i),
                        employee_id: EMP.to_string(),
                        acquisition_date: days_before(10 + i),
                        leave_type: LeaveType::PaidHoliday,
                        range: LeaveRange::Hourly,
                        requested_hours: 1,
                        workflow_id: i,
                    },
                    Some(WorkflowState {
                        workflow_id: i,
                        status: WorkflowStatus::Completed,
                        stage: 1,
                    }),
                )
            })
            .collect();

        let balance = compute_carryover(window, &grants, &[], &requests, true, 1).unwrap();

        assert_eq!(balance.consumed_hours, 12);
        assert_eq!(balance.carryover_hours, 8);
        assert_eq!(balance.hour_day_equivalent, 0);
        assert_eq!(balance.audit_step.rule_id, "leave_carryover");
    }

    #[test]
    fn test_consumed_above_eight_without_conversion_keeps_granted_hours() {
        // 12 hour units against 12 granted hours: no conversion, not more than
        // granted, above 8 -> granted hours are carried unchanged.
        let window = LeaveWindow::prior_cycle(acquisition_date()).unwrap();
        let grants = vec![grant("10", 12, days_before(200))];
        let requests: Vec<_> = (0..12)
            .map(|i| {
                (
                    LeaveRequest {
                        request_id: format!("r{}", i),
                        employee_id: EMP.to_string(),
                        acquisition_date: days_before(10 + i),
                        leave_type: LeaveType::PaidHoliday,
                        range: LeaveRange::Hourly,
                        requested_hours: 1,
                        workflow_id: i,
                    },
                    Some(WorkflowState {
                        workflow_id: i,
                        status: WorkflowStatus::Completed,
                        stage: 1,
                    }),
                )
            })
            .collect();

        let balance = compute_carryover(window, &grants, &[], &requests, true, 1).unwrap();

        assert_eq!(balance.carryover_hours, 12);
        assert_eq!(balance.display(CarryoverField::Hours), "12");
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_days(dec("8")), "8.0");
        assert_eq!(format_days(dec("8.50")), "8.5");
        assert_eq!(format_days(dec("0")), "0.0");
    }
}
