//! Attendance service.
//!
//! The [`AttendanceService`] ties the calculators together: it reads
//! settings and patterns from a [`SettingsProvider`], runs the start/end,
//! rest and work-time calculations, writes the results to an
//! [`AttendanceLedger`], and answers carryover queries against a
//! [`HistoryStore`].

use std::sync::Arc;
use std::time::Instant;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::addon::{AddonRegistry, HookContext};
use crate::calculation::{
    CarryoverBalance, calc_rest_time, calculate_carryover, resolve_end_time, resolve_rest,
    resolve_start_time, summarize_work_time,
};
use crate::config::SettingsProvider;
use crate::error::EngineResult;
use crate::history::{AttendanceLedger, HistoryStore, RecordId};
use crate::models::{
    ApplicationSettings, AttendanceBounds, AttendanceKey, AttendanceRecord, AuditStep, AuditTrace,
    CarryoverField, RequestContext, RestIntervalRecord, RestKey,
};

/// A proposed rest interval as punched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RestPunch {
    /// Rest start punch.
    pub start: Option<NaiveDateTime>,
    /// Rest end punch.
    pub end: Option<NaiveDateTime>,
}

/// Raw punches and requests for one work occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRegistration {
    /// The employee.
    pub employee_id: String,
    /// The work date.
    pub work_date: NaiveDate,
    /// The work occurrence counter.
    pub times_work: u32,
    /// Start punch, if any.
    pub start_punch: Option<NaiveDateTime>,
    /// End punch, if any.
    pub end_punch: Option<NaiveDateTime>,
    /// Rest punches in slot order.
    pub rests: Vec<RestPunch>,
    /// Overtime already requested for the day.
    pub request: RequestContext,
}

/// The records written by a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationOutcome {
    /// The version id of the new attendance record.
    pub record_id: RecordId,
    /// The attendance record.
    pub record: AttendanceRecord,
    /// The rest records, by slot.
    pub rests: Vec<RestIntervalRecord>,
    /// How every figure was produced.
    pub audit_trace: AuditTrace,
}

/// The carryover figures for one employee and acquisition date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarryoverOutcome {
    /// Carried-over days as display text, empty when nothing carries over.
    pub days: String,
    /// Carried-over hours as display text, empty when nothing carries over.
    pub hours: String,
    /// The full balance, when there was something to carry over.
    pub balance: Option<CarryoverBalance>,
}

/// Façade over the calculators, settings and history.
#[derive(Clone)]
pub struct AttendanceService {
    settings: Arc<dyn SettingsProvider>,
    history: Arc<dyn HistoryStore>,
    addons: AddonRegistry,
}

impl AttendanceService {
    /// Creates a service with no addons.
    pub fn new(settings: Arc<dyn SettingsProvider>, history: Arc<dyn HistoryStore>) -> Self {
        Self {
            settings,
            history,
            addons: AddonRegistry::new(),
        }
    }

    /// Replaces the addon registry.
    pub fn with_addons(mut self, addons: AddonRegistry) -> Self {
        self.addons = addons;
        self
    }

    /// Returns the addon registry.
    pub fn addons(&self) -> &AddonRegistry {
        &self.addons
    }

    /// Normalizes punches into an attendance record and writes it.
    ///
    /// The previous record for the same key, and all its rests, are retired.
    /// Nothing is written if any calculation fails.
    ///
    /// # Errors
    ///
    /// Returns `SettingsNotFound` when the employee has no configuration,
    /// `DateConversion` when date arithmetic overflows, and any addon error.
    pub fn register_attendance(
        &self,
        ledger: &mut AttendanceLedger,
        registration: AttendanceRegistration,
    ) -> EngineResult<RegistrationOutcome> {
        let started = Instant::now();
        let employee_id = registration.employee_id.as_str();
        let work_date = registration.work_date;

        let settings = self.settings.application_settings(employee_id, work_date)?;
        let pattern = self.settings.scheduled_pattern(employee_id, work_date)?;

        let key = AttendanceKey {
            employee_id: employee_id.to_string(),
            work_date,
            times_work: registration.times_work,
        };
        let mut trace = AuditTrace::default();

        let start_punch = registration
            .start_punch
            .or(pattern.direct_start.then_some(pattern.scheduled_start));
        let (start_time, actual_start_time) = match start_punch {
            Some(punch) => {
                let resolution = resolve_start_time(
                    &pattern,
                    &registration.request,
                    &settings,
                    punch,
                    trace.next_step_number(),
                )?;
                trace.steps.push(resolution.audit_step);
                (Some(resolution.start_time), resolution.actual_start_time)
            }
            None => (None, None),
        };

        let end_punch = registration
            .end_punch
            .or(pattern.direct_end.then_some(pattern.scheduled_end));
        let (end_time, actual_end_time) = match end_punch {
            Some(punch) => {
                let resolution = resolve_end_time(
                    &pattern,
                    &registration.request,
                    &settings,
                    punch,
                    trace.next_step_number(),
                )?;
                trace.steps.push(resolution.audit_step);
                (Some(resolution.end_time), resolution.actual_end_time)
            }
            None => (None, None),
        };

        let bounds = AttendanceBounds {
            start: start_time,
            end: end_time,
        };

        let mut rests = Vec::with_capacity(registration.rests.len());
        for (index, punch) in registration.rests.iter().enumerate() {
            let rest_key = RestKey {
                attendance: key.clone(),
                rest_slot: index as u32 + 1,
            };
            let (record, step) = self.resolve_rest_slot(
                rest_key,
                *punch,
                bounds,
                &settings,
                trace.next_step_number(),
            )?;
            trace.steps.push(step);
            rests.push(record);
        }
        let rest_minutes: i64 = rests.iter().map(|rest| rest.rest_minutes).sum();

        let summary = summarize_work_time(
            &pattern,
            start_time,
            end_time,
            rest_minutes,
            trace.next_step_number(),
        );
        trace.steps.push(summary.audit_step);

        let record = AttendanceRecord {
            employee_id: key.employee_id.clone(),
            work_date,
            times_work: key.times_work,
            work_type_code: pattern.work_type_code.clone(),
            direct_start: pattern.direct_start,
            direct_end: pattern.direct_end,
            start_time,
            actual_start_time,
            end_time,
            actual_end_time,
            late_minutes: summary.late_minutes,
            leave_early_minutes: summary.leave_early_minutes,
            rest_minutes,
            work_minutes: summary.work_minutes,
            prescribed_work_minutes: summary.prescribed_work_minutes,
            overtime_minutes: summary.overtime_minutes,
            overtime_within_legal_minutes: summary.overtime_within_legal_minutes,
            overtime_beyond_legal_minutes: summary.overtime_beyond_legal_minutes,
        };

        let retired_rests = ledger.replace_rests(&key, &rests)?;
        let record_id = ledger.regist_attendance(record.clone());

        trace.duration_us = started.elapsed().as_micros() as u64;
        info!(
            employee_id = %key.employee_id,
            work_date = %work_date,
            times_work = key.times_work,
            record_id,
            retired_rests,
            work_minutes = record.work_minutes,
            overtime_minutes = record.overtime_minutes,
            duration_us = trace.duration_us,
            "Attendance registered"
        );

        Ok(RegistrationOutcome {
            record_id,
            record,
            rests,
            audit_trace: trace,
        })
    }

    fn resolve_rest_slot(
        &self,
        rest_key: RestKey,
        punch: RestPunch,
        bounds: AttendanceBounds,
        settings: &ApplicationSettings,
        step_number: u32,
    ) -> EngineResult<(RestIntervalRecord, AuditStep)> {
        let mut record = RestIntervalRecord::empty(&rest_key.attendance, rest_key.rest_slot);

        let mut context = HookContext::RestStartEnd {
            key: rest_key,
            rest_start: punch.start,
            rest_end: punch.end,
            bounds,
            interval: None,
        };
        let handled = self.addons.run(&mut context)?;
        if let (true, HookContext::RestStartEnd { key, interval, .. }) = (handled, context) {
            debug!(rest = %key, "Rest interval supplied by addon");
            record.rest_start = interval.map(|i| i.start);
            record.rest_end = interval.map(|i| i.end);
            record.rest_minutes = calc_rest_time(record.rest_start, record.rest_end, settings)?;
            let step = AuditStep {
                step_number,
                rule_id: "rest_interval_addon".to_string(),
                rule_name: "Rest Interval Addon".to_string(),
                input: serde_json::json!({
                    "rest_start": punch.start,
                    "rest_end": punch.end
                }),
                output: serde_json::json!({
                    "interval": interval,
                    "rest_minutes": record.rest_minutes
                }),
                reasoning: "Rest interval supplied by a registered addon".to_string(),
            };
            return Ok((record, step));
        }

        let resolution = resolve_rest(punch.start, punch.end, &bounds, settings, step_number)?;
        record.rest_start = resolution.interval.map(|i| i.start);
        record.rest_end = resolution.interval.map(|i| i.end);
        record.rest_minutes = resolution.rest_minutes;
        Ok((record, resolution.audit_step))
    }

    /// Retires an attendance record and its rests without replacement.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::RecordNotFound`] when the key
    /// has no current record.
    pub fn delete_attendance(
        &self,
        ledger: &mut AttendanceLedger,
        key: &AttendanceKey,
    ) -> EngineResult<RecordId> {
        let record_id = ledger.retire_attendance(key)?;
        info!(
            employee_id = %key.employee_id,
            work_date = %key.work_date,
            times_work = key.times_work,
            record_id,
            "Attendance deleted"
        );
        Ok(record_id)
    }

    /// Computes the leave carried over into the cycle starting on
    /// `acquisition_date`.
    ///
    /// A registered [`crate::addon::HookKey::CarryoverField`] hook may
    /// supply either display value.
    ///
    /// # Errors
    ///
    /// Propagates history access, date conversion and addon errors.
    pub fn carryover(
        &self,
        employee_id: &str,
        acquisition_date: NaiveDate,
        only_approved: bool,
    ) -> EngineResult<CarryoverOutcome> {
        let balance = calculate_carryover(
            self.history.as_ref(),
            employee_id,
            acquisition_date,
            only_approved,
            1,
        )?;

        let days = self.carryover_field(
            employee_id,
            acquisition_date,
            CarryoverField::Days,
            balance.as_ref(),
        )?;
        let hours = self.carryover_field(
            employee_id,
            acquisition_date,
            CarryoverField::Hours,
            balance.as_ref(),
        )?;

        info!(
            employee_id = %employee_id,
            acquisition_date = %acquisition_date,
            only_approved,
            days = %days,
            hours = %hours,
            "Carryover calculated"
        );

        Ok(CarryoverOutcome {
            days,
            hours,
            balance,
        })
    }

    fn carryover_field(
        &self,
        employee_id: &str,
        acquisition_date: NaiveDate,
        field: CarryoverField,
        balance: Option<&CarryoverBalance>,
    ) -> EngineResult<String> {
        let mut context = HookContext::CarryoverField {
            employee_id: employee_id.to_string(),
            acquisition_date,
            field,
            value: None,
        };
        if self.addons.run(&mut context)? {
            if let HookContext::CarryoverField {
                value: Some(value), ..
            } = context
            {
                return Ok(value);
            }
        }
        Ok(balance.map(|b| b.display(field)).unwrap_or_default())
    }
}
