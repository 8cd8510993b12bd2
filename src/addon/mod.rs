//! Deployment-specific extension hooks.
//!
//! An [`AddonHook`] is registered under a [`HookKey`] and invoked with a
//! [`HookContext`] before the engine's default behavior at that point. A hook
//! that reports the context as handled replaces the default behavior; the
//! engine then takes its result from the context.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AttendanceBounds, CarryoverField, RestInterval, RestKey};

/// The points at which hooks can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookKey {
    /// Before a rest interval is clamped to the attendance bounds.
    RestStartEnd,
    /// Before a carryover figure is computed for display.
    CarryoverField,
}

/// Data handed to a hook. Hooks write their result into the output fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookContext {
    /// Context for [`HookKey::RestStartEnd`].
    RestStartEnd {
        /// The rest record being written.
        key: RestKey,
        /// The proposed rest start.
        rest_start: Option<NaiveDateTime>,
        /// The proposed rest end.
        rest_end: Option<NaiveDateTime>,
        /// The resolved attendance bounds.
        bounds: AttendanceBounds,
        /// The interval to record when handled.
        interval: Option<RestInterval>,
    },
    /// Context for [`HookKey::CarryoverField`].
    CarryoverField {
        /// The employee.
        employee_id: String,
        /// The acquisition date of the new cycle.
        acquisition_date: NaiveDate,
        /// The figure requested.
        field: CarryoverField,
        /// The display value to return when handled.
        value: Option<String>,
    },
}

impl HookContext {
    /// The hook key this context belongs to.
    pub fn key(&self) -> HookKey {
        match self {
            Self::RestStartEnd { .. } => HookKey::RestStartEnd,
            Self::CarryoverField { .. } => HookKey::CarryoverField,
        }
    }
}

/// A deployment-specific extension.
pub trait AddonHook: Send + Sync {
    /// A short name used in logs.
    fn name(&self) -> &str;

    /// Runs the hook.
    ///
    /// Returns `true` if the hook handled the context and the default
    /// behavior must be skipped.
    ///
    /// # Errors
    ///
    /// Any error aborts the surrounding operation.
    fn run(&self, context: &mut HookContext) -> EngineResult<bool>;
}

/// Hooks registered per [`HookKey`], run in registration order.
///
/// # Example
///
/// ```
/// use attendance_engine::addon::{AddonHook, AddonRegistry, HookContext, HookKey};
/// use attendance_engine::error::EngineResult;
/// use attendance_engine::models::CarryoverField;
/// use chrono::NaiveDate;
/// use std::sync::Arc;
///
/// struct FixedDays;
///
/// impl AddonHook for FixedDays {
///     fn name(&self) -> &str {
///         "fixed_days"
///     }
///
///     fn run(&self, context: &mut HookContext) -> EngineResult<bool> {
///         if let HookContext::CarryoverField { value, .. } = context {
///             *value = Some("20.0".to_string());
///             return Ok(true);
///         }
///         Ok(false)
///     }
/// }
///
/// let mut registry = AddonRegistry::new();
/// registry.register(HookKey::CarryoverField, Arc::new(FixedDays));
///
/// let mut context = HookContext::CarryoverField {
///     employee_id: "emp_001".to_string(),
///     acquisition_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     field: CarryoverField::Days,
///     value: None,
/// };
/// assert!(registry.run(&mut context).unwrap());
/// ```
#[derive(Clone, Default)]
pub struct AddonRegistry {
    hooks: HashMap<HookKey, Vec<Arc<dyn AddonHook>>>,
}

impl fmt::Debug for AddonRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, hooks) in &self.hooks {
            let names: Vec<&str> = hooks.iter().map(|hook| hook.name()).collect();
            map.entry(key, &names);
        }
        map.finish()
    }
}

impl AddonRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a hook under a key.
    pub fn register(&mut self, key: HookKey, hook: Arc<dyn AddonHook>) {
        self.hooks.entry(key).or_default().push(hook);
    }

    /// Whether any hook is registered under a key.
    pub fn has_hooks(&self, key: HookKey) -> bool {
        self.hooks.get(&key).is_some_and(|hooks| !hooks.is_empty())
    }

    /// Runs the hooks registered for the context's key.
    ///
    /// Stops at the first hook that reports the context as handled and
    /// returns `true`; returns `false` if none did.
    ///
    /// # Errors
    ///
    /// Propagates the first hook error.
    pub fn run(&self, context: &mut HookContext) -> EngineResult<bool> {
        let Some(hooks) = self.hooks.get(&context.key()) else {
            return Ok(false);
        };
        for hook in hooks {
            if hook.run(context)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
