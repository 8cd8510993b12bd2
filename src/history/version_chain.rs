//! Append-only version chains for attendance and rest records.
//!
//! Every write appends a new version with a fresh [`RecordId`]. Replacing a
//! record retires the current version and links the new one back to it, so
//! the full history of a natural key can always be walked.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceKey, AttendanceRecord, RestIntervalRecord, RestKey};

/// Identifier of one stored version.
pub type RecordId = u64;

/// One stored version of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version<V> {
    /// The version identifier.
    pub id: RecordId,
    /// The stored value.
    pub value: V,
    /// Whether a later write retired this version.
    pub retired: bool,
    /// The version this one replaced.
    pub replaces: Option<RecordId>,
    /// When this version was written.
    pub recorded_at: NaiveDateTime,
}

/// An arena of versions with an index from natural key to current version.
///
/// # Example
///
/// ```
/// use attendance_engine::history::VersionChain;
///
/// let mut chain: VersionChain<String, i64> = VersionChain::new();
/// chain.regist("a".to_string(), 1);
/// chain.regist("a".to_string(), 2);
///
/// assert_eq!(chain.current(&"a".to_string()), Some(&2));
/// assert_eq!(chain.history(&"a".to_string()).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct VersionChain<K, V> {
    versions: Vec<Version<V>>,
    current: HashMap<K, usize>,
}

impl<K, V> Default for VersionChain<K, V> {
    fn default() -> Self {
        Self {
            versions: Vec::new(),
            current: HashMap::new(),
        }
    }
}

impl<K, V> VersionChain<K, V>
where
    K: Eq + Hash + Clone + Display,
{
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a value for a key, retiring the current version if there is one.
    ///
    /// Returns the id of the new version.
    pub fn regist(&mut self, key: K, value: V) -> RecordId {
        let replaces = self.current.get(&key).map(|&index| {
            let previous = &mut self.versions[index];
            previous.retired = true;
            previous.id
        });

        let id = self.versions.len() as RecordId + 1;
        self.versions.push(Version {
            id,
            value,
            retired: false,
            replaces,
            recorded_at: Utc::now().naive_utc(),
        });
        self.current.insert(key, self.versions.len() - 1);
        id
    }

    /// Returns the current value for a key.
    pub fn current(&self, key: &K) -> Option<&V> {
        self.current_version(key).map(|version| &version.value)
    }

    /// Returns the current version for a key.
    pub fn current_version(&self, key: &K) -> Option<&Version<V>> {
        self.current.get(key).map(|&index| &self.versions[index])
    }

    /// Returns every version of a key, newest first.
    ///
    /// Only the chain reachable from the current version is returned; a key
    /// that was retired without replacement has no history.
    pub fn history(&self, key: &K) -> Vec<&Version<V>> {
        let mut chain = Vec::new();
        let mut next = self.current.get(key).map(|&index| &self.versions[index]);
        while let Some(version) = next {
            chain.push(version);
            next = version
                .replaces
                .and_then(|id| self.versions.get(id as usize - 1));
        }
        chain
    }

    /// Retires the current version of a key without a replacement.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RecordNotFound`] if the key has no current version.
    pub fn retire(&mut self, key: &K) -> EngineResult<RecordId> {
        let index = self
            .current
            .remove(key)
            .ok_or_else(|| EngineError::RecordNotFound {
                key: key.to_string(),
            })?;
        let version = &mut self.versions[index];
        version.retired = true;
        Ok(version.id)
    }

    /// Returns the current values whose keys match a predicate.
    pub fn current_matching<F>(&self, mut predicate: F) -> Vec<(&K, &V)>
    where
        F: FnMut(&K) -> bool,
    {
        self.current
            .iter()
            .filter(|(key, _)| predicate(key))
            .map(|(key, &index)| (key, &self.versions[index].value))
            .collect()
    }

    /// Number of keys with a current version.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Whether no key has a current version.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

/// Attendance and rest records with full version history.
#[derive(Debug, Clone, Default)]
pub struct AttendanceLedger {
    attendance: VersionChain<AttendanceKey, AttendanceRecord>,
    rests: VersionChain<RestKey, RestIntervalRecord>,
}

impl AttendanceLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes an attendance record, replacing any current record for its key.
    pub fn regist_attendance(&mut self, record: AttendanceRecord) -> RecordId {
        self.attendance.regist(record.key(), record)
    }

    /// Writes a rest record, replacing any current record for its key.
    pub fn regist_rest(&mut self, record: RestIntervalRecord) -> RecordId {
        self.rests.regist(record.key(), record)
    }

    /// Returns the current attendance record for a key.
    pub fn attendance(&self, key: &AttendanceKey) -> Option<&AttendanceRecord> {
        self.attendance.current(key)
    }

    /// Returns every version of an attendance record, newest first.
    pub fn attendance_history(&self, key: &AttendanceKey) -> Vec<&Version<AttendanceRecord>> {
        self.attendance.history(key)
    }

    /// Returns the current rest records of an attendance record, by slot.
    pub fn rests(&self, key: &AttendanceKey) -> Vec<&RestIntervalRecord> {
        let mut rests: Vec<_> = self
            .rests
            .current_matching(|rest_key| &rest_key.attendance == key)
            .into_iter()
            .map(|(_, record)| record)
            .collect();
        rests.sort_by_key(|record| record.rest_slot);
        rests
    }

    /// Replaces the rest records of an attendance record with a new set.
    ///
    /// Slots present in `records` are written over their current version so
    /// their history stays linked. Current slots missing from `records` are
    /// retired. Returns the number of slots retired without replacement.
    pub fn replace_rests(
        &mut self,
        key: &AttendanceKey,
        records: &[RestIntervalRecord],
    ) -> EngineResult<usize> {
        let dropped: Vec<RestKey> = self
            .rests
            .current_matching(|rest_key| {
                &rest_key.attendance == key
                    && !records
                        .iter()
                        .any(|record| record.rest_slot == rest_key.rest_slot)
            })
            .into_iter()
            .map(|(rest_key, _)| rest_key.clone())
            .collect();
        for rest_key in &dropped {
            self.rests.retire(rest_key)?;
        }
        for record in records {
            self.regist_rest(record.clone());
        }
        Ok(dropped.len())
    }

    /// Returns every version of a rest record, newest first.
    pub fn rest_history(&self, key: &RestKey) -> Vec<&Version<RestIntervalRecord>> {
        self.rests.history(key)
    }

    /// Retires every current rest record of an attendance record.
    ///
    /// Returns the number of records retired.
    pub fn retire_rests(&mut self, key: &AttendanceKey) -> EngineResult<usize> {
        self.replace_rests(key, &[])
    }

    /// Retires an attendance record together with its rests.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RecordNotFound`] if no current record exists.
    pub fn retire_attendance(&mut self, key: &AttendanceKey) -> EngineResult<RecordId> {
        let id = self.attendance.retire(key)?;
        self.retire_rests(key)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn key(times_work: u32) -> AttendanceKey {
        AttendanceKey {
            employee_id: "emp_001".to_string(),
            work_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            times_work,
        }
    }

    fn record(times_work: u32, work_minutes: i64) -> AttendanceRecord {
        let key = key(times_work);
        AttendanceRecord {
            employee_id: key.employee_id,
            work_date: key.work_date,
            times_work,
            work_type_code: "day".to_string(),
            direct_start: false,
            direct_end: false,
            start_time: None,
            actual_start_time: None,
            end_time: None,
            actual_end_time: None,
            late_minutes: 0,
            leave_early_minutes: 0,
            rest_minutes: 0,
            work_minutes,
            prescribed_work_minutes: 480,
            overtime_minutes: 0,
            overtime_within_legal_minutes: 0,
            overtime_beyond_legal_minutes: 0,
        }
    }

    #[test]
    fn test_replacement_retires_prior_version() {
        let mut ledger = AttendanceLedger::new();
        let first = ledger.regist_attendance(record(1, 400));
        let second = ledger.regist_attendance(record(1, 480));

        assert_ne!(first, second);
        assert_eq!(ledger.attendance(&key(1)).unwrap().work_minutes, 480);

        let history = ledger.attendance_history(&key(1));
        assert_eq!(history.len(), 2);
        assert!(!history[0].retired);
        assert!(history[1].retired);
        assert_eq!(history[0].replaces, Some(first));
    }

    #[test]
    fn test_one_current_record_per_key() {
        let mut chain: VersionChain<String, u32> = VersionChain::new();
        for value in 0..5 {
            chain.regist("a".to_string(), value);
        }
        chain.regist("b".to_string(), 10);

        assert_eq!(chain.len(), 2);
        let current_a: Vec<_> = chain
            .history(&"a".to_string())
            .into_iter()
            .filter(|v| !v.retired)
            .collect();
        assert_eq!(current_a.len(), 1);
        assert_eq!(current_a[0].value, 4);
    }

    #[test]
    fn test_retire_missing_key_is_record_not_found() {
        let mut ledger = AttendanceLedger::new();
        let result = ledger.retire_attendance(&key(1));

        match result {
            Err(EngineError::RecordNotFound { key }) => {
                assert_eq!(key, "emp_001/2025-04-01/1");
            }
            other => panic!("Expected RecordNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_rests_sorted_and_retired_with_attendance() {
        let mut ledger = AttendanceLedger::new();
        ledger.regist_attendance(record(1, 480));
        ledger.regist_rest(RestIntervalRecord::empty(&key(1), 2));
        ledger.regist_rest(RestIntervalRecord::empty(&key(1), 1));
        ledger.regist_rest(RestIntervalRecord::empty(&key(2), 1));

        let slots: Vec<_> = ledger.rests(&key(1)).iter().map(|r| r.rest_slot).collect();
        assert_eq!(slots, vec![1, 2]);

        ledger.retire_attendance(&key(1)).unwrap();
        assert!(ledger.attendance(&key(1)).is_none());
        assert!(ledger.rests(&key(1)).is_empty());
        assert_eq!(ledger.rests(&key(2)).len(), 1);
    }

    #[test]
    fn test_replacing_rests_links_history_per_slot() {
        let mut ledger = AttendanceLedger::new();
        ledger.regist_attendance(record(1, 480));
        let retired = ledger
            .replace_rests(
                &key(1),
                &[
                    RestIntervalRecord::empty(&key(1), 1),
                    RestIntervalRecord::empty(&key(1), 2),
                ],
            )
            .unwrap();
        assert_eq!(retired, 0);

        let slot_1 = RestKey {
            attendance: key(1),
            rest_slot: 1,
        };
        let slot_2 = RestKey {
            attendance: key(1),
            rest_slot: 2,
        };
        let prior_id = ledger.rest_history(&slot_1)[0].id;

        // Registered again with a single rest: slot 1 is replaced, slot 2 dropped
        ledger.regist_attendance(record(1, 480));
        let mut rest = RestIntervalRecord::empty(&key(1), 1);
        rest.rest_minutes = 60;
        let retired = ledger.replace_rests(&key(1), &[rest]).unwrap();
        assert_eq!(retired, 1);

        let history = ledger.rest_history(&slot_1);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].replaces, Some(prior_id));
        assert_eq!(history[0].value.rest_minutes, 60);
        assert!(history[1].retired);

        assert!(ledger.rest_history(&slot_2).is_empty());
        let slots: Vec<_> = ledger.rests(&key(1)).iter().map(|r| r.rest_slot).collect();
        assert_eq!(slots, vec![1]);
    }

    #[test]
    fn test_retired_key_can_be_written_again() {
        let mut chain: VersionChain<String, u32> = VersionChain::new();
        chain.regist("a".to_string(), 1);
        chain.retire(&"a".to_string()).unwrap();
        assert!(chain.current(&"a".to_string()).is_none());

        chain.regist("a".to_string(), 2);
        assert_eq!(chain.current(&"a".to_string()), Some(&2));
        assert_eq!(chain.current_version(&"a".to_string()).unwrap().replaces, None);
    }
}
