//! Leave history access and the attendance record ledger.

mod store;
mod version_chain;

pub use store::{HistoryStore, InMemoryHistoryStore};
pub use version_chain::{AttendanceLedger, RecordId, Version, VersionChain};
