//! Attendance Time & Leave-Balance Computation Engine
//!
//! This crate turns raw time punches and approved requests into normalized
//! attendance figures (start/end time, rest duration, overtime buckets) and
//! computes the leave balance carried over into a new grant cycle.

#![warn(missing_docs)]

pub mod addon;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod service;
