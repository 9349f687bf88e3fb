//! Core types and schemas for triple-scan.
//!
//! This module contains the fixed scan configuration and the canonical
//! `Triple` record schema (v1) persisted by every scan.

pub mod config;
pub mod schema;

// Re-export key types for convenience
pub use config::{MarkKind, Partition, ScanConfig, TargetEvent};
pub use schema::{Meet, MeetInfo, Performance, SCHEMA_VERSION, Triple, TripleRow};
