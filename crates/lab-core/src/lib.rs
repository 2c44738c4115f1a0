//! # lab-core
//!
//! Core types shared across all labtrack crates:
//! - Entity structs for ideas, tasks, deliverables, and update logs
//! - Status enums and risk classification enums
//! - [`YearMonth`](month::YearMonth), the calendar month value used for all
//!   start/due/target months
//! - [`Snapshot`](snapshot::Snapshot), the loaded entity collections handed to
//!   the analytics engine
//! - ID prefix constants and random ID generation
//! - Response types produced by the engine
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod month;
pub mod responses;
pub mod snapshot;
