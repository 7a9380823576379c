//! Report orchestration
//!
//! Fallback on create, mapping-based routing on update and get.

pub mod service;

pub use service::ReportService;
