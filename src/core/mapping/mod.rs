//! Opaque id indirection
//!
//! This module provides the in-memory table that maps opaque API ids to the
//! provider and provider-local id that store each record.

pub mod table;

pub use table::MappingTable;
