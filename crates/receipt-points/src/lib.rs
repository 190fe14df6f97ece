//! Core library for the receipt loyalty points service.
//!
//! Everything the HTTP shell needs lives here: the receipt domain types, the
//! field validator, the seven-rule points engine, the concurrent score store,
//! and the service facade tying them together. The core is synchronous and
//! free of I/O so each piece can be exercised directly in tests.

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;
