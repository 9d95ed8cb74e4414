//! Integration layer for receptionist voice bots.
//!
//! The crate owns the employee directory lookup invoked by the voice platform as a
//! function call, plus the supporting bot, call-log, and visitor endpoints.

pub mod bots;
pub mod calls;
pub mod config;
pub mod directory;
pub mod error;
pub mod lookup;
pub mod openmic;
pub mod telemetry;
pub mod visitors;
