//! Read-only employee directory used as the callback target for voice-bot lookups.

pub mod domain;
pub mod matcher;

pub use domain::{EmployeeDirectory, EmployeeId, EmployeeRecord};
pub use matcher::{find_employee, MatchOutcome};
