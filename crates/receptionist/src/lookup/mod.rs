//! Function-call endpoint invoked by the voice platform to look up an employee.
//!
//! Inbound bodies arrive in several shapes depending on how the bot's tool was
//! configured. [`normalizer`] reduces any of them to a single candidate name and
//! [`service`] resolves that name against the [`EmployeeDirectory`](crate::directory::EmployeeDirectory).

pub mod normalizer;
pub mod router;
pub mod service;

pub use normalizer::{extract_employee_name, CandidateName, NameExtractionError, NameSource};
pub use router::lookup_router;
pub use service::{lookup_employee, FunctionCallResponse, LookupResult};
