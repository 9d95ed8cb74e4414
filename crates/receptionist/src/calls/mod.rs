//! Call logs reported by the voice platform after each call, plus upstream history.

pub mod domain;
pub mod router;
pub mod store;

pub use domain::{CallLog, DEFAULT_BOT_NAME};
pub use router::{call_router, CallRoutesState};
pub use store::{CallLogError, CallLogStore, InMemoryCallLogStore, JsonFileCallLogStore};
