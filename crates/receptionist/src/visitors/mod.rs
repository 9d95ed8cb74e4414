//! Pre-call context: the visitor the receptionist should expect on the next call.

pub mod domain;
pub mod router;

pub use domain::{sample_visitors, PreCallContext, VisitorInfo, VISITOR_INSTRUCTIONS};
pub use router::visitor_router;
