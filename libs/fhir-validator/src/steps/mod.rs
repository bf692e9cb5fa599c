//! Shared sub-validators.
//!
//! Each check is a free function returning at most one [`ValidationError`](crate::ValidationError),
//! so the walker and callers validating hand-built values share one set of messages.

pub mod references;
pub mod structure;
