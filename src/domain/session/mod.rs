//! Session domain module.
//!
//! A session is one logged stretch of poker play: where, at what stakes,
//! how much went in and came out, and for how long. Records are plain data;
//! net profit and bb/hour are derived on read by [`metrics`].

mod errors;
pub mod metrics;
mod record;

pub use errors::SessionError;
pub use metrics::{BankrollSummary, CumulativePoint};
pub use record::{
    NewSession, SessionChanges, SessionInput, SessionPatch, SessionRecord, MAX_LOCATION_LEN,
};
