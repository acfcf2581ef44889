//! Pure display formatting for CloudUtil.
//!
//! Everything in this crate turns data handed back by the external iCloud
//! client into ready-to-display strings. No I/O and no clock reads: callers
//! pass timestamps and geocoded place names in as plain values.

pub mod contact;
pub mod device;
pub mod text;
pub mod tformat;
pub mod throttle;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("record is not valid JSON: {0}")]
    Parse(String),
    #[error("this device has no associated location information")]
    NoLocation,
    #[error("unable to retrieve device coordinates")]
    NoCoordinates,
    #[error("device location carries no update timestamp")]
    NoLocationTimestamp,
    #[error("unknown name order {0:?} (expected \"first,last\" or \"last,first\")")]
    UnknownNameOrder(String),
    #[error("a message is required")]
    LostModeMessageRequired,
    #[error("pass codes must match")]
    PasscodeMismatch,
}
