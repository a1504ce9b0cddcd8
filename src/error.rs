use displaydoc::Display;

use crate::mode::LedMode;

/// A specialized result type for LED bank operations.
pub type Result<T> = core::result::Result<T, LedError>;

/// Caller errors rejected by the LED bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum LedError {
    /// LED index {index} is out of range for a bank of {len} LEDs
    IndexOutOfRange { index: usize, len: usize },
    /// mode `{0}` is an internal phase and cannot be assigned
    InternalMode(LedMode),
}

impl core::error::Error for LedError {}
