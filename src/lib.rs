#![no_std]

pub mod bank;
pub mod channel;
pub mod config;
pub mod controller;
pub mod error;
pub mod mode;
pub mod shared;
pub mod status;

pub use bank::LedBank;
pub use channel::{StatusChannel, StatusReceiver, StatusSender, TryReceiveError};
pub use config::{DEFAULT_INTERVAL, LedBankConfig, TickOptions};
pub use controller::{LedController, TickResult};
pub use error::LedError;
pub use mode::LedMode;
pub use shared::SharedLedController;
pub use status::StatusWord;

pub use embassy_time::{Duration, Instant};

/// Abstract status sink trait
///
/// Implement this trait to express the bank state on hardware
/// (GPIO bank, shift register, display). Every `FnMut(W)` closure is a sink.
/// A sink must return promptly and handle its own failures.
pub trait StatusSink<W: StatusWord = u32> {
    /// Publish the packed status of the bank
    fn publish(&mut self, status: W);
}

impl<W: StatusWord, F: FnMut(W)> StatusSink<W> for F {
    fn publish(&mut self, status: W) {
        self(status);
    }
}

/// Placeholder sink of a controller created without one
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSink;

impl<W: StatusWord> StatusSink<W> for NoSink {
    fn publish(&mut self, _status: W) {}
}
