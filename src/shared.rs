//! Controller shared between execution contexts
//!
//! The controller itself is unsynchronized. Hosts that touch it from more
//! than one context (main loop and an interrupt, several tasks) keep it in a
//! [`SharedLedController`], which serializes every call with a critical section.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Instant;

use crate::StatusSink;
use crate::controller::{LedController, TickResult};
use crate::error::Result;
use crate::mode::LedMode;
use crate::status::StatusWord;

/// Critical-section guarded [`LedController`]
///
/// Suitable for `static` storage:
///
/// ```ignore
/// static LEDS: SharedLedController<NoSink, 4> =
///     SharedLedController::new(LedController::detached(LedBankConfig::new(DEFAULT_INTERVAL)));
/// ```
///
/// The sink runs inside the critical section and must return promptly.
pub struct SharedLedController<S, const N: usize, W: StatusWord = u32> {
    inner: Mutex<RefCell<LedController<S, N, W>>>,
}

impl<S: StatusSink<W>, const N: usize, W: StatusWord> SharedLedController<S, N, W> {
    pub const fn new(controller: LedController<S, N, W>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(controller)),
        }
    }

    /// Run `f` with exclusive access to the controller
    pub fn lock<R>(&self, f: impl FnOnce(&mut LedController<S, N, W>) -> R) -> R {
        critical_section::with(|cs| {
            let mut controller = self.inner.borrow(cs).borrow_mut();
            f(&mut *controller)
        })
    }

    pub fn set_led(&self, index: usize, mode: LedMode) -> Result<()> {
        self.lock(|controller| controller.set_led(index, mode))
    }

    pub fn led(&self, index: usize) -> Result<LedMode> {
        self.lock(|controller| controller.led(index))
    }

    pub fn set_status(&self, status: W) {
        self.lock(|controller| controller.set_status(status));
    }

    pub fn status(&self) -> W {
        self.lock(|controller| controller.status())
    }

    /// See [`LedController::tick`]
    pub fn tick(&self, now: Instant) -> TickResult<W> {
        self.lock(|controller| controller.tick(now))
    }

    /// Unwrap the controller
    pub fn into_inner(self) -> LedController<S, N, W> {
        self.inner.into_inner().into_inner()
    }
}
