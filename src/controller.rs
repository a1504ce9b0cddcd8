//! Tick-driven LED bank controller
//!
//! Portable phase pacing without async/await or platform-specific timers.
//! The caller supplies the current time and decides how often to tick.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bank::LedBank;
use crate::config::{LedBankConfig, TickOptions};
use crate::error::Result;
use crate::mode::LedMode;
use crate::status::StatusWord;
use crate::{NoSink, StatusSink};

/// Result of a controller tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult<W> {
    /// Status word published by the tick, `None` if the tick was not due.
    pub status: Option<W>,
    /// The deadline of the next automatic advance, `None` if ticks are not gated.
    pub next_deadline: Option<Instant>,
}

impl<W> TickResult<W> {
    /// Check if the bank was advanced
    pub const fn is_advanced(&self) -> bool {
        self.status.is_some()
    }

    /// How long the caller may wait before the next tick can be due.
    ///
    /// Zero if ticks are not gated or the deadline has already passed.
    pub fn wait_time(&self, now: Instant) -> Duration {
        match self.next_deadline {
            Some(deadline) if deadline > now => deadline - now,
            _ => Duration::from_ticks(0),
        }
    }
}

/// LED bank controller
///
/// Owns the LED slots, the shared phase interval, the deadline and the status
/// sink. Every LED runs its own mode state machine, all of them share a
/// single clock gate.
///
/// # Usage
///
/// ```ignore
/// let mut leds = LedController::<_, 8>::new(LedBankConfig::default(), |status| {
///     shift_register.write(status);
/// });
/// leds.set_led(0, LedMode::Flash)?;
///
/// loop {
///     leds.tick(Instant::now());
///     // other work
/// }
/// ```
pub struct LedController<S, const N: usize, W: StatusWord = u32> {
    bank: LedBank<N, W>,
    config: LedBankConfig,
    deadline: Instant,
    /// Status word of the last due tick
    presented: W,
    sink: Option<S>,
}

impl<const N: usize, W: StatusWord> LedController<NoSink, N, W> {
    /// Create a controller without a status sink.
    ///
    /// Ticks still advance the bank, nothing is published.
    pub const fn detached(config: LedBankConfig) -> Self {
        Self::with_sink(config, None)
    }
}

impl<S: StatusSink<W>, const N: usize, W: StatusWord> LedController<S, N, W> {
    /// Create a controller with every LED off, publishing to `sink`
    pub const fn new(config: LedBankConfig, sink: S) -> Self {
        Self::with_sink(config, Some(sink))
    }

    /// Create a controller with an optional status sink
    pub const fn with_sink(config: LedBankConfig, sink: Option<S>) -> Self {
        Self {
            bank: LedBank::new(),
            config,
            deadline: Instant::from_ticks(0),
            presented: W::EMPTY,
            sink,
        }
    }

    /// Number of LEDs in the bank
    pub const fn len(&self) -> usize {
        N
    }

    /// Always false, a bank holds at least one LED
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub const fn config(&self) -> &LedBankConfig {
        &self.config
    }

    /// Change the phase interval.
    ///
    /// The current deadline is kept, the new interval applies from the next
    /// advance on.
    pub fn set_interval(&mut self, interval: Duration) {
        self.config.interval = interval;
    }

    /// Deadline of the next automatic advance, `None` if ticks are not gated
    pub fn deadline(&self) -> Option<Instant> {
        self.config.is_gated().then_some(self.deadline)
    }

    pub const fn bank(&self) -> &LedBank<N, W> {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut LedBank<N, W> {
        &mut self.bank
    }

    /// Set every LED on or off from a status word.
    ///
    /// Does not publish anything.
    pub fn set_status(&mut self, status: W) {
        self.bank.set_status(status);
    }

    /// Visible state of the bank, without advancing it
    pub fn status(&self) -> W {
        self.bank.status()
    }

    /// Assign a mode to a single LED
    pub fn set_led(&mut self, index: usize, mode: LedMode) -> Result<()> {
        self.bank.set_led(index, mode)
    }

    /// Assign the same mode to every LED
    pub fn set_all(&mut self, mode: LedMode) -> Result<()> {
        self.bank.set_all(mode)
    }

    /// Current mode of a single LED
    pub fn led(&self, index: usize) -> Result<LedMode> {
        self.bank.led(index)
    }

    /// Tick with default options and return the status word the LEDs
    /// currently present.
    ///
    /// On a due tick this is the word the tick published. Otherwise it is the
    /// word of the last due tick, which stays on display until the deadline.
    pub fn refresh_status(&mut self, now: Instant) -> W {
        self.tick(now);
        self.presented
    }

    /// Advance the bank if the interval has elapsed and publish the status.
    ///
    /// Call this frequently, e.g. on every main loop iteration.
    pub fn tick(&mut self, now: Instant) -> TickResult<W> {
        self.tick_with(now, TickOptions::DEFAULT)
    }

    /// Advance the bank with explicit options.
    ///
    /// A tick is due when ticks are not gated, when `now` has reached the
    /// deadline, or when `options.force` is set. A due tick:
    /// 1. Moves every LED to its successor mode
    /// 2. Re-arms the deadline to `now + interval` (gated ticks only)
    /// 3. Publishes the presented status word if `options.notify` is set
    pub fn tick_with(&mut self, now: Instant, options: TickOptions) -> TickResult<W> {
        if !options.force && !self.is_due(now) {
            return TickResult {
                status: None,
                next_deadline: self.deadline(),
            };
        }

        let status = self.bank.advance();
        self.presented = status;
        if self.config.is_gated() {
            self.deadline = now
                .checked_add(self.config.interval)
                .unwrap_or(Instant::MAX);
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[LedController.tick] advanced at {:?}ms, status {:?}",
            now.as_millis(),
            status
        );

        if options.notify {
            if let Some(sink) = self.sink.as_mut() {
                sink.publish(status);
            }
        }

        TickResult {
            status: Some(status),
            next_deadline: self.deadline(),
        }
    }

    fn is_due(&self, now: Instant) -> bool {
        !self.config.is_gated() || now >= self.deadline
    }
}
