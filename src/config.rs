use embassy_time::Duration;

/// Default phase duration of the bank (equates to the flash rate).
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

/// Configuration for the LED bank controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedBankConfig {
    /// Time between two automatic phase advances.
    ///
    /// Zero disables the deadline gate: every tick advances the bank.
    pub interval: Duration,
}

impl LedBankConfig {
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Check if ticks are gated by a deadline
    pub const fn is_gated(&self) -> bool {
        self.interval.as_ticks() > 0
    }
}

impl Default for LedBankConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

/// Per-call options of a controller tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOptions {
    /// Advance even if the deadline has not been reached yet
    pub force: bool,
    /// Publish the status word to the sink after an advance
    pub notify: bool,
}

impl TickOptions {
    pub const DEFAULT: Self = Self {
        force: false,
        notify: true,
    };

    /// Ignore the deadline
    #[must_use]
    pub const fn forced(self) -> Self {
        Self {
            force: true,
            ..self
        }
    }

    /// Do not publish the status word
    #[must_use]
    pub const fn silent(self) -> Self {
        Self {
            notify: false,
            ..self
        }
    }
}

impl Default for TickOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
