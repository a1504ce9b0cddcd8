//! Fixed-size bank of LED slots
//!
//! The bank only holds modes. Timing and status reporting live in
//! [`LedController`](crate::controller::LedController).

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::error::{LedError, Result};
use crate::mode::LedMode;
use crate::status::StatusWord;

/// Bank of `N` virtual LEDs reported through a status word of type `W`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedBank<const N: usize, W: StatusWord = u32> {
    slots: [LedMode; N],
    _word: core::marker::PhantomData<W>,
}

impl<const N: usize, W: StatusWord> LedBank<N, W> {
    const SIZE_CHECK: () = assert!(
        N >= 1 && N <= W::BITS as usize,
        "LED bank size must be between 1 and the status word width"
    );

    /// Create a bank with every LED off
    pub const fn new() -> Self {
        let () = Self::SIZE_CHECK;
        Self {
            slots: [LedMode::Off; N],
            _word: core::marker::PhantomData,
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

    /// Overwrite every LED with `On` or `Off` from the bits of `status`.
    ///
    /// Any flash sequence in progress is discarded. Bits above the bank
    /// size are ignored.
    pub fn set_status(&mut self, status: W) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            *slot = if status.bit(index) {
                LedMode::On
            } else {
                LedMode::Off
            };
        }
    }

    /// Encode the visible state of every LED
    pub fn status(&self) -> W {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, mode)| mode.is_lit())
            .fold(W::EMPTY, |status, (index, _)| status.with_bit(index))
    }

    /// Assign a mode to a single LED
    pub fn set_led(&mut self, index: usize, mode: LedMode) -> Result<()> {
        let mode = Self::check_assignable(mode)?;
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(LedError::IndexOutOfRange { index, len: N })?;
        *slot = mode;
        Ok(())
    }

    /// Assign the same mode to every LED
    pub fn set_all(&mut self, mode: LedMode) -> Result<()> {
        let mode = Self::check_assignable(mode)?;
        self.slots = [mode; N];
        Ok(())
    }

    /// Current mode of a single LED
    pub fn led(&self, index: usize) -> Result<LedMode> {
        self.slots
            .get(index)
            .copied()
            .ok_or(LedError::IndexOutOfRange { index, len: N })
    }

    /// Current modes of all LEDs, in index order
    pub fn modes(&self) -> &[LedMode; N] {
        &self.slots
    }

    /// Advance every LED by one phase.
    ///
    /// Returns the status word of the phase each LED presents until the next
    /// advance, i.e. the visible bits of the modes before the transition.
    pub fn advance(&mut self) -> W {
        let mut status = W::EMPTY;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let (next, lit) = slot.step();
            if lit {
                status = status.with_bit(index);
            }
            *slot = next;
        }
        status
    }

    fn check_assignable(mode: LedMode) -> Result<LedMode> {
        if mode.is_assignable() {
            return Ok(mode);
        }
        #[cfg(feature = "esp32-log")]
        println!("[LedBank.set_led] rejected internal mode {}", mode.as_str());
        Err(LedError::InternalMode(mode))
    }
}

impl<const N: usize, W: StatusWord> Default for LedBank<N, W> {
    fn default() -> Self {
        Self::new()
    }
}
