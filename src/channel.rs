//! Portable bounded status channel for `no_std` environments.
//!
//! Lets a controller publish status words to another execution context
//! (an interrupt handler, a display task). Built on `critical-section`
//! and `heapless::Deque`. Thread/interrupt safe via critical sections.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StatusSink;
use crate::status::StatusWord;

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, thread-safe queue of status words.
///
/// When the queue is full the oldest word is discarded, so the most recent
/// status of the bank is always delivered.
pub struct StatusChannel<W: StatusWord, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<W, SIZE>>>,
}

impl<W: StatusWord, const SIZE: usize> StatusChannel<W, SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    ///
    /// The sender is a [`StatusSink`] and can be handed to a controller.
    pub const fn sender(&self) -> StatusSender<'_, W, SIZE> {
        StatusSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> StatusReceiver<'_, W, SIZE> {
        StatusReceiver { channel: self }
    }

    /// Push a status word, discarding the oldest one if the channel is full.
    ///
    /// Returns the discarded word, if any.
    pub fn publish(&self, status: W) -> Option<W> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            let dropped = if queue.is_full() {
                queue.pop_front()
            } else {
                None
            };
            // Cannot fail: a slot has been freed above
            let _ = queue.push_back(status);

            #[cfg(feature = "esp32-log")]
            if let Some(dropped) = dropped {
                println!("[StatusChannel.publish] queue full, dropped {:?}", dropped);
            }

            dropped
        })
    }

    /// Try to receive the oldest status word.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<W, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Drain the channel and return the most recent status word.
    pub fn latest(&self) -> Option<W> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            let latest = queue.pop_back();
            queue.clear();
            latest
        })
    }

    /// Number of queued status words
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<W: StatusWord, const SIZE: usize> Default for StatusChannel<W, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`StatusChannel`].
///
/// This is a lightweight reference that can be copied and passed around.
#[derive(Clone, Copy)]
pub struct StatusSender<'a, W: StatusWord, const SIZE: usize> {
    channel: &'a StatusChannel<W, SIZE>,
}

impl<W: StatusWord, const SIZE: usize> StatusSender<'_, W, SIZE> {
    /// Push a status word, discarding the oldest one if the channel is full.
    pub fn send(&self, status: W) -> Option<W> {
        self.channel.publish(status)
    }
}

impl<W: StatusWord, const SIZE: usize> StatusSink<W> for StatusSender<'_, W, SIZE> {
    fn publish(&mut self, status: W) {
        self.channel.publish(status);
    }
}

/// A receiver handle for a [`StatusChannel`].
///
/// This is a lightweight reference that can be copied and passed around.
#[derive(Clone, Copy)]
pub struct StatusReceiver<'a, W: StatusWord, const SIZE: usize> {
    channel: &'a StatusChannel<W, SIZE>,
}

impl<W: StatusWord, const SIZE: usize> StatusReceiver<'_, W, SIZE> {
    /// Try to receive the oldest status word.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<W, TryReceiveError> {
        self.channel.try_receive()
    }

    /// Drain the channel and return the most recent status word.
    pub fn latest(&self) -> Option<W> {
        self.channel.latest()
    }
}
