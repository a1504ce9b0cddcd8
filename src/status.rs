//! Packed status words
//!
//! Bit `i` of a status word is the visible state of LED `i`.

use core::fmt::Debug;

/// Unsigned integer usable as a packed status word.
///
/// The width of the word bounds the number of LEDs in a bank.
pub trait StatusWord: Copy + Eq + Default + Debug {
    /// Number of LEDs the word can describe
    const BITS: u32;

    /// Word with every LED off
    const EMPTY: Self;

    /// Read the bit of LED `index`
    fn bit(self, index: usize) -> bool;

    /// Returns the word with the bit of LED `index` set
    #[must_use]
    fn with_bit(self, index: usize) -> Self;
}

macro_rules! impl_status_word {
    ($($word:ty),*) => {
        $(
            impl StatusWord for $word {
                const BITS: u32 = <$word>::BITS;
                const EMPTY: Self = 0;

                fn bit(self, index: usize) -> bool {
                    (self >> index) & 0x01 == 0x01
                }

                fn with_bit(self, index: usize) -> Self {
                    self | (0x01 << index)
                }
            }
        )*
    };
}

impl_status_word!(u8, u16, u32);
