//! LED modes and the phase transition table
//!
//! Every mode presents exactly one visible bit and has exactly one successor.
//! `On` and `Off` are fixed points, the `*Off` sub-modes are only reachable
//! by advancing a flashing or bounded mode.

const MODE_NAME_ON: &str = "on";
const MODE_NAME_OFF: &str = "off";
const MODE_NAME_FLASH: &str = "flash";
const MODE_NAME_ONCE: &str = "once";
const MODE_NAME_TWICE: &str = "twice";
const MODE_NAME_THRICE: &str = "thrice";
const MODE_NAME_TWICE_OFF: &str = "twice_off";
const MODE_NAME_THRICE_OFF: &str = "thrice_off";
const MODE_NAME_FLASH_OFF: &str = "flash_off";

const MODE_ID_ON: u8 = 0;
const MODE_ID_OFF: u8 = 1;
const MODE_ID_FLASH: u8 = 2;
const MODE_ID_ONCE: u8 = 3;
const MODE_ID_TWICE: u8 = 4;
const MODE_ID_THRICE: u8 = 5;
const MODE_ID_TWICE_OFF: u8 = 6;
const MODE_ID_THRICE_OFF: u8 = 7;
const MODE_ID_FLASH_OFF: u8 = 8;

/// Blink behavior of a single LED slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LedMode {
    /// Permanently on
    On = MODE_ID_ON,
    /// Permanently off
    #[default]
    Off = MODE_ID_OFF,
    /// Equi-phase flashing, on phase
    Flash = MODE_ID_FLASH,
    /// Flash once, then off
    Once = MODE_ID_ONCE,
    /// Flash twice, then off
    Twice = MODE_ID_TWICE,
    /// Flash three times, then off
    Thrice = MODE_ID_THRICE,
    /// Off phase between the first and the last flash of `Twice`
    TwiceOff = MODE_ID_TWICE_OFF,
    /// Off phase between the first and the second flash of `Thrice`
    ThriceOff = MODE_ID_THRICE_OFF,
    /// Off phase of `Flash`
    FlashOff = MODE_ID_FLASH_OFF,
}

impl LedMode {
    /// Modes a host is allowed to assign explicitly
    pub const ASSIGNABLE: [Self; 6] = [
        Self::On,
        Self::Off,
        Self::Flash,
        Self::Once,
        Self::Twice,
        Self::Thrice,
    ];

    /// Advance by one phase.
    ///
    /// Returns the successor mode together with the bit this mode presents
    /// for the phase being left behind.
    pub const fn step(self) -> (Self, bool) {
        let next = match self {
            Self::On => Self::On,
            Self::Off => Self::Off,
            Self::Flash => Self::FlashOff,
            Self::FlashOff => Self::Flash,
            Self::Once => Self::Off,
            Self::Twice => Self::TwiceOff,
            Self::TwiceOff => Self::Once,
            Self::Thrice => Self::ThriceOff,
            Self::ThriceOff => Self::Twice,
        };
        (next, self.is_lit())
    }

    /// Successor mode in the transition table
    #[must_use]
    pub const fn next(self) -> Self {
        self.step().0
    }

    /// Visible bit of the mode
    pub const fn is_lit(self) -> bool {
        match self {
            Self::On | Self::Flash | Self::Once | Self::Twice | Self::Thrice => true,
            Self::Off | Self::FlashOff | Self::TwiceOff | Self::ThriceOff => false,
        }
    }

    /// Check if the mode may be passed to an explicit assignment
    pub const fn is_assignable(self) -> bool {
        !matches!(self, Self::FlashOff | Self::TwiceOff | Self::ThriceOff)
    }

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_ON => Self::On,
            MODE_ID_OFF => Self::Off,
            MODE_ID_FLASH => Self::Flash,
            MODE_ID_ONCE => Self::Once,
            MODE_ID_TWICE => Self::Twice,
            MODE_ID_THRICE => Self::Thrice,
            MODE_ID_TWICE_OFF => Self::TwiceOff,
            MODE_ID_THRICE_OFF => Self::ThriceOff,
            MODE_ID_FLASH_OFF => Self::FlashOff,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => MODE_NAME_ON,
            Self::Off => MODE_NAME_OFF,
            Self::Flash => MODE_NAME_FLASH,
            Self::Once => MODE_NAME_ONCE,
            Self::Twice => MODE_NAME_TWICE,
            Self::Thrice => MODE_NAME_THRICE,
            Self::TwiceOff => MODE_NAME_TWICE_OFF,
            Self::ThriceOff => MODE_NAME_THRICE_OFF,
            Self::FlashOff => MODE_NAME_FLASH_OFF,
        }
    }

    /// Parse an assignable mode by name.
    ///
    /// Internal off phases are not accepted.
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_ON => Some(Self::On),
            MODE_NAME_OFF => Some(Self::Off),
            MODE_NAME_FLASH => Some(Self::Flash),
            MODE_NAME_ONCE => Some(Self::Once),
            MODE_NAME_TWICE => Some(Self::Twice),
            MODE_NAME_THRICE => Some(Self::Thrice),
            _ => None,
        }
    }
}

impl core::fmt::Display for LedMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
