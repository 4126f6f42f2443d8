//! The sixteen base16 slot names and their ANSI palette positions.

use std::fmt;
use std::str::FromStr;

/// One of the sixteen base16 colour roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Base00,
    Base01,
    Base02,
    Base03,
    Base04,
    Base05,
    Base06,
    Base07,
    Base08,
    Base09,
    Base0A,
    Base0B,
    Base0C,
    Base0D,
    Base0E,
    Base0F,
}

/// ANSI palette index -> base16 slot. Index 1 is `base08`, not `base01`.
pub const ANSI_ORDER: [Slot; 16] = [
    Slot::Base00,
    Slot::Base08,
    Slot::Base0B,
    Slot::Base0A,
    Slot::Base0D,
    Slot::Base0E,
    Slot::Base0C,
    Slot::Base05,
    Slot::Base03,
    Slot::Base09,
    Slot::Base01,
    Slot::Base02,
    Slot::Base04,
    Slot::Base06,
    Slot::Base0F,
    Slot::Base07,
];

impl Slot {
    /// Key used in scheme files.
    pub fn key(self) -> &'static str {
        match self {
            Self::Base00 => "base00",
            Self::Base01 => "base01",
            Self::Base02 => "base02",
            Self::Base03 => "base03",
            Self::Base04 => "base04",
            Self::Base05 => "base05",
            Self::Base06 => "base06",
            Self::Base07 => "base07",
            Self::Base08 => "base08",
            Self::Base09 => "base09",
            Self::Base0A => "base0A",
            Self::Base0B => "base0B",
            Self::Base0C => "base0C",
            Self::Base0D => "base0D",
            Self::Base0E => "base0E",
            Self::Base0F => "base0F",
        }
    }

    /// All slots in `base00`..`base0F` order.
    pub fn all() -> &'static [Slot; 16] {
        &[
            Self::Base00,
            Self::Base01,
            Self::Base02,
            Self::Base03,
            Self::Base04,
            Self::Base05,
            Self::Base06,
            Self::Base07,
            Self::Base08,
            Self::Base09,
            Self::Base0A,
            Self::Base0B,
            Self::Base0C,
            Self::Base0D,
            Self::Base0E,
            Self::Base0F,
        ]
    }

    /// Position of this slot in [`Slot::all`].
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Slot {
    type Err = String;

    /// Parses a slot key. Exact match only: `base0a` is not `base0A`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|slot| slot.key() == s)
            .ok_or_else(|| format!("unknown slot `{s}` (expected base00..base0F)"))
    }
}
