//! Colour validation and the resolved 16-colour palette.
//!
//! [`ResolvedPalette::resolve`] validates every slot up front, so a single bad
//! entry aborts the run before anything is written anywhere.

mod slot;

use std::fmt;
use std::str::FromStr;

use crate::error::UnmappedColourError;
use crate::scheme::ColourScheme;

pub use slot::{Slot, ANSI_ORDER};

/// A validated `#rrggbb` colour. Hex digit case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Colour(String);

impl Colour {
    /// Accepts exactly six hex digits, without a leading `#`.
    pub fn from_hex_digits(digits: &str) -> Option<Self> {
        if digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(format!("#{digits}")))
        } else {
            None
        }
    }

    /// The colour with its `#` sigil, e.g. `#1d2021`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).unwrap_or(0)
        };
        (channel(1..3), channel(3..5), channel(5..7))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Colour {
    type Err = String;

    /// Parses a `#rrggbb` literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('#')
            .and_then(Self::from_hex_digits)
            .ok_or_else(|| format!("`{s}` is not a #rrggbb colour"))
    }
}

/// Validate one slot of `scheme`.
pub fn resolve(scheme: &ColourScheme, slot: Slot) -> Result<Colour, UnmappedColourError> {
    scheme
        .get(slot.key())
        .and_then(Colour::from_hex_digits)
        .ok_or_else(|| UnmappedColourError {
            slot,
            value: scheme.raw(slot.key()).map(str::to_string),
        })
}

/// All sixteen slots of a scheme, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPalette {
    colours: Vec<Colour>,
}

impl ResolvedPalette {
    /// Resolve `base00`..`base0F` in order, stopping at the first bad slot.
    pub fn resolve(scheme: &ColourScheme) -> Result<Self, UnmappedColourError> {
        let colours = Slot::all()
            .iter()
            .map(|slot| resolve(scheme, *slot))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colours })
    }

    pub fn get(&self, slot: Slot) -> &Colour {
        &self.colours[slot.ordinal()]
    }

    /// Colour for ANSI palette index `index` (0..=15).
    pub fn ansi(&self, index: usize) -> Option<&Colour> {
        ANSI_ORDER.get(index).map(|slot| self.get(*slot))
    }

    /// `(slot, colour)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &Colour)> {
        Slot::all().iter().copied().zip(self.colours.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::gruvbox_scheme;

    #[test]
    fn resolve_adds_sigil_and_keeps_case() {
        let scheme: ColourScheme = [("base0A".to_string(), "FaBd2F".to_string())]
            .into_iter()
            .collect();
        assert_eq!(resolve(&scheme, Slot::Base0A).unwrap().as_str(), "#FaBd2F");
    }

    #[test]
    fn resolve_rejects_missing_slot() {
        let err = resolve(&ColourScheme::default(), Slot::Base07).unwrap_err();
        assert_eq!(err.slot, Slot::Base07);
        assert_eq!(err.value, None);
    }

    #[test]
    fn resolve_rejects_bad_values() {
        for bad in ["", "12345", "1234567", "#123456", "12345g", " 123456", "ｆｆｆｆｆｆ"] {
            let scheme: ColourScheme = [("base00".to_string(), bad.to_string())]
                .into_iter()
                .collect();
            let err = resolve(&scheme, Slot::Base00).unwrap_err();
            assert_eq!(err.value.as_deref(), Some(bad));
        }
    }

    #[test]
    fn resolve_rejects_unquoted_yaml_numbers() {
        let scheme =
            ColourScheme::from_yaml_str("base0D: 123e45\nbase00: 282828\n", "inline").unwrap();
        let err = resolve(&scheme, Slot::Base0D).unwrap_err();
        assert_eq!(err.slot, Slot::Base0D);
        assert!(err.value.is_some(), "value is reported: {err}");
        assert_eq!(
            resolve(&scheme, Slot::Base00).unwrap_err().to_string(),
            "base00 not mapped to a valid colour: 282828"
        );
    }

    #[test]
    fn palette_resolves_all_slots() {
        let palette = ResolvedPalette::resolve(&gruvbox_scheme()).unwrap();
        assert_eq!(palette.get(Slot::Base00).as_str(), "#1d2021");
        assert_eq!(palette.get(Slot::Base0B).as_str(), "#b8bb26");
        assert_eq!(palette.iter().count(), 16);
    }

    #[test]
    fn palette_fails_on_first_bad_slot_in_order() {
        let mut entries: Vec<(String, String)> = Slot::all()
            .iter()
            .map(|slot| (slot.key().to_string(), "000000".to_string()))
            .collect();
        entries.retain(|(k, _)| k != "base03");
        entries.retain(|(k, _)| k != "base09");
        let scheme: ColourScheme = entries.into_iter().collect();
        let err = ResolvedPalette::resolve(&scheme).unwrap_err();
        assert_eq!(err.slot, Slot::Base03);
    }

    #[test]
    fn ansi_lookup_follows_mapping() {
        let palette = ResolvedPalette::resolve(&gruvbox_scheme()).unwrap();
        assert_eq!(palette.ansi(1), Some(palette.get(Slot::Base08)));
        assert_eq!(palette.ansi(10), Some(palette.get(Slot::Base01)));
        assert_eq!(palette.ansi(16), None);
    }

    #[test]
    fn colour_literal_parsing() {
        let grey: Colour = "#333333".parse().unwrap();
        assert_eq!(grey.rgb(), (0x33, 0x33, 0x33));
        assert!("333333".parse::<Colour>().is_err());
        assert!("#33333".parse::<Colour>().is_err());
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn valid_hex_round_trips_with_sigil(
                digits in proptest::string::string_regex("[0-9A-Fa-f]{6}").expect("regex")
            ) {
                let scheme: ColourScheme = [("base05".to_string(), digits.clone())]
                    .into_iter()
                    .collect();
                let colour = resolve(&scheme, Slot::Base05).unwrap();
                prop_assert_eq!(colour.as_str(), format!("#{digits}"));
            }

            #[test]
            fn wrong_length_is_rejected(
                digits in proptest::string::string_regex("[0-9a-f]{0,5}|[0-9a-f]{7,10}").expect("regex")
            ) {
                let scheme: ColourScheme = [("base05".to_string(), digits)]
                    .into_iter()
                    .collect();
                prop_assert!(resolve(&scheme, Slot::Base05).is_err());
            }
        }
    }
}
