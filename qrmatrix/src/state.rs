use std::fmt;
use std::ops::BitXor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// The tag held by one module of the matrix.
///
/// States are mutually exclusive: a cell holds exactly one at a time. The
/// numeric codes are stable and only used for display and ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u16", into = "u16")
)]
#[repr(u16)]
pub enum State {
    /// Not yet assigned.
    #[default]
    Init = 0x0,
    /// Module is off.
    False = 0x1,
    /// Module is on.
    True = 0x2,
    /// Reserved for the version-information block.
    Version = 0x3,
    /// Reserved for the format-information block.
    Format = 0x4,
    /// Reserved for a finder pattern.
    Finder = 0x5,
}

impl State {
    /// Every state, in code order.
    pub const ALL: [State; 6] = [
        State::Init,
        State::False,
        State::True,
        State::Version,
        State::Format,
        State::Finder,
    ];

    /// Numeric code of this state.
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Parse a single data-string character (`'0'`..=`'5'`, the code digit).
    pub fn from_char(c: char) -> Option<State> {
        let digit = c.to_digit(10)?;
        State::try_from(digit as u16).ok()
    }

    /// Inverse of [`State::from_char`].
    pub fn to_char(self) -> char {
        // codes are all below 10
        char::from(b'0' + self as u8)
    }
}

impl TryFrom<u16> for State {
    type Error = ParseError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        State::ALL
            .get(code as usize)
            .copied()
            .ok_or(ParseError::UnknownState(code))
    }
}

impl From<State> for u16 {
    fn from(s: State) -> u16 {
        s.code()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.code())
    }
}

/// `True` when the two states differ, `False` when they are the same tag.
///
/// Only tag equality matters: `Init ^ Init` and `Finder ^ Finder` are both
/// `False`. Used to overlay a data layer with a mask layer.
pub fn combine_xor(a: State, b: State) -> State {
    if a != b {
        State::True
    } else {
        State::False
    }
}

impl BitXor for State {
    type Output = State;

    fn bitxor(self, rhs: State) -> State {
        combine_xor(self, rhs)
    }
}

/// Whether two state sequences have the same length and contents.
pub fn states_match(a: &[State], b: &[State]) -> bool {
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_init() {
        assert_eq!(State::default(), State::Init);
    }

    #[test]
    fn codes_are_stable() {
        let codes: Vec<u16> = State::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn display_uses_hex_form() {
        assert_eq!(State::Init.to_string(), "0x0");
        assert_eq!(State::True.to_string(), "0x2");
        assert_eq!(State::Finder.to_string(), "0x5");
    }

    #[test]
    fn try_from_rejects_unknown_code() {
        assert_eq!(State::try_from(4), Ok(State::Format));
        assert_eq!(State::try_from(6), Err(ParseError::UnknownState(6)));
        assert_eq!(State::try_from(0xFFFF), Err(ParseError::UnknownState(0xFFFF)));
    }

    #[test]
    fn char_alphabet() {
        for s in State::ALL {
            assert_eq!(State::from_char(s.to_char()), Some(s));
        }
        assert_eq!(State::from_char('6'), None);
        assert_eq!(State::from_char('a'), None);
        assert_eq!(State::from_char('x'), None);
    }

    #[test]
    fn xor_differs_predicate() {
        assert_eq!(combine_xor(State::True, State::False), State::True);
        assert_eq!(combine_xor(State::True, State::True), State::False);
        assert_eq!(combine_xor(State::Init, State::Init), State::False);
        assert_eq!(combine_xor(State::Finder, State::Finder), State::False);
        assert_eq!(combine_xor(State::Init, State::False), State::True);
        assert_eq!(State::Version ^ State::Format, State::True);
    }

    #[test]
    fn xor_is_symmetric() {
        for a in State::ALL {
            for b in State::ALL {
                assert_eq!(a ^ b, b ^ a, "{a} ^ {b}");
            }
        }
    }

    #[test]
    fn states_match_checks_length_and_contents() {
        let a = [State::True, State::False, State::Init];
        assert!(states_match(&a, &a));
        assert!(!states_match(&a, &a[..2]));
        assert!(!states_match(&a, &[State::True, State::False, State::Finder]));
        assert!(states_match(&[], &[]));
    }
}
