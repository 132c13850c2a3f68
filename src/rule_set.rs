use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
///
/// b0s0:                 0000_0000_0000_0000_0000_0000_0000_0000
/// b012345678s012345678: 0000_0001_1111_1111_0000_0001_1111_1111
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored.
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// Next state of a single cell, given whether it is alive now and how many of its
    /// neighbors are.
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        debug_assert!(neighbors <= 8, "a cell has at most 8 neighbors");

        let mask = 1 << neighbors;

        if alive {
            self.survivals() & mask != 0
        } else {
            self.births() & mask != 0
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("Empty rulestring")]
    Empty,

    #[error("Expected a '/' between births and survivals")]
    MissingSlash,

    #[error("Invalid character '{got}' in rulestring")]
    InvalidChar { got: char },

    #[error("Neighbor counts range from 0 to 8, found {got}")]
    InvalidCount { got: u32 },
}

/// Parses rulestrings like `B3/S23`, `b3s23` or `3/23`. The last form lists births first.
impl FromStr for RuleSet {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum State {
            Birth,
            Survival,
        }

        let s = s.trim();

        if s.is_empty() {
            return Err(RuleError::Empty);
        }

        if !s.contains(['b', 'B', 's', 'S']) {
            let Some((b, s)) = s.split_once('/') else {
                return Err(RuleError::MissingSlash);
            };

            return Ok(RuleSet::new(counts_to_bits(b)?, counts_to_bits(s)?));
        }

        let mut state = State::Birth;
        let (mut b, mut s_) = (0, 0);

        for c in s.chars() {
            match c {
                'b' | 'B' => {
                    state = State::Birth;
                }
                's' | 'S' => {
                    state = State::Survival;
                }
                '/' => {}
                c => {
                    let n = count_to_bit(c)?;

                    match state {
                        State::Birth => b |= n,
                        State::Survival => s_ |= n,
                    }
                }
            }
        }

        Ok(RuleSet::new(b, s_))
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |bits: u16| -> String {
            (0..=8u16)
                .filter(|&n| bits & (1 << n) != 0)
                .map(|n| char::from(b'0' + n as u8))
                .collect()
        };

        write!(f, "B{}/S{}", digits(self.births()), digits(self.survivals()))
    }
}

/// Convert the human readable birth/survival counts to a packed bit representation
fn counts_to_bits(counts: &str) -> Result<u16, RuleError> {
    counts.chars().try_fold(0, |n, c| Ok(n | count_to_bit(c)?))
}

fn count_to_bit(c: char) -> Result<u16, RuleError> {
    let n = c.to_digit(10).ok_or(RuleError::InvalidChar { got: c })?;

    if n > 8 {
        return Err(RuleError::InvalidCount { got: n });
    }

    Ok(1 << n)
}
