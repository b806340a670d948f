//! Card ability keywords as a compact bitset.
//!
//! The six keywords fit in one byte, which keeps `Card` small and makes the
//! hot simulation operations (grant, strip, test) single bit operations:
//!
//! - **Breakthrough**: excess combat damage carries to the defending player
//! - **Charge**: may attack on the turn it is summoned
//! - **Drain**: damage dealt heals the owner
//! - **Guard**: attacks must target Guard creatures while any exist
//! - **Lethal**: any positive combat damage destroys the target
//! - **Ward**: absorbs the next damage instance, then is removed
//!
//! ```
//! use locm_solver::cards::{Ability, Abilities};
//!
//! let mut a = Abilities::from_letters("B--G--").unwrap();
//! assert!(a.has(Ability::Guard));
//!
//! a.remove_all(Abilities::single(Ability::Guard));
//! assert_eq!(a.to_string(), "B-----");
//! ```

use serde::{Deserialize, Serialize};

/// A single ability keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    Breakthrough,
    Charge,
    Drain,
    Guard,
    Lethal,
    Ward,
}

impl Ability {
    /// All abilities in protocol letter order.
    pub const ALL: [Ability; 6] = [
        Ability::Breakthrough,
        Ability::Charge,
        Ability::Drain,
        Ability::Guard,
        Ability::Lethal,
        Ability::Ward,
    ];

    /// Bit for this ability.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Ability::Breakthrough => 0x01,
            Ability::Charge => 0x02,
            Ability::Drain => 0x04,
            Ability::Guard => 0x08,
            Ability::Lethal => 0x10,
            Ability::Ward => 0x20,
        }
    }

    /// Protocol letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Ability::Breakthrough => 'B',
            Ability::Charge => 'C',
            Ability::Drain => 'D',
            Ability::Guard => 'G',
            Ability::Lethal => 'L',
            Ability::Ward => 'W',
        }
    }

    /// Parse a protocol letter.
    #[must_use]
    pub fn from_letter(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.letter() == c)
    }
}

/// Set of abilities packed into one byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Abilities(u8);

impl Abilities {
    /// No abilities.
    pub const EMPTY: Abilities = Abilities(0);

    const MASK: u8 = 0x3F;

    /// Build from raw bits (bits above the six keywords are dropped).
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    /// Set with one ability.
    #[must_use]
    pub const fn single(ability: Ability) -> Self {
        Self(ability.bit())
    }

    /// Raw bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn has(self, ability: Ability) -> bool {
        self.0 & ability.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of abilities present.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn insert(&mut self, ability: Ability) {
        self.0 |= ability.bit();
    }

    pub fn remove(&mut self, ability: Ability) {
        self.0 &= !ability.bit();
    }

    /// Union in place (green items grant abilities).
    pub fn insert_all(&mut self, other: Abilities) {
        self.0 |= other.0;
    }

    /// Difference in place (red/blue items strip abilities).
    pub fn remove_all(&mut self, other: Abilities) {
        self.0 &= !other.0 & Self::MASK;
    }

    #[must_use]
    pub const fn union(self, other: Abilities) -> Abilities {
        Abilities(self.0 | other.0)
    }

    #[must_use]
    pub const fn difference(self, other: Abilities) -> Abilities {
        Abilities(self.0 & !other.0 & Self::MASK)
    }

    /// Iterate over the abilities present, in protocol order.
    pub fn iter(self) -> impl Iterator<Item = Ability> {
        Ability::ALL.into_iter().filter(move |a| self.has(*a))
    }

    /// Parse protocol letters such as `"BC-G--"`.
    ///
    /// Position is ignored; `-` is filler. Returns the first unknown
    /// character as the error.
    pub fn from_letters(letters: &str) -> Result<Self, char> {
        let mut abilities = Abilities::EMPTY;
        for c in letters.chars() {
            if c == '-' {
                continue;
            }
            let ability = Ability::from_letter(c).ok_or(c)?;
            abilities.insert(ability);
        }
        Ok(abilities)
    }
}

impl From<Ability> for Abilities {
    fn from(ability: Ability) -> Self {
        Abilities::single(ability)
    }
}

impl FromIterator<Ability> for Abilities {
    fn from_iter<I: IntoIterator<Item = Ability>>(iter: I) -> Self {
        let mut abilities = Abilities::EMPTY;
        for a in iter {
            abilities.insert(a);
        }
        abilities
    }
}

impl std::fmt::Display for Abilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for a in Ability::ALL {
            let c = if self.has(a) { a.letter() } else { '-' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
