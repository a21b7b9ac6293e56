//! Year and month signs.

use mmcal_calendar::{Month, MyanmarDate};

/// The mahabote birth sign of a year, from the year number and the
/// weekday it is read on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mahabote {
    /// Sign 0.
    Binga,
    /// Sign 1.
    Atun,
    /// Sign 2.
    Yaza,
    /// Sign 3.
    Adipati,
    /// Sign 4.
    Marana,
    /// Sign 5.
    Thike,
    /// Sign 6.
    Puti,
}

impl Mahabote {
    /// Returns the transliterated name of the sign.
    pub fn name(self) -> &'static str {
        match self {
            Mahabote::Binga => "Binga",
            Mahabote::Atun => "Atun",
            Mahabote::Yaza => "Yaza",
            Mahabote::Adipati => "Adipati",
            Mahabote::Marana => "Marana",
            Mahabote::Thike => "Thike",
            Mahabote::Puti => "Puti",
        }
    }
}

/// The three-year nakhat cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakhat {
    /// Cycle position 0.
    Ogre,
    /// Cycle position 1.
    Elf,
    /// Cycle position 2.
    Human,
}

impl Nakhat {
    /// Returns the English name of the cycle position.
    pub fn name(self) -> &'static str {
        match self {
            Nakhat::Ogre => "ogre",
            Nakhat::Elf => "elf",
            Nakhat::Human => "human",
        }
    }
}

/// A cardinal direction, in the traditional west-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Direction 0.
    West,
    /// Direction 1.
    North,
    /// Direction 2.
    East,
    /// Direction 3.
    South,
}

impl Direction {
    /// Returns the English name of the direction.
    pub fn name(self) -> &'static str {
        match self {
            Direction::West => "west",
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
        }
    }
}

/// Computes the mahabote sign of the date's year.
pub fn mahabote(date: &MyanmarDate) -> Mahabote {
    const SIGNS: [Mahabote; 7] = [
        Mahabote::Binga,
        Mahabote::Atun,
        Mahabote::Yaza,
        Mahabote::Adipati,
        Mahabote::Marana,
        Mahabote::Thike,
        Mahabote::Puti,
    ];
    let index = (i64::from(date.year()) - i64::from(date.weekday().number())).rem_euclid(7);
    SIGNS[index as usize]
}

/// Computes the nakhat cycle position of the date's year.
pub fn nakhat(date: &MyanmarDate) -> Nakhat {
    const CYCLE: [Nakhat; 3] = [Nakhat::Ogre, Nakhat::Elf, Nakhat::Human];
    CYCLE[date.year().rem_euclid(3) as usize]
}

/// Computes the direction the dragon head faces in the date's month.
///
/// The first Waso counts as Waso.
pub fn dragon_head_direction(date: &MyanmarDate) -> Direction {
    const DIRECTIONS: [Direction; 4] = [
        Direction::West,
        Direction::North,
        Direction::East,
        Direction::South,
    ];
    let month = if date.month() == Month::FirstWaso {
        Month::Waso.number()
    } else {
        date.month().number()
    };
    DIRECTIONS[((month % 12) / 3) as usize]
}
