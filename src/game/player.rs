use embassy_time::{Duration, Instant};

use crate::debounce::DebounceTimer;

/// One of the three fixed players
///
/// Ordering is buzz priority: when several players win the same iteration
/// the lowest one takes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PlayerId {
    One = 0,
    Two = 1,
    Three = 2,
}

impl PlayerId {
    /// All players, in buzz priority order
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::One),
            1 => Some(Self::Two),
            2 => Some(Self::Three),
            _ => None,
        }
    }

    /// Zero-based slot (also the bit on the buzzer bus)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Number shown to people, starting at 1
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of players, stored as a 3-bit mask
///
/// Used both for the buzzers asserted in one sample and for the players
/// blocked from the current question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerSet(u8);

impl PlayerSet {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self(0b111);

    /// Build from a raw bus value, dropping bits above the third
    pub const fn from_bus(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, player: PlayerId) -> bool {
        self.0 & player.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_full(self) -> bool {
        self.0 == Self::ALL.0
    }

    pub fn insert(&mut self, player: PlayerId) {
        self.0 |= player.bit();
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Members in priority order
    pub fn iter(self) -> impl Iterator<Item = PlayerId> {
        PlayerId::ALL.into_iter().filter(move |p| self.contains(*p))
    }
}

impl From<PlayerId> for PlayerSet {
    fn from(player: PlayerId) -> Self {
        Self(player.bit())
    }
}

/// Score and buzz lockout of one player
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub score: i32,
    pub debounce: DebounceTimer,
}

impl Player {
    pub const fn new(debounce: Duration, now: Instant) -> Self {
        Self {
            score: 0,
            debounce: DebounceTimer::new(debounce, now),
        }
    }
}
