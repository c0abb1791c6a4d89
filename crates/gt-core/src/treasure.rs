//! Treasure assigned to a town at founding.

use serde::{Deserialize, Serialize};

/// A kind of treasure a town may hide.
///
/// Dust is the no-treasure fallback: a search still announces it, but it is
/// never added to a hunter's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Treasure {
    /// A jeweled crown.
    Crown,
    /// An engraved trophy.
    Trophy,
    /// A cut gem.
    Gem,
    /// A handful of dust.
    Dust,
}

impl Treasure {
    /// Map a ten-sided draw (1-10) to a treasure: 1 crown, 2 trophy,
    /// 3 gem, everything else dust.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            1 => Self::Crown,
            2 => Self::Trophy,
            3 => Self::Gem,
            _ => Self::Dust,
        }
    }

    /// Whether this is the no-treasure fallback.
    pub fn is_dust(self) -> bool {
        matches!(self, Self::Dust)
    }
}

impl std::fmt::Display for Treasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Crown => write!(f, "crown"),
            Self::Trophy => write!(f, "trophy"),
            Self::Gem => write!(f, "gem"),
            Self::Dust => write!(f, "dust"),
        }
    }
}
