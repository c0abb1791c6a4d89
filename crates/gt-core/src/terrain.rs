//! Terrain surrounding a town and the item needed to cross it.
//!
//! Terrain is fixed when a town is founded and never changes. Leaving town
//! means crossing it, which takes one specific piece of kit. The bucket
//! boundaries in [`Terrain::from_roll`] are literal values, not multiples
//! of 1/6; they are part of the crossing contract.

use serde::{Deserialize, Serialize};

/// The terrain surrounding a town.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// High passes; crossed with a rope.
    Mountains,
    /// Open water; crossed with a boat.
    Ocean,
    /// Grassland; crossed on horseback.
    Plains,
    /// Dry wasteland; crossed with water.
    Desert,
    /// Sodden ground; crossed with boots.
    Marsh,
    /// Dense growth; crossed with a machete.
    Jungle,
}

impl Terrain {
    /// Bucket a uniform [0, 1) draw into a terrain.
    ///
    /// Intervals are half-open: Mountains [0, .16), Ocean [.16, .33),
    /// Plains [.33, .5), Desert [.5, .66), Marsh [.66, .83),
    /// Jungle [.83, 1). Values outside [0, 1) fall into the end buckets.
    pub fn from_roll(roll: f64) -> Self {
        if roll < 0.16 {
            Self::Mountains
        } else if roll < 0.33 {
            Self::Ocean
        } else if roll < 0.5 {
            Self::Plains
        } else if roll < 0.66 {
            Self::Desert
        } else if roll < 0.83 {
            Self::Marsh
        } else {
            Self::Jungle
        }
    }

    /// The item a hunter must carry to cross this terrain.
    pub fn required_item(self) -> &'static str {
        match self {
            Self::Mountains => "Rope",
            Self::Ocean => "Boat",
            Self::Plains => "Horse",
            Self::Desert => "Water",
            Self::Marsh => "Boots",
            Self::Jungle => "Machete",
        }
    }

    /// All terrains in bucket order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Mountains,
            Self::Ocean,
            Self::Plains,
            Self::Desert,
            Self::Marsh,
            Self::Jungle,
        ]
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mountains => write!(f, "Mountains"),
            Self::Ocean => write!(f, "Ocean"),
            Self::Plains => write!(f, "Plains"),
            Self::Desert => write!(f, "Desert"),
            Self::Marsh => write!(f, "Marsh"),
            Self::Jungle => write!(f, "Jungle"),
        }
    }
}
