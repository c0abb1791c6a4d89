//! The shop contract.

use serde::{Deserialize, Serialize};

use crate::hunter::Hunter;

/// Whether the hunter wants to buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopChoice {
    /// Buy an item from the shop.
    Buy,
    /// Sell an item to the shop.
    Sell,
}

impl ShopChoice {
    /// Parse a choice from user-supplied input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "b" | "buy" => Some(Self::Buy),
            "s" | "sell" => Some(Self::Sell),
            _ => None,
        }
    }
}

impl std::fmt::Display for ShopChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// The transaction surface a town delegates to.
///
/// The shop talks to the player through its own channel; the town never
/// inspects what happened inside a visit.
pub trait Shop {
    /// Run one shop visit for `hunter`.
    fn enter(&mut self, hunter: &mut dyn Hunter, choice: ShopChoice, samurai_mode: bool);
}
