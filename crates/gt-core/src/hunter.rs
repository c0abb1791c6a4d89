//! The hunter contract and a basic hunter implementation.

use serde::{Deserialize, Serialize};

use crate::treasure::Treasure;

/// Capabilities a town requires of the visiting hunter.
///
/// The town consumes this surface only; concrete hunters live with the
/// embedding driver. All mutations are synchronous calls on a single
/// logical thread of control.
pub trait Hunter {
    /// The hunter's display name.
    fn name(&self) -> &str;

    /// Whether the named item is in the hunter's kit.
    fn has_item(&self, item: &str) -> bool;

    /// Remove the named item from the kit. Returns false if it was not there.
    fn remove_item(&mut self, item: &str) -> bool;

    /// Adjust the gold balance by `delta`, which may be negative.
    fn add_gold(&mut self, delta: i32);

    /// Offer a treasure. Returns false iff the hunter already holds one
    /// of this kind, in which case the collection is unchanged.
    fn add_treasure(&mut self, treasure: Treasure) -> bool;

    /// Whether the hunter can cross terrain that requires `item`.
    fn can_cross(&self, item: &str) -> bool {
        self.has_item(item)
    }
}

/// A plain data-backed hunter: a name, a gold balance, a kit of named
/// items, and the treasures collected so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HunterState {
    name: String,
    gold: i32,
    kit: Vec<String>,
    treasures: Vec<Treasure>,
}

impl HunterState {
    /// Create a hunter with a name and starting gold.
    pub fn new(name: impl Into<String>, gold: i32) -> Self {
        Self {
            name: name.into(),
            gold,
            kit: Vec::new(),
            treasures: Vec::new(),
        }
    }

    /// Current gold balance. May be negative after a lost brawl.
    pub fn gold(&self) -> i32 {
        self.gold
    }

    /// Items currently in the kit.
    pub fn kit(&self) -> &[String] {
        &self.kit
    }

    /// Treasures collected so far.
    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    /// Add an item to the kit. The kit never holds duplicates.
    pub fn add_item(&mut self, item: impl Into<String>) {
        let item = item.into();
        if !self.kit.contains(&item) {
            self.kit.push(item);
        }
    }
}

impl Hunter for HunterState {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_item(&self, item: &str) -> bool {
        self.kit.iter().any(|i| i == item)
    }

    fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.kit.iter().position(|i| i == item) {
            self.kit.remove(pos);
            true
        } else {
            false
        }
    }

    fn add_gold(&mut self, delta: i32) {
        self.gold += delta;
    }

    fn add_treasure(&mut self, treasure: Treasure) -> bool {
        if self.treasures.contains(&treasure) {
            false
        } else {
            self.treasures.push(treasure);
            true
        }
    }
}
