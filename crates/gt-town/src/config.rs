//! Configuration for founding a town.

/// Configuration for a new town.
#[derive(Debug, Clone)]
pub struct TownConfig {
    /// Probability in [0, 1] that the town turns out tough.
    pub toughness: f64,
    /// RNG seed for reproducible founding draws and encounters.
    pub seed: u64,
}

impl Default for TownConfig {
    fn default() -> Self {
        Self {
            toughness: 0.5,
            seed: 42,
        }
    }
}

impl TownConfig {
    /// Set the toughness probability (clamped to [0, 1]).
    pub fn with_toughness(mut self, toughness: f64) -> Self {
        self.toughness = toughness.clamp(0.0, 1.0);
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
