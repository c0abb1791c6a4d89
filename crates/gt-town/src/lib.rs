//! Town encounter engine for Goldtrail.
//!
//! A [`Town`] mediates everything a hunter can do while visiting: leave
//! across the surrounding terrain, trade at the shop, look for a brawl,
//! search for the town treasure, or dig for gold. Outcomes are randomized
//! through a seedable RNG and reported both as structured values and
//! through the town's latest-news line.

pub mod config;
pub mod dig;
pub mod error;
pub mod town;
pub mod trouble;

pub use config::TownConfig;
pub use dig::DigOutcome;
pub use error::{TownError, TownResult};
pub use town::Town;
pub use trouble::TroubleOutcome;
