//! Core types for Goldtrail: terrain, treasure, and collaborator contracts.
//!
//! A town (see the `gt-town` crate) composes these pieces: the terrain
//! surrounding it, the treasure hidden somewhere in it, and the hunter and
//! shop it deals with. Hunter and shop are capability traits so the town
//! logic stays decoupled from any concrete implementation; [`HunterState`]
//! is a plain data-backed hunter for drivers and tests.

pub mod hunter;
pub mod shop;
pub mod terrain;
pub mod treasure;

pub use hunter::{Hunter, HunterState};
pub use shop::{Shop, ShopChoice};
pub use terrain::Terrain;
pub use treasure::Treasure;
