//! Shared type definitions for the Umbra game client.
//!
//! This crate is the single source of truth for all types used across the
//! Umbra workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the rendering front-end.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe hash-digest wrappers for all entity identifiers
//! - [`enums`] -- Enumeration types (space regions, biomes, artifact kinds)
//! - [`coords`] -- World coordinates and on-chain coordinate disclosures
//! - [`structs`] -- Core entity structs (planets, players, voyages,
//!   artifacts, mined chunks, game constants)

pub mod coords;
pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use coords::{ClaimedCoords, RevealedCoords, WorldCoords};
pub use enums::{ArtifactType, Biome, SpaceType};
pub use ids::{ArtifactId, EntityId, PlayerId, VoyageId};
pub use structs::{
    Artifact, Chunk, ChunkFootprint, GameConstants, Planet, PlanetLocation, Player, Voyage,
};
