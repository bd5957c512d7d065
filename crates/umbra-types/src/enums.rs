//! Enumeration types for the Umbra game world.
//!
//! These mirror the numeric enumerations recorded on the ledger. Discriminant
//! values match the contract encoding and must not be reordered.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Space types
// ---------------------------------------------------------------------------

/// The type of space a planet sits in.
///
/// Space type is derived from the planet's distance from the world origin
/// and determines planet stat ranges. `Nebula = 0`, `DeadSpace = 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SpaceType {
    /// Inner nebula: safest region, lowest stat ceilings.
    Nebula,
    /// Regular space.
    Space,
    /// Deep space: harder to capture, higher stat ceilings.
    DeepSpace,
    /// Dead space: the corrupted outer rim.
    DeadSpace,
}

// ---------------------------------------------------------------------------
// Biomes
// ---------------------------------------------------------------------------

/// The biome of a planet, fixed at discovery. `Unknown = 0`, `Corrupted = 10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Biome {
    /// Biome not yet determined (planet never located).
    Unknown,
    /// Ocean world.
    Ocean,
    /// Forest world.
    Forest,
    /// Grassland world.
    Grassland,
    /// Tundra world.
    Tundra,
    /// Swamp world.
    Swamp,
    /// Desert world.
    Desert,
    /// Ice world.
    Ice,
    /// Wasteland world.
    Wasteland,
    /// Lava world.
    Lava,
    /// Corrupted world (dead space only).
    Corrupted,
}

// ---------------------------------------------------------------------------
// Artifact kinds
// ---------------------------------------------------------------------------

/// The kind of an artifact token.
///
/// Kind determines the buff an artifact grants when activated on a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ArtifactType {
    /// Placeholder for artifacts whose kind is not yet known.
    Unknown,
    /// Ancient monolith.
    Monolith,
    /// Colossus statue.
    Colossus,
    /// Derelict spaceship.
    Spaceship,
    /// Pyramid structure.
    Pyramid,
    /// Connects two planets, reducing their effective distance.
    Wormhole,
    /// Buffs the first voyage launched after a charge period.
    PhotoidCannon,
    /// Greatly boosts defense at the cost of energy stats.
    PlanetaryShield,
    /// Instantly refills a planet's energy and silver.
    BloomFilter,
    /// Shrinks a planet's radius.
    BlackDomain,
}
