//! Core entity structs for the Umbra game world.
//!
//! Covers `Planet`, `Player`, `Voyage`, `Artifact`, locally mined `Chunk`
//! records, and the contract `GameConstants` fetched at session start.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::coords::WorldCoords;
use crate::enums::{ArtifactType, Biome, SpaceType};
use crate::ids::{ArtifactId, EntityId, PlayerId, VoyageId};

// ---------------------------------------------------------------------------
// Planet
// ---------------------------------------------------------------------------

/// A world location with owner and resource state.
///
/// Only planets in the load set are ever hydrated into this full form;
/// everything else exists on the ledger but is irrelevant to the client
/// until it becomes locatable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Planet {
    /// The planet's id (hash of its coordinates).
    pub id: EntityId,
    /// Current owner, if anyone has captured it.
    pub owner: Option<PlayerId>,
    /// Planet level (0 through the contract's max level).
    pub level: u8,
    /// Current stored energy.
    pub energy: u64,
    /// Maximum energy capacity.
    pub energy_cap: u64,
    /// Current stored silver.
    pub silver: u64,
    /// Maximum silver capacity.
    pub silver_cap: u64,
    /// Artifacts currently resident on the planet.
    pub held_artifact_ids: Vec<ArtifactId>,
    /// The region of space this planet sits in.
    pub space_type: SpaceType,
    /// The planet's biome.
    pub biome: Biome,
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A participant in the game world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Player {
    /// The player's ledger address.
    pub id: PlayerId,
    /// The player's home planet, if initialized.
    pub home_planet: Option<EntityId>,
    /// Cumulative score.
    pub score: u64,
    /// When the player joined the world.
    pub initialized_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Voyage
// ---------------------------------------------------------------------------

/// A recorded transfer event between two planets.
///
/// Voyages are immutable once created on-chain. A voyage becomes
/// irrelevant (but is not necessarily deleted on the source) once its
/// arrival time passes and the arrival is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Voyage {
    /// The voyage's event id.
    pub id: VoyageId,
    /// The player who launched the voyage.
    pub player: PlayerId,
    /// Origin planet.
    pub from_entity: EntityId,
    /// Destination planet.
    pub to_entity: EntityId,
    /// Energy that will arrive at the destination.
    pub energy_arriving: u64,
    /// Silver moved along with the voyage.
    pub silver_moved: u64,
    /// Artifact carried by the voyage, if any.
    pub artifact_id: Option<ArtifactId>,
    /// When the voyage departed.
    pub departure_time: DateTime<Utc>,
    /// When the voyage arrives at the destination.
    pub arrival_time: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Artifact
// ---------------------------------------------------------------------------

/// An item token, either resident on a planet, carried by a voyage, or
/// held in a player's wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Artifact {
    /// The artifact's token id.
    pub id: ArtifactId,
    /// What kind of artifact this is.
    pub artifact_type: ArtifactType,
    /// The biome of the planet the artifact was found on.
    pub planet_biome: Biome,
    /// Rarity tier (derived from the discovery planet's level).
    pub rarity: u8,
    /// The player who discovered the artifact.
    pub discoverer: PlayerId,
    /// The planet the artifact currently sits on, if it is on one.
    pub on_planet: Option<EntityId>,
    /// The voyage currently carrying the artifact, if it is in flight.
    pub on_voyage: Option<VoyageId>,
    /// When the artifact was discovered.
    pub minted_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Mined chunks
// ---------------------------------------------------------------------------

/// The rectangular footprint of a locally mined chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ChunkFootprint {
    /// Bottom-left corner of the rectangle.
    pub bottom_left: WorldCoords,
    /// Side length of the (square) chunk.
    pub side_length: u32,
}

/// A planet location discovered inside a mined chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlanetLocation {
    /// The planet's id (hash of `coords`).
    pub id: EntityId,
    /// The planet's coordinates.
    pub coords: WorldCoords,
}

/// A local-only spatial tile produced by client-side exploration.
///
/// Chunks enumerate every planet location their footprint geometrically
/// covers. They are never sent to the ledger; they exist purely as a
/// local-cache hint about which planets this client can already locate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Chunk {
    /// The area this chunk covers.
    pub footprint: ChunkFootprint,
    /// Every planet location inside the footprint.
    pub planet_locations: Vec<PlanetLocation>,
}

// ---------------------------------------------------------------------------
// Game constants
// ---------------------------------------------------------------------------

/// Contract-level constants fetched once at session start.
///
/// Only the fields the bootstrap itself consults are typed; everything
/// else the contract exposes rides along in `extra` so downstream systems
/// (combat, upgrades) can read it without another round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GameConstants {
    /// The contract administrator's address.
    pub admin: PlayerId,
    /// Highest planet level the world allows.
    pub max_planet_level: u8,
    /// Global speed multiplier applied to all voyages.
    pub time_factor_hundredths: u32,
    /// Whether the world radius shrinks over time.
    pub world_radius_locked: bool,
    /// Untyped passthrough of the remaining contract constants.
    #[ts(type = "Record<string, unknown>")]
    pub extra: BTreeMap<String, serde_json::Value>,
}
