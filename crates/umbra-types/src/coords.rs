//! World coordinates and on-chain coordinate disclosures.
//!
//! Planet coordinates are normally private -- the client proves it knows
//! them without revealing them. A player may *broadcast* a planet, which
//! records its coordinates on the ledger as a [`RevealedCoords`] entry, or
//! *claim* it, recording a [`ClaimedCoords`] entry. Both lists are
//! append-only on the source of truth: an id once disclosed stays
//! disclosed, and at most one entry exists per planet.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{EntityId, PlayerId};

/// A point in the world plane.
///
/// Coordinates are signed integers. The playable universe is the disc of
/// the current world radius around the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WorldCoords {
    /// Horizontal component.
    pub x: i64,
    /// Vertical component.
    pub y: i64,
}

/// A broadcast disclosure: the on-chain record that a planet's coordinates
/// were revealed to all players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RevealedCoords {
    /// The planet whose coordinates were revealed.
    pub entity_id: EntityId,
    /// The revealed location.
    pub coords: WorldCoords,
    /// The player who broadcast the planet.
    pub revealer: PlayerId,
}

/// A claim disclosure: the on-chain record that a player staked a claim on
/// a planet, revealing its coordinates in the process.
///
/// Claiming is an optional game mode; a world may have no claimed
/// coordinates at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ClaimedCoords {
    /// The planet that was claimed.
    pub entity_id: EntityId,
    /// The claimed location.
    pub coords: WorldCoords,
    /// The player who staked the claim.
    pub claimant: PlayerId,
}
