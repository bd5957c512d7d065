//! The snapshot aggregate and its derived indices.
//!
//! [`Snapshot`] is the engine's sole output: one immutable value holding
//! everything the rest of the client needs to render and reason about the
//! world. It is constructed once per session bootstrap from fully
//! resolved locals, never mutated afterward, and superseded wholesale by
//! a fresh snapshot on re-sync.
//!
//! The index builders in this module are pure functions. All of them are
//! either idempotent insert-or-append or deduplicating unions, so the
//! order in which the assembler's concurrent sub-fetches complete cannot
//! affect the final map contents.

use std::collections::BTreeMap;

use umbra_types::{
    Artifact, ArtifactId, ClaimedCoords, EntityId, GameConstants, Planet, Player, PlayerId,
    RevealedCoords, Voyage, VoyageId,
};

/// The complete game-world state reconstructed by one synchronization run.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Contract-level game constants.
    pub constants: GameConstants,
    /// The full player roster.
    pub players: BTreeMap<PlayerId, Player>,
    /// Current world radius.
    pub world_radius: u64,
    /// Every touched planet id, cache prefix followed by the remote delta.
    pub touched_ids: Vec<EntityId>,
    /// Every revealed-coordinate record, cache prefix followed by the
    /// remote delta.
    pub revealed_coords: Vec<RevealedCoords>,
    /// Every claimed-coordinate record, when the claiming mode is enabled.
    pub claimed_coords: Option<Vec<ClaimedCoords>>,
    /// Every voyage targeting a planet in the load set.
    pub voyages: Vec<Voyage>,
    /// Fully hydrated planets, keyed by id. Exactly the load set that the
    /// contract still recognizes.
    pub planets: BTreeMap<EntityId, Planet>,
    /// Artifacts currently carried by voyages.
    pub artifacts_in_flight: Vec<Artifact>,
    /// Artifacts held in the viewer's wallet.
    pub own_artifacts: Vec<Artifact>,
    /// Artifacts resident on each loaded planet, index-aligned with
    /// `loaded_ids`.
    pub held_artifacts: Vec<Vec<Artifact>>,
    /// The final load set, in plan order.
    pub loaded_ids: Vec<EntityId>,
    /// One revealed-coordinate record per disclosed planet.
    pub revealed_coords_map: BTreeMap<EntityId, RevealedCoords>,
    /// One claimed-coordinate record per claimed planet, when enabled.
    pub claimed_coords_map: Option<BTreeMap<EntityId, ClaimedCoords>>,
    /// Incoming voyage ids per hydrated planet. A planet with no incoming
    /// voyages maps to an empty list, never to an absent key.
    pub voyage_index: BTreeMap<EntityId, Vec<VoyageId>>,
    /// Every fetched voyage keyed by its own id.
    pub arrivals: BTreeMap<VoyageId, Voyage>,
    /// Social handles for players that have one registered.
    pub social_handles: BTreeMap<PlayerId, String>,
    /// Whether the world was paused at sync time.
    pub paused: bool,
}

/// Index revealed coordinates by planet id.
///
/// Revealing is a one-time event per planet on the source of truth, so
/// the first record wins: with the cache prefix ordered ahead of the
/// remote delta, a cached entry takes precedence over a redundant remote
/// duplicate.
pub fn revealed_coords_map(coords: &[RevealedCoords]) -> BTreeMap<EntityId, RevealedCoords> {
    let mut index = BTreeMap::new();
    for record in coords {
        index.entry(record.entity_id).or_insert(*record);
    }
    index
}

/// Index claimed coordinates by planet id. First record wins, as with
/// [`revealed_coords_map`].
pub fn claimed_coords_map(coords: &[ClaimedCoords]) -> BTreeMap<EntityId, ClaimedCoords> {
    let mut index = BTreeMap::new();
    for record in coords {
        index.entry(record.entity_id).or_insert(*record);
    }
    index
}

/// Build the incoming-voyage index over the hydrated planets.
///
/// Every hydrated id starts with an empty entry; each voyage then appends
/// its id to its destination's entry. Voyages whose destination was not
/// hydrated (it no longer exists on the contract) are skipped rather
/// than allowed to introduce a dangling key.
pub fn voyage_index<'a, I>(hydrated: I, voyages: &[Voyage]) -> BTreeMap<EntityId, Vec<VoyageId>>
where
    I: IntoIterator<Item = &'a EntityId>,
{
    let mut index: BTreeMap<EntityId, Vec<VoyageId>> = BTreeMap::new();
    for id in hydrated {
        index.insert(*id, Vec::new());
    }
    for voyage in voyages {
        if let Some(incoming) = index.get_mut(&voyage.to_entity) {
            incoming.push(voyage.id);
        }
    }
    index
}

/// Index voyages by their own id.
///
/// A voyage reachable through two paths (the destination index and the
/// artifact-in-flight scan) still appears exactly once; duplicates keep
/// the first record.
pub fn arrivals_by_id(voyages: &[Voyage]) -> BTreeMap<VoyageId, Voyage> {
    let mut index = BTreeMap::new();
    for voyage in voyages {
        index.entry(voyage.id).or_insert_with(|| voyage.clone());
    }
    index
}

/// Collect the ids of artifacts currently carried by voyages, first-seen
/// order, no duplicates.
pub fn in_flight_artifact_ids(voyages: &[Voyage]) -> Vec<ArtifactId> {
    let mut seen = std::collections::BTreeSet::new();
    let mut ids = Vec::new();
    for artifact_id in voyages.iter().filter_map(|voyage| voyage.artifact_id) {
        if seen.insert(artifact_id) {
            ids.push(artifact_id);
        }
    }
    ids
}
