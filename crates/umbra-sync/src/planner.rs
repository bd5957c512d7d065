//! Load-set planning.
//!
//! Before any planet-body traffic happens, the planner decides exactly
//! which ids are worth hydrating. A touched planet with no known
//! coordinates cannot be rendered, so hydrating it would waste the call:
//! an id qualifies only with *locatable* evidence -- a locally mined
//! chunk covering it, a revealed coordinate, or a claimed coordinate.
//!
//! Voyage origins are the one exception, handled by a second pass after
//! voyages are fetched: an incoming transfer renders with its origin's
//! owner, so origins join the load set even without locatable evidence.
//!
//! Everything here is a pure transformation over immutable inputs; the
//! assembler owns all I/O.

use std::collections::{BTreeMap, BTreeSet};

use umbra_types::{Chunk, ClaimedCoords, EntityId, RevealedCoords, Voyage};

/// Collect every planet id covered by the locally mined chunks.
pub fn mined_entity_ids(chunks: &[Chunk]) -> BTreeSet<EntityId> {
    chunks
        .iter()
        .flat_map(|chunk| chunk.planet_locations.iter().map(|location| location.id))
        .collect()
}

/// Compute the candidate load set from the merged touched-id list.
///
/// An id qualifies iff it appears in the mined set, the revealed index,
/// or the claimed index. Input order is preserved for stable diagnostics;
/// no consumer may rely on it for correctness. Empty inputs produce an
/// empty output.
pub fn candidate_load_set(
    touched: &[EntityId],
    revealed: &BTreeMap<EntityId, RevealedCoords>,
    claimed: Option<&BTreeMap<EntityId, ClaimedCoords>>,
    mined: &BTreeSet<EntityId>,
) -> Vec<EntityId> {
    touched
        .iter()
        .copied()
        .filter(|id| {
            mined.contains(id)
                || revealed.contains_key(id)
                || claimed.is_some_and(|index| index.contains_key(id))
        })
        .collect()
}

/// Union every voyage's origin into the load set.
///
/// Origins are appended after the existing candidates and the whole list
/// is deduplicated keeping first occurrences, so the operation is
/// idempotent: extending an already-extended set changes nothing.
pub fn extend_with_voyage_origins(candidates: Vec<EntityId>, voyages: &[Voyage]) -> Vec<EntityId> {
    let mut seen: BTreeSet<EntityId> = BTreeSet::new();
    let mut extended = Vec::with_capacity(candidates.len());

    for id in candidates
        .into_iter()
        .chain(voyages.iter().map(|voyage| voyage.from_entity))
    {
        if seen.insert(id) {
            extended.push(id);
        }
    }

    extended
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use umbra_types::ids::ID_BYTES;
    use umbra_types::{ChunkFootprint, PlanetLocation, PlayerId, VoyageId, WorldCoords};

    use super::*;

    fn entity(seed: u8) -> EntityId {
        let mut bytes = [0u8; ID_BYTES];
        if let Some(first) = bytes.first_mut() {
            *first = seed;
        }
        EntityId::from_bytes(bytes)
    }

    fn revealed_at(id: EntityId) -> RevealedCoords {
        RevealedCoords {
            entity_id: id,
            coords: WorldCoords { x: 0, y: 0 },
            revealer: PlayerId::ZERO,
        }
    }

    fn voyage(seed: u8, from: EntityId, to: EntityId) -> Voyage {
        let mut bytes = [0u8; ID_BYTES];
        if let Some(first) = bytes.first_mut() {
            *first = seed;
        }
        Voyage {
            id: VoyageId::from_bytes(bytes),
            player: PlayerId::ZERO,
            from_entity: from,
            to_entity: to,
            energy_arriving: 100,
            silver_moved: 0,
            artifact_id: None,
            departure_time: Utc::now(),
            arrival_time: Utc::now(),
        }
    }

    #[test]
    fn mined_ids_flatten_all_chunks() {
        let chunks = vec![
            Chunk {
                footprint: ChunkFootprint {
                    bottom_left: WorldCoords { x: 0, y: 0 },
                    side_length: 16,
                },
                planet_locations: vec![
                    PlanetLocation {
                        id: entity(1),
                        coords: WorldCoords { x: 1, y: 1 },
                    },
                    PlanetLocation {
                        id: entity(2),
                        coords: WorldCoords { x: 5, y: 9 },
                    },
                ],
            },
            Chunk {
                footprint: ChunkFootprint {
                    bottom_left: WorldCoords { x: 16, y: 0 },
                    side_length: 16,
                },
                planet_locations: vec![PlanetLocation {
                    id: entity(2),
                    coords: WorldCoords { x: 5, y: 9 },
                }],
            },
        ];
        let mined = mined_entity_ids(&chunks);
        assert_eq!(mined.len(), 2);
        assert!(mined.contains(&entity(1)));
        assert!(mined.contains(&entity(2)));
    }

    #[test]
    fn touched_without_evidence_is_excluded() {
        // A touched, B and C revealed: A is touched but not locatable.
        let touched = vec![entity(1), entity(2), entity(3)];
        let mut revealed = BTreeMap::new();
        revealed.insert(entity(2), revealed_at(entity(2)));
        revealed.insert(entity(3), revealed_at(entity(3)));

        let candidates = candidate_load_set(&touched, &revealed, None, &BTreeSet::new());
        assert_eq!(candidates, vec![entity(2), entity(3)]);
    }

    #[test]
    fn mined_evidence_qualifies() {
        let touched = vec![entity(1), entity(2)];
        let mut mined = BTreeSet::new();
        mined.insert(entity(1));

        let candidates = candidate_load_set(&touched, &BTreeMap::new(), None, &mined);
        assert_eq!(candidates, vec![entity(1)]);
    }

    #[test]
    fn claimed_evidence_qualifies_only_when_enabled() {
        let touched = vec![entity(1)];
        let mut claimed = BTreeMap::new();
        claimed.insert(
            entity(1),
            ClaimedCoords {
                entity_id: entity(1),
                coords: WorldCoords { x: 2, y: 2 },
                claimant: PlayerId::ZERO,
            },
        );

        let with = candidate_load_set(&touched, &BTreeMap::new(), Some(&claimed), &BTreeSet::new());
        assert_eq!(with, vec![entity(1)]);

        let without = candidate_load_set(&touched, &BTreeMap::new(), None, &BTreeSet::new());
        assert!(without.is_empty());
    }

    #[test]
    fn empty_inputs_produce_empty_output() {
        let candidates = candidate_load_set(&[], &BTreeMap::new(), None, &BTreeSet::new());
        assert!(candidates.is_empty());
    }

    #[test]
    fn origins_are_unioned_in() {
        // Candidate set {B, C}; a voyage from D to C adds D.
        let candidates = vec![entity(2), entity(3)];
        let voyages = vec![voyage(1, entity(4), entity(3))];

        let extended = extend_with_voyage_origins(candidates, &voyages);
        assert_eq!(extended, vec![entity(2), entity(3), entity(4)]);
    }

    #[test]
    fn extension_deduplicates_known_origins() {
        let candidates = vec![entity(2), entity(3)];
        let voyages = vec![voyage(1, entity(2), entity(3))];

        let extended = extend_with_voyage_origins(candidates, &voyages);
        assert_eq!(extended, vec![entity(2), entity(3)]);
    }

    #[test]
    fn extension_is_idempotent() {
        let candidates = vec![entity(2), entity(3)];
        let voyages = vec![
            voyage(1, entity(4), entity(3)),
            voyage(2, entity(4), entity(2)),
        ];

        let once = extend_with_voyage_origins(candidates, &voyages);
        let twice = extend_with_voyage_origins(once.clone(), &voyages);
        assert_eq!(once, twice);
    }
}
