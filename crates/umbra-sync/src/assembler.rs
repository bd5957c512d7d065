//! The fetch/merge pipeline that builds a [`Snapshot`].
//!
//! One assembly is one long-lived async operation per session bootstrap.
//! Stages without a data dependency on each other run concurrently
//! (context fetch alongside the delta fetch; the three artifact fetches
//! alongside the paused flag and the social-handle lookup); stages with a
//! dependency run strictly in sequence (plan, then voyages, then
//! hydration, then artifacts). Suspension points are exactly the network
//! round trips -- nothing here blocks a thread.
//!
//! Any failure in a mandatory stage aborts the whole operation with a
//! [`SyncError`] carrying the stage identity; no partial snapshot is ever
//! published. The engine performs no retries -- re-invoking the bootstrap
//! is the caller's decision.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};
use umbra_types::PlayerId;

use crate::cache::LocalCache;
use crate::config::SyncConfig;
use crate::error::{SyncError, SyncStage};
use crate::planner;
use crate::progress::ProgressReporter;
use crate::snapshot::{self, Snapshot};
use crate::source::RemoteStateSource;

/// Drives the ordered fetch sequence and assembles the final snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotAssembler {
    config: SyncConfig,
}

impl SnapshotAssembler {
    /// Create an assembler with the given configuration.
    pub const fn new(config: SyncConfig) -> Self {
        Self { config }
    }

    /// Reconstruct the complete game-world state for one session.
    ///
    /// `viewer` is the player whose artifact inventory is fetched.
    /// Progress listeners for every fetch category are registered on
    /// `progress` before the first network call.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] when any mandatory stage fails. The
    /// social-handle lookup is the single carve-out: its failure is
    /// logged and replaced with an empty map.
    #[allow(clippy::too_many_lines)]
    pub async fn assemble<R, C, P>(
        &self,
        source: &R,
        cache: &C,
        progress: &mut P,
        viewer: PlayerId,
    ) -> Result<Snapshot, SyncError>
    where
        R: RemoteStateSource,
        C: LocalCache,
        P: ProgressReporter,
    {
        info!(
            fresh_universe = self.config.fresh_universe,
            claimed_coords = self.config.claimed_coords,
            "starting state synchronization"
        );

        // --- Stage 1: cache read ---
        // Corruption is tolerated: the cache is an optimization, so a
        // failed read falls back to a full transfer.
        let (cached_touched, cached_revealed) = if self.config.fresh_universe {
            debug!("fresh universe mode, bypassing persisted cache");
            (Vec::new(), Vec::new())
        } else {
            let touched = match cache.saved_touched_ids().await {
                Ok(ids) => ids,
                Err(error) => {
                    warn!(error = %error, "cached touched ids unreadable, treating as empty");
                    Vec::new()
                }
            };
            let revealed = match cache.saved_revealed_coords().await {
                Ok(records) => records,
                Err(error) => {
                    warn!(error = %error, "cached revealed coords unreadable, treating as empty");
                    Vec::new()
                }
            };
            (touched, revealed)
        };
        // Chunks are not universe-scoped state, so they are read even in
        // fresh mode.
        let chunks = match cache.chunks().await {
            Ok(chunks) => chunks,
            Err(error) => {
                warn!(error = %error, "chunk store unreadable, treating as empty");
                Vec::new()
            }
        };

        debug!(
            cached_touched = cached_touched.len(),
            cached_revealed = cached_revealed.len(),
            chunks = chunks.len(),
            "cache read complete"
        );

        // Register every progress listener before the first network call,
        // in display order.
        let touched_progress = progress.listener("planet ids");
        let players_progress = progress.listener("players");
        let revealed_ids_progress = progress.listener("revealed planet ids");
        let revealed_coords_progress = progress.listener("revealed coordinates");
        let claimed_progress = self
            .config
            .claimed_coords
            .then(|| progress.listener("claimed coordinates"));
        let voyages_progress = progress.listener("pending voyages");
        let planets_progress = progress.listener("planets");
        let held_progress = progress.listener("artifacts on planets");
        let in_flight_progress = progress.listener("artifacts in flight");
        let own_progress = progress.listener("your artifacts");

        // --- Stages 2 and 3: context fetch alongside delta fetch ---
        let context = async {
            tokio::try_join!(
                source.get_constants(),
                source.get_world_radius(),
                source.get_players(players_progress),
            )
            .map_err(|source| SyncError::failed(SyncStage::ContextFetch, source))
        };

        let skip_touched = cached_touched.len();
        let skip_revealed = cached_revealed.len();
        let delta = async {
            let claimed = async {
                match claimed_progress {
                    Some(listener) => source.get_claimed_coords(0, listener).await.map(Some),
                    None => Ok(None),
                }
            };
            tokio::try_join!(
                source.get_touched_ids(skip_touched, touched_progress),
                source.get_revealed_coords(
                    skip_revealed,
                    revealed_ids_progress,
                    revealed_coords_progress,
                ),
                claimed,
            )
            .map_err(|source| SyncError::failed(SyncStage::DeltaFetch, source))
        };

        let ((constants, world_radius, players), (touched_delta, revealed_delta, claimed_coords)) =
            tokio::try_join!(context, delta)?;

        debug!(
            players = players.len(),
            touched_delta = touched_delta.len(),
            revealed_delta = revealed_delta.len(),
            "context and delta fetch complete"
        );

        // Cache-then-delta concatenation; order within each list is the
        // source's insertion order.
        let mut touched_ids = cached_touched;
        touched_ids.extend(touched_delta);
        let mut revealed_coords = cached_revealed;
        revealed_coords.extend(revealed_delta);

        // --- Stage 4: plan ---
        let revealed_index = snapshot::revealed_coords_map(&revealed_coords);
        let claimed_index = claimed_coords
            .as_deref()
            .map(snapshot::claimed_coords_map);
        let mined = planner::mined_entity_ids(&chunks);
        let candidates = planner::candidate_load_set(
            &touched_ids,
            &revealed_index,
            claimed_index.as_ref(),
            &mined,
        );

        debug!(
            touched = touched_ids.len(),
            candidates = candidates.len(),
            "load set planned"
        );

        // --- Stage 5: voyages, then origin extension ---
        let voyages = source
            .get_voyages_for_entities(&candidates, voyages_progress)
            .await
            .map_err(|source| SyncError::failed(SyncStage::VoyageFetch, source))?;
        let loaded_ids = planner::extend_with_voyage_origins(candidates, &voyages);

        // --- Stage 6: entity hydration ---
        let planets = source
            .hydrate_entities(&loaded_ids, planets_progress)
            .await
            .map_err(|source| SyncError::failed(SyncStage::EntityHydration, source))?;

        debug!(
            voyages = voyages.len(),
            loaded = loaded_ids.len(),
            hydrated = planets.len(),
            "voyages fetched and planets hydrated"
        );

        // --- Stage 7: index construction ---
        let voyage_index = snapshot::voyage_index(planets.keys(), &voyages);
        let arrivals = snapshot::arrivals_by_id(&voyages);
        let in_flight_ids = snapshot::in_flight_artifact_ids(&voyages);

        // --- Stages 8 and 9: artifact fetches alongside the paused flag
        // and the best-effort social-handle lookup ---
        let artifacts = async {
            tokio::try_join!(
                source.get_artifacts(&in_flight_ids, in_flight_progress),
                source.get_artifacts_on_entities(&loaded_ids, held_progress),
                source.get_own_artifacts(viewer, own_progress),
            )
            .map_err(|source| SyncError::failed(SyncStage::ArtifactFetch, source))
        };
        let paused = async {
            source
                .is_paused()
                .await
                .map_err(|source| SyncError::failed(SyncStage::PausedCheck, source))
        };
        let social = async {
            match source.get_social_handles().await {
                Ok(handles) => handles,
                Err(error) => {
                    warn!(error = %error, "social handle lookup failed, continuing without handles");
                    BTreeMap::new()
                }
            }
        };

        let (artifacts, paused, social_handles) = tokio::join!(artifacts, paused, social);
        let (artifacts_in_flight, held_artifacts, own_artifacts) = artifacts?;
        let paused = paused?;

        info!(
            planets = planets.len(),
            voyages = voyages.len(),
            artifacts_in_flight = artifacts_in_flight.len(),
            paused,
            "state synchronization complete"
        );

        // --- Stage 10: assembly ---
        Ok(Snapshot {
            constants,
            players,
            world_radius,
            touched_ids,
            revealed_coords,
            claimed_coords,
            voyages,
            planets,
            artifacts_in_flight,
            own_artifacts,
            held_artifacts,
            loaded_ids,
            revealed_coords_map: revealed_index,
            claimed_coords_map: claimed_index,
            voyage_index,
            arrivals,
            social_handles,
            paused,
        })
    }
}
