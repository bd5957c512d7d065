//! The remote ledger collaborator.
//!
//! [`RemoteStateSource`] is the engine's only window onto the source of
//! truth. Implementations wrap the contract/RPC layer: pagination, rate
//! limiting, wire formats, and timeouts are all their concern. The engine
//! only sees typed bulk operations, each taking a progress listener and --
//! for the append-only lists -- a skip count for resuming past a cached
//! prefix.
//!
//! Async methods are not dyn-compatible, so the trait is consumed
//! generically rather than through trait objects (the same stance the
//! rest of the codebase takes for async seams).

use std::collections::BTreeMap;

use umbra_types::{
    Artifact, ArtifactId, ClaimedCoords, EntityId, GameConstants, Planet, Player, PlayerId,
    RevealedCoords, Voyage,
};

use crate::error::SourceError;
use crate::progress::ProgressFn;

/// Paginated, rate-limited bulk reads over the game ledger.
///
/// All list-returning operations preserve the source's insertion order.
/// Progress listeners must be invoked at least once per underlying page or
/// batch with a monotonically non-decreasing fraction in `[0.0, 1.0]`;
/// operations taking a `skip` count report fractions relative to the
/// remainder being fetched, not the historical total.
#[allow(async_fn_in_trait)]
pub trait RemoteStateSource {
    /// Fetch the contract's game constants.
    async fn get_constants(&self) -> Result<GameConstants, SourceError>;

    /// Fetch the current world radius.
    async fn get_world_radius(&self) -> Result<u64, SourceError>;

    /// Fetch the full player roster.
    async fn get_players(
        &self,
        progress: ProgressFn,
    ) -> Result<BTreeMap<PlayerId, Player>, SourceError>;

    /// Fetch every touched planet id beyond the first `skip` entries.
    async fn get_touched_ids(
        &self,
        skip: usize,
        progress: ProgressFn,
    ) -> Result<Vec<EntityId>, SourceError>;

    /// Fetch every revealed-coordinate record beyond the first `skip`
    /// entries.
    ///
    /// The underlying contract paginates the id list and the coordinate
    /// bodies separately, hence the two listeners.
    async fn get_revealed_coords(
        &self,
        skip: usize,
        ids_progress: ProgressFn,
        coords_progress: ProgressFn,
    ) -> Result<Vec<RevealedCoords>, SourceError>;

    /// Fetch every claimed-coordinate record beyond the first `skip`
    /// entries. Worlds without the claiming mode return an empty list.
    async fn get_claimed_coords(
        &self,
        skip: usize,
        progress: ProgressFn,
    ) -> Result<Vec<ClaimedCoords>, SourceError>;

    /// Fetch every voyage whose destination is one of `ids`.
    async fn get_voyages_for_entities(
        &self,
        ids: &[EntityId],
        progress: ProgressFn,
    ) -> Result<Vec<Voyage>, SourceError>;

    /// Fetch full planet bodies for `ids`.
    ///
    /// The result may omit ids the contract no longer recognizes; callers
    /// must key derived indices off the returned map, not the request.
    async fn hydrate_entities(
        &self,
        ids: &[EntityId],
        progress: ProgressFn,
    ) -> Result<BTreeMap<EntityId, Planet>, SourceError>;

    /// Fetch artifact bodies by id.
    async fn get_artifacts(
        &self,
        ids: &[ArtifactId],
        progress: ProgressFn,
    ) -> Result<Vec<Artifact>, SourceError>;

    /// Fetch the artifacts resident on each of `ids`.
    ///
    /// The outer vec is index-aligned with `ids`: one inner list per
    /// requested planet, never flattened.
    async fn get_artifacts_on_entities(
        &self,
        ids: &[EntityId],
        progress: ProgressFn,
    ) -> Result<Vec<Vec<Artifact>>, SourceError>;

    /// Fetch the artifacts held in `owner`'s wallet.
    async fn get_own_artifacts(
        &self,
        owner: PlayerId,
        progress: ProgressFn,
    ) -> Result<Vec<Artifact>, SourceError>;

    /// Whether the world is currently paused by the administrator.
    async fn is_paused(&self) -> Result<bool, SourceError>;

    /// Best-effort lookup of social handles for known players.
    ///
    /// This is the one operation the engine treats as non-fatal: it lives
    /// outside the ledger, and a failure degrades to an empty map rather
    /// than failing the bootstrap.
    async fn get_social_handles(&self) -> Result<BTreeMap<PlayerId, String>, SourceError>;
}
