//! The local persistence collaborator.
//!
//! [`LocalCache`] exposes what a previous session already knows: the
//! touched-id and revealed-coordinate prefixes persisted after the last
//! sync, and the locally mined chunks. The engine uses the prefix lengths
//! as resume offsets so the delta fetch only transfers what the ledger
//! appended since.
//!
//! A cache failure is never fatal -- the engine logs it and proceeds as if
//! the cache were empty, paying the full transfer cost instead.

use umbra_types::{Chunk, EntityId, RevealedCoords};

use crate::error::CacheError;

/// Read access to the previous session's persisted state.
#[allow(async_fn_in_trait)]
pub trait LocalCache {
    /// The touched planet ids saved by the last completed sync, in the
    /// order the ledger originally returned them.
    async fn saved_touched_ids(&self) -> Result<Vec<EntityId>, CacheError>;

    /// The revealed-coordinate records saved by the last completed sync,
    /// in ledger order.
    async fn saved_revealed_coords(&self) -> Result<Vec<RevealedCoords>, CacheError>;

    /// Every locally mined chunk.
    async fn chunks(&self) -> Result<Vec<Chunk>, CacheError>;
}

/// A cache with nothing in it.
///
/// Used for first launches and for fresh-universe (development) mode,
/// where the persisted store is polluted with ids from old universes and
/// must be ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCache;

impl EmptyCache {
    /// Create a new empty cache.
    pub const fn new() -> Self {
        Self
    }
}

impl LocalCache for EmptyCache {
    async fn saved_touched_ids(&self) -> Result<Vec<EntityId>, CacheError> {
        Ok(Vec::new())
    }

    async fn saved_revealed_coords(&self) -> Result<Vec<RevealedCoords>, CacheError> {
        Ok(Vec::new())
    }

    async fn chunks(&self) -> Result<Vec<Chunk>, CacheError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_cache_returns_empty_lists() {
        let cache = EmptyCache::new();
        assert!(cache.saved_touched_ids().await.unwrap().is_empty());
        assert!(cache.saved_revealed_coords().await.unwrap().is_empty());
        assert!(cache.chunks().await.unwrap().is_empty());
    }
}
