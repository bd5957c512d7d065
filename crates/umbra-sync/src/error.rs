//! Error types for the `umbra-sync` crate.
//!
//! The taxonomy separates three concerns:
//!
//! - [`SourceError`] -- a remote ledger call failed.
//! - [`CacheError`] -- the local store is unreadable. The engine never
//!   fails on this: the cache is an optimization, so a corrupt cache is
//!   logged and treated as empty.
//! - [`SyncError`] -- the umbrella fatal condition returned to the caller,
//!   wrapping the first mandatory-stage failure together with the identity
//!   of the stage that failed. The caller decides whether to restart the
//!   whole bootstrap; the engine performs no retries.
//!
//! The one non-fatal remote operation is the social-handle lookup, which
//! degrades to an empty result inside the assembler and is only logged.

/// The pipeline stages at which a mandatory failure can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStage {
    /// Fetching game constants, world radius, and the player roster.
    ContextFetch,
    /// Fetching the touched-id and disclosed-coordinate deltas beyond the
    /// cached counts.
    DeltaFetch,
    /// Fetching voyages targeting the candidate load set.
    VoyageFetch,
    /// Hydrating full planet bodies for the final load set.
    EntityHydration,
    /// Fetching in-flight, resident, and owned artifacts.
    ArtifactFetch,
    /// Reading the world's paused flag.
    PausedCheck,
}

impl SyncStage {
    /// Stable lowercase name for logs and error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ContextFetch => "context fetch",
            Self::DeltaFetch => "delta fetch",
            Self::VoyageFetch => "voyage fetch",
            Self::EntityHydration => "entity hydration",
            Self::ArtifactFetch => "artifact fetch",
            Self::PausedCheck => "paused check",
        }
    }
}

impl core::fmt::Display for SyncStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by a [`RemoteStateSource`] implementation.
///
/// [`RemoteStateSource`]: crate::source::RemoteStateSource
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The ledger could not be reached or the call failed.
    #[error("remote source unavailable: {message}")]
    Unavailable {
        /// Description of the underlying network or RPC failure.
        message: String,
    },
}

/// Errors raised by a [`LocalCache`] implementation.
///
/// [`LocalCache`]: crate::cache::LocalCache
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The local store is unreadable or unparseable.
    #[error("local cache corrupt: {message}")]
    Corrupt {
        /// Description of what could not be read.
        message: String,
    },
}

/// A fatal synchronization failure.
///
/// Wraps the first mandatory-stage failure with the stage identity
/// attached. When this is returned no partially-usable snapshot exists;
/// the bootstrap must be treated as not-yet-complete.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// A mandatory stage failed.
    #[error("sync failed during {stage}: {source}")]
    Failed {
        /// The stage that failed.
        stage: SyncStage,
        /// The underlying source failure.
        #[source]
        source: SourceError,
    },
}

impl SyncError {
    /// Attach a stage identity to a source failure.
    pub const fn failed(stage: SyncStage, source: SourceError) -> Self {
        Self::Failed { stage, source }
    }

    /// The stage at which the synchronization failed.
    pub const fn stage(&self) -> SyncStage {
        match self {
            Self::Failed { stage, .. } => *stage,
        }
    }
}
