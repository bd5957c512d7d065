//! Initial state synchronization and indexing engine for the Umbra client.
//!
//! On every session start the client must reconstruct a complete,
//! internally consistent snapshot of the game world from a large,
//! append-only remote ledger, while reusing the local persisted cache to
//! minimize transfer and reporting fine-grained progress to the UI.
//!
//! # Architecture
//!
//! The engine sees its three collaborators only through traits:
//!
//! - [`RemoteStateSource`] -- paginated, rate-limited bulk reads over the
//!   ledger (the contract/RPC layer implements this).
//! - [`LocalCache`] -- the previous session's persisted touched ids,
//!   revealed coordinates, and locally mined chunks.
//! - [`ProgressReporter`] -- one completion-fraction listener per fetch
//!   category, for the terminal/UI layer.
//!
//! [`SnapshotAssembler`] drives the pipeline: read the cache for resume
//! offsets, fetch context and delta concurrently, plan the load set
//! ([`planner`]), fetch voyages and extend the set with their origins,
//! hydrate planet bodies, build the derived indices ([`snapshot`]), fetch
//! artifacts, and return one immutable [`Snapshot`].
//!
//! # Failure model
//!
//! Mandatory-stage failures abort the whole run with a [`SyncError`]
//! naming the stage; nothing partial is ever returned. A corrupt cache
//! degrades to empty, and the social-handle lookup degrades to an empty
//! map -- both logged, neither fatal.

pub mod assembler;
pub mod cache;
pub mod config;
pub mod error;
pub mod planner;
pub mod progress;
pub mod snapshot;
pub mod source;

// Re-export the primary surface at crate root.
pub use assembler::SnapshotAssembler;
pub use cache::{EmptyCache, LocalCache};
pub use config::{ConfigError, SyncConfig};
pub use error::{CacheError, SourceError, SyncError, SyncStage};
pub use progress::{ProgressFn, ProgressReporter, SilentProgress, TracingProgress};
pub use snapshot::Snapshot;
pub use source::RemoteStateSource;
