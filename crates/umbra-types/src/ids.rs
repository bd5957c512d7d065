//! Type-safe identifier wrappers around 32-byte hash digests.
//!
//! Every on-chain object in the game world has a strongly-typed ID to
//! prevent accidental mixing of identifiers at compile time. IDs are not
//! generated client-side: a planet's ID is the hash of its coordinates, a
//! voyage's ID is assigned by the contract when the transfer is recorded,
//! and a player's ID is their ledger address padded to digest width. The
//! same input always hashes to the same ID, so IDs are stable across
//! sessions and safe to persist.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Width in bytes of every identifier digest.
pub const ID_BYTES: usize = 32;

/// Generates a newtype wrapper around a 32-byte digest with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(#[ts(type = "Array<number>")] pub [u8; ID_BYTES]);

        impl $name {
            /// Wrap an existing digest.
            pub const fn from_bytes(bytes: [u8; ID_BYTES]) -> Self {
                Self(bytes)
            }

            /// Return the inner digest.
            pub const fn into_inner(self) -> [u8; ID_BYTES] {
                self.0
            }

            /// The all-zero digest. On the ledger this is the "absent"
            /// sentinel (e.g. a voyage carrying no artifact).
            pub const ZERO: Self = Self([0u8; ID_BYTES]);
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                for byte in &self.0 {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }

        impl From<[u8; ID_BYTES]> for $name {
            fn from(bytes: [u8; ID_BYTES]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; ID_BYTES] {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a world location (planet). Derived from the
    /// hash of the planet's coordinates.
    EntityId
}

define_id! {
    /// Unique identifier for a recorded transfer event between planets.
    VoyageId
}

define_id! {
    /// Unique identifier for an artifact token.
    ArtifactId
}

define_id! {
    /// Unique identifier for a player: their ledger address, zero-padded
    /// to digest width.
    PlayerId
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn digest(seed: u8) -> [u8; ID_BYTES] {
        let mut bytes = [0u8; ID_BYTES];
        if let Some(last) = bytes.last_mut() {
            *last = seed;
        }
        bytes
    }

    #[test]
    fn ids_are_distinct_types() {
        let entity = EntityId::from_bytes(digest(1));
        let voyage = VoyageId::from_bytes(digest(1));
        // These are different types -- the compiler enforces no mixing,
        // even though the digests are byte-identical.
        assert_eq!(entity.into_inner(), voyage.into_inner());
    }

    #[test]
    fn id_roundtrip_serde() {
        let original = EntityId::from_bytes(digest(7));
        let json = serde_json::to_string(&original).unwrap();
        let restored: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn id_display_is_lowercase_hex() {
        let id = EntityId::from_bytes(digest(0xab));
        let text = id.to_string();
        assert_eq!(text.len(), ID_BYTES.saturating_mul(2));
        assert!(text.starts_with("00"));
        assert!(text.ends_with("ab"));
    }

    #[test]
    fn zero_sentinel_is_all_zero() {
        assert_eq!(ArtifactId::ZERO.into_inner(), [0u8; ID_BYTES]);
    }

    #[test]
    fn ids_order_by_digest() {
        let low = EntityId::from_bytes(digest(1));
        let high = EntityId::from_bytes(digest(2));
        assert!(low < high);
    }
}
