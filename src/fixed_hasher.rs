//! Deterministic hasher for the id- and cell-keyed maps.

use core::hash::BuildHasher;
use foldhash::fast::{FixedState, FoldHasher};

/// Fixed seed for every map in the crate.
const PAIR_HASHER: FixedState = FixedState::with_seed(0x5eed_9a7c_4e01_b3d2);

/// Deterministic [`BuildHasher`] used by [`RelationCache`](crate::RelationCache)
/// and [`PointStore`](crate::PointStore).
///
/// No result depends on map iteration order: incident relations are looked up
/// by walking the point store in insertion order. The fixed state makes the
/// maps `Default` without a random source and keeps their `Debug` output
/// identical between runs.
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHasher;

impl BuildHasher for FixedHasher {
    type Hasher = FoldHasher<'static>;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        PAIR_HASHER.build_hasher()
    }
}

/// Hash map with the crate's deterministic hasher.
pub type FixedHashMap<K, V> = hashbrown::HashMap<K, V, FixedHasher>;
