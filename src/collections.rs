use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Insertion-ordered hash map with the fast FxHasher.
/// Entries stay contiguous and addressable by index, so search state can
/// refer to nodes by position instead of cloning id strings.
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
