//! Hash-keyed sets and maps backed by a hash-array-mapped trie with
//! size-classed leaf buckets.
//!
//! The containers in this crate are tuned for the access patterns of
//! symbolic dictionaries in numerical solvers: many small-to-medium tables,
//! frequent membership probes, and occasional pairwise intersection tests
//! (e.g. "do these two cuts share a nonzero?"). Entries live in sorted
//! fixed-capacity buckets of four sizes (6, 14, 22 and 30 entries) so that
//! lookups in small tables are a single short linear scan, while large
//! tables fan out through population-packed branch nodes keyed by 6-bit
//! hash chunks.
//!
//! # Hashing
//! These tables do not allow callers to customize the hash function. A
//! single non-cryptographic hash is hard-coded for the whole crate, which
//! lets interior nodes track which hash chunks are present in a 64-bit
//! occupation mask and prune probes without touching entry memory. This
//! makes the tables a poor fit as a general-purpose DoS-hardened container,
//! and a good fit for trusted in-process keys.
//!
//! # Intersection
//! [`HashSet::find_common`] and [`HashMap::find_common`] descend two tries
//! in lockstep, intersecting occupation masks level by level, and return a
//! witness entry present in both containers without materializing the
//! intersection.
//!
//! # Ownership
//! Unlike persistent HAMTs, a trie here exclusively owns its nodes: moves
//! transfer the root, clones are deep structural copies, and there is no
//! sharing between containers. A container that is not being mutated may be
//! read from any number of threads.

pub(crate) mod map;
pub(crate) mod node;
pub(crate) mod set;

pub use map::HashMap;
pub use set::HashSet;
