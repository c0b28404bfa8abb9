//! chain-hashmap: a single-threaded hash map with separate chaining,
//! insertion-ordered buckets and a fixed `2c + 1` growth policy.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a map whose bucket placement is fully determined by the keys and
//!   the insertion sequence, so layouts can be asserted exactly.
//! - Pieces:
//!   - `policy`: capacity constants and the pure functions that decide
//!     bucket index, growth threshold and next capacity.
//!   - `KeyHash`: the 32-bit signed hash each key type supplies. Not seeded;
//!     the same key always lands in the same bucket for a given capacity.
//!   - `ChainHashMap<K, V>`: bucket array plus collision chains.
//!   - `KeyValueMap<K, V>`: the `get`/`put`/`remove`/`size` contract, also
//!     implemented for `std::collections::HashMap`.
//!
//! Storage
//! - Entries live in a `SlotMap`; buckets hold the arena key of the chain
//!   head and each entry holds the key of its successor. There is no
//!   per-entry allocation and no `unsafe`.
//! - An entry is linked into exactly one chain. Rehash detaches each entry
//!   (`next.take()`) before appending it to its new chain.
//!
//! Chain order
//! - New keys are appended at the chain tail, so a bucket lists its keys in
//!   arrival order. Rehash drains old buckets in index order and appends,
//!   so keys that meet in a new bucket keep their previous relative order.
//!
//! Growth
//! - Capacity starts at 15. After an insertion that adds a key, if
//!   `len >= floor(0.75 * capacity)` the table grows to `2 * capacity + 1`.
//!   Updating an existing key never grows the table. `clear` returns to 15.
//! - Growth is unbounded; no maximum capacity is enforced.
//!
//! Hash invariants
//! - Each entry stores the hash computed when it was created, and rehash
//!   uses the stored hash; `KeyHash` is not invoked again for that entry.
//! - `bucket_index = (hash & 0x7FFF_FFFF) % capacity`.
//!
//! Null keys and values
//! - Key a map by `Option<K>` to allow a "no key": `None` hashes to 0 and
//!   equals only `None`. Use `V = Option<T>` for nullable values; `get`
//!   then distinguishes `Some(None)` (mapped to null) from `None` (absent).
//!
//! Notes and non-goals
//! - Single-threaded; no internal synchronization.
//! - No iteration API and no ordering guarantees beyond per-bucket FIFO.
//! - No open addressing or tree buckets; long chains stay linked lists.

mod chain_hash_map;
mod chain_hash_map_proptest;
pub mod key_hash;
mod key_value_map;
pub mod policy;

// Public surface
pub use chain_hash_map::ChainHashMap;
pub use key_hash::KeyHash;
pub use key_value_map::KeyValueMap;
