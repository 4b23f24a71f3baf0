//! Core schema-driven serialization runtime.
//!
//! This crate provides the shape/trait/schema model used to describe Smithy-style
//! data shapes at runtime, a visitor-based [`serde`] (de)serialization protocol driven
//! by that schema model, and a [`schema::Document`] value type for protocol-agnostic
//! untyped data.

pub mod prelude;
pub mod schema;
pub mod serde;

/// Cheaply-cloneable shared reference, used for interned schemas/traits.
pub type Ref<T> = std::sync::Arc<T>;

/// Re-exported for generated code (`derive`), which refers to this crate by an
/// arbitrary alias and so can't name `std::sync::LazyLock` directly and reliably.
pub use std::sync::LazyLock;

pub use fx_hash_map::FxIndexMap;
pub use fx_hash_map::FxIndexSet;

mod fx_hash_map {
    pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
    pub type FxIndexSet<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
}

// Re-export the concrete types used throughout the schema/document model so that
// downstream crates (and generated code) only need to depend on this crate.
pub use bigdecimal::BigDecimal;
pub use bytebuffer::ByteBuffer;
pub use num_bigint::BigInt;
pub use temporal_rs::Instant;

pub use smithy4rs_core_derive as derive;
