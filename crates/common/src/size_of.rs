//! Shallow retained-size estimates for memory accounting.
//!
//! Estimates count the inline footprint of a value plus the bytes of
//! content it owns. They depend only on content, never on allocator
//! slack, and are not exact measurements.

use std::mem;

/// Inline size of `T`, including any enum or scalar fields stored inline.
pub const fn instance_size<T>() -> usize {
    mem::size_of::<T>()
}

/// Content bytes of a string. The `String` header itself is part of the
/// owner's [`instance_size`].
pub fn estimated_size_of_str(value: &str) -> usize {
    value.len()
}
