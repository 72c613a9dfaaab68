//! Index types for topology entities.
//!
//! All cross-references between vertices, edges, and faces are integer
//! indices into the dense collections owned by
//! [`IndexedMesh`](super::IndexedMesh). These wrappers keep the three index
//! spaces from being mixed up at compile time while staying `Copy` and
//! `repr(transparent)` over a plain `u32`.
//!
//! Indices are zero-based, assigned sequentially by order of first
//! discovery, and never reused or compacted.

use std::fmt::{self, Debug};

/// A type-safe vertex index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId(u32);

/// A type-safe edge index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct EdgeId(u32);

/// A type-safe face index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FaceId(u32);

macro_rules! impl_index_type {
    ($name:ident, $display:literal) => {
        impl $name {
            /// Create a new index from a raw value.
            ///
            /// # Panics
            /// Panics in debug builds if the value does not fit in `u32`.
            #[inline]
            pub fn new(index: usize) -> Self {
                debug_assert!(index <= u32::MAX as usize, "index {} too large for u32", index);
                Self(index as u32)
            }

            /// Get the index as a `usize`, suitable for slice indexing.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $display, self.0)
            }
        }

        impl From<usize> for $name {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_index_type!(VertexId, "V");
impl_index_type!(EdgeId, "E");
impl_index_type!(FaceId, "F");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        let v = VertexId::new(42);
        assert_eq!(v.index(), 42);

        let e: EdgeId = 7usize.into();
        assert_eq!(e.index(), 7);
    }

    #[test]
    fn test_type_safety() {
        // Same raw value, distinct types
        let v = VertexId::new(0);
        let e = EdgeId::new(0);
        let f = FaceId::new(0);

        assert_eq!(v.index(), e.index());
        assert_eq!(e.index(), f.index());
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", VertexId::new(42)), "V(42)");
        assert_eq!(format!("{:?}", EdgeId::new(3)), "E(3)");
        assert_eq!(format!("{:?}", FaceId::new(0)), "F(0)");
    }
}
