//! Topology reconstruction and the indexed mesh representation.
//!
//! This module contains the heart of the crate: [`TopologyBuilder`] turns a
//! flat triangle soup into an [`IndexedMesh`] whose vertices, edges, and
//! faces are fully cross-linked by index.
//!
//! # Construction
//!
//! ```
//! use trellis::topology::build_from_soup;
//! use nalgebra::Point3;
//!
//! let soup = vec![[
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ]];
//!
//! let mesh = build_from_soup(&soup);
//! assert_eq!(mesh.num_vertices(), 3);
//! assert_eq!(mesh.num_edges(), 3);
//! ```

mod builder;
mod index;
mod mesh;

pub use builder::{build_from_soup, TopologyBuilder};
pub use index::{EdgeId, FaceId, VertexId};
pub use mesh::{Edge, Face, IndexedMesh, Vertex};
